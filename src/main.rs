//! Batch harness: colors a list of DIMACS instances with one algorithm and writes reports

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::process;
use std::time::Instant;

use clap::{App, load_yaml, value_t};
use tracing::{error, info, warn};

use greedy_color::color::{ColoringInstance, Graph, checker};
use greedy_color::error::RunError;
use greedy_color::report::{
    ColorsReport, CsvReport, RunRecord, INVALID_COLORING_WARNING, table_header, table_row
};
use greedy_color::search::Algorithm;
use greedy_color::util::init_logging;

/// instances colored when none are given
const BENCHMARK_INSTANCES: [&str ; 19] = [
    "myciel3.col", "myciel7.col", "latin_square_10.col", "school1.col", "school1_nsh.col",
    "mulsol.i.1.col", "inithx.i.1.col", "anna.col", "huck.col", "jean.col", "miles1000.col",
    "miles1500.col", "fpsol2.i.1.col", "le450_5a.col", "le450_15b.col", "le450_25a.col",
    "games120.col", "queen11_11.col", "queen5_5.col",
];

/** colors every instance, returns the number of instances that could not be read
or whose coloring is invalid. A bad instance does not stop the batch.
*/
fn run_batch(
    dir:&Path,
    instances:&[&str],
    algorithm:Algorithm,
    seed:u64,
    csv_file:&str,
    colors_file:&str,
) -> Result<usize, RunError> {
    let mut csv_report = CsvReport::new(BufWriter::new(File::create(csv_file)?))?;
    let mut colors_report = ColorsReport::new(BufWriter::new(File::create(colors_file)?));
    let mut nb_failures:usize = 0;
    println!("{}", table_header());
    for name in instances {
        let instance = match Graph::from_file(dir.join(name)) {
            Ok(instance) => instance,
            Err(e) => {
                error!("skipping {}: {}", name, e);
                nb_failures += 1;
                continue;
            }
        };
        instance.display_statistics();
        let t_start = Instant::now();
        let coloring = algorithm.run(&instance, seed);
        let duration = t_start.elapsed().as_secs_f64();
        let check = checker(&instance, &coloring);
        if !check.is_ok() {
            warn!("{}: invalid coloring ({})", name, check);
            println!("{}", INVALID_COLORING_WARNING);
            nb_failures += 1;
        }
        let record = RunRecord::new(name, algorithm, &coloring, &check, duration, true);
        println!("{}", table_row(&record));
        csv_report.push(&record)?;
        colors_report.push(&record)?;
    }
    csv_report.into_inner()?;
    colors_report.into_inner()?;
    Ok(nb_failures)
}

/**
reads the list of instances and the algorithm, colors every instance.

exit code: 0 if every instance was colored correctly, 1 otherwise, 2 if reports cannot be written
*/
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("main_args.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    init_logging(main_args.occurrences_of("verbose"));
    let algorithm = value_t!(main_args, "algorithm", Algorithm).unwrap_or_else(|e| e.exit());
    let seed = value_t!(main_args, "seed", u64).unwrap_or_else(|e| e.exit());
    let dir = Path::new(main_args.value_of("dir").unwrap_or("data"));
    let instances:Vec<&str> = match main_args.values_of("instances") {
        None => BENCHMARK_INSTANCES.to_vec(),
        Some(values) => values.collect(),
    };
    info!("coloring {} instances from {} with {}", instances.len(), dir.display(), algorithm);
    let res = run_batch(
        dir,
        &instances,
        algorithm,
        seed,
        main_args.value_of("csv").unwrap_or("output_report.csv"),
        main_args.value_of("colors").unwrap_or("colors_report.txt"),
    );
    match res {
        Ok(0) => {},
        Ok(nb_failures) => {
            warn!("{} / {} instances failed", nb_failures, instances.len());
            process::exit(1);
        },
        Err(e) => {
            error!("{}", e);
            process::exit(2);
        }
    }
}
