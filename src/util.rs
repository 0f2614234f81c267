use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::Instant;

use clap::{ArgMatches, value_t};
use serde_json::Value;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::{
    color::{ColoringInstance, Coloring, Graph, checker},
    dimacs::write_coloring,
    error::RunError,
    report::{RunRecord, stats_json},
    search::Algorithm,
};

/** parameters shared by the solver executables */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    /// instance file (DIMACS)
    pub inst_filename: String,
    /// seed of the random generator
    pub seed: u64,
    /// where to write the solution
    pub sol_file: Option<String>,
    /// where to write the statistics (json)
    pub perf_file: Option<String>,
}

/** reads command line input. Exits with clap's message if a value is invalid. */
pub fn read_params(main_args:&ArgMatches) -> Params {
    let inst_filename = main_args.value_of("instance").unwrap_or_default().to_string();
    let seed:u64 = if main_args.is_present("seed") {
        value_t!(main_args, "seed", u64).unwrap_or_else(|e| e.exit())
    } else { 0 };
    // read value of the solution filename
    let sol_file = main_args.value_of("solution").map(|e| {
        info!("printing solutions in: {}", e);
        e.to_string()
    });
    // read value of the performance logs filename
    let perf_file = main_args.value_of("perf").map(|e| {
        info!("printing perfs in: {}", e);
        e.to_string()
    });
    Params { inst_filename, seed, sol_file, perf_file }
}

/** installs the log subscriber (stderr). `RUST_LOG` overrides the verbosity:
0 -> info, 1 -> debug, 2+ -> trace
*/
pub fn init_logging(verbosity:u64) {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // a subscriber may already be installed (e.g. several calls in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/** exports statistics (json) and solution (one line per color) if the files are given */
pub fn export_results(
    coloring:&Coloring,
    stats:&Value,
    perf_file:Option<&str>,
    sol_file:Option<&str>,
) -> Result<(), RunError> {
    // export statistics
    if let Some(filename) = perf_file {
        let mut file = BufWriter::new(File::create(filename)?);
        serde_json::to_writer(&mut file, stats)?;
        file.flush()?;
    }
    // export solution
    if let Some(filename) = sol_file {
        write_coloring(filename, coloring)?;
    }
    Ok(())
}

/** reads the instance, colors it with the algorithm, checks and exports the results.
An invalid coloring is reported (not an error) and still exported.
*/
pub fn solve(algorithm:Algorithm, params:&Params) -> Result<RunRecord, RunError> {
    let instance = Graph::from_file(&params.inst_filename)?;
    instance.display_statistics();
    // solve it
    let t_start = Instant::now();
    let coloring = algorithm.run(&instance, params.seed);
    let duration = t_start.elapsed().as_secs_f64();
    let check = checker(&instance, &coloring);
    if !check.is_ok() {
        warn!("invalid solution (reason: {})", check);
    }
    let record = RunRecord::new(&params.inst_filename, algorithm, &coloring, &check, duration, false);
    export_results(
        &coloring,
        &stats_json(&record),
        params.perf_file.as_deref(),
        params.sol_file.as_deref(),
    )?;
    Ok(record)
}
