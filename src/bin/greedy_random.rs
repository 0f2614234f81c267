use std::process;

use clap::{App, load_yaml};
use tracing::error;

use greedy_color::report::INVALID_COLORING_WARNING;
use greedy_color::search::Algorithm;
use greedy_color::util::{read_params, init_logging, solve};


/** solves a coloring instance using a random greedy (seeded by --seed) */
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("greedy_random.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    init_logging(main_args.occurrences_of("verbose"));
    let params = read_params(&main_args);

    // solve it and export results
    match solve(Algorithm::Random, &params) {
        Ok(record) => {
            if !record.valid { println!("{}", INVALID_COLORING_WARNING); }
            println!("random greedy took {:.3} seconds. Nb colors: {}", record.time_searched, record.nb_colors);
        },
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}
