use std::process;

use clap::{App, load_yaml};

use greedy_color::{
    color::{Graph, checker_solution, CheckerResult},
    dimacs::read_solution_from_file,
    error::MalformedInputError,
    util::init_logging,
};

/** checks a solution file against a DIMACS instance.
prints the number of colors, or the first violation found */
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("color_checker.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    init_logging(0);
    let inst_filename = main_args.value_of("instance").unwrap_or_default();
    let sol_filename = main_args.value_of("solution").unwrap_or_default();
    // read files
    let read = || -> Result<_, MalformedInputError> {
        Ok((Graph::from_file(inst_filename)?, read_solution_from_file(sol_filename)?))
    };
    let (instance, solution) = match read() {
        Ok(res) => res,
        Err(e) => {
            println!("ERROR: {}", e);
            process::exit(2);
        }
    };
    // call checker
    match checker_solution(&instance, &solution) {
        CheckerResult::Ok(n) => {
            println!("{}", n);
        },
        violation => {
            println!("ERROR: {}", violation);
            process::exit(1);
        },
    };
}
