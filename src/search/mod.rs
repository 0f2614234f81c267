//! Greedy coloring algorithms.

use std::fmt;
use std::str::FromStr;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::color::{ColoringInstance, Coloring};

/// random order greedy, opens a new color on conflict
pub mod greedy_random;

/// greedy DSATUR algorithm
pub mod greedy_dsatur;

/// Recursive Largest First algorithm (RLF)
pub mod greedy_rlf;


/** available coloring algorithms. They are independent: a run uses exactly one. */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// random greedy (see `greedy_random`)
    Random,
    /// DSATUR (see `greedy_dsatur`)
    Dsatur,
    /// Recursive Largest First (see `greedy_rlf`)
    Rlf,
}

impl Algorithm {
    /// every algorithm
    pub const ALL: [Algorithm ; 3] = [Algorithm::Random, Algorithm::Dsatur, Algorithm::Rlf];

    /** colors the instance. The seed is only used by the random greedy
    (a fresh generator is created for each call).
    */
    pub fn run(&self, inst:&dyn ColoringInstance, seed:u64) -> Coloring {
        match self {
            Algorithm::Random => {
                let mut rng = StdRng::seed_from_u64(seed);
                greedy_random::greedy_random(inst, &mut rng)
            },
            Algorithm::Dsatur => greedy_dsatur::greedy_dsatur(inst),
            Algorithm::Rlf => greedy_rlf::greedy_rlf(inst),
        }
    }

    /// name used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Random => "random",
            Algorithm::Dsatur => "dsatur",
            Algorithm::Rlf => "rlf",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" | "greedy" => Ok(Algorithm::Random),
            "dsatur" => Ok(Algorithm::Dsatur),
            "rlf" => Ok(Algorithm::Rlf),
            _ => Err(format!("unknown algorithm '{}' (valid: 'random', 'dsatur', 'rlf')", s)),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::color::{Graph, checker};

    #[test]
    fn test_parse_algorithm() {
        assert_eq!("dsatur".parse::<Algorithm>(), Ok(Algorithm::Dsatur));
        assert_eq!("RLF".parse::<Algorithm>(), Ok(Algorithm::Rlf));
        assert_eq!("random".parse::<Algorithm>(), Ok(Algorithm::Random));
        assert!("tabucol".parse::<Algorithm>().is_err());
        for algo in Algorithm::ALL.iter() {
            assert_eq!(algo.to_string().parse::<Algorithm>(), Ok(*algo));
        }
    }

    #[test]
    fn test_run_all_on_triangle() {
        let inst = Graph::from_edges(3, &[(1,2), (2,3), (1,3)]).unwrap();
        for algo in Algorithm::ALL.iter() {
            let coloring = algo.run(&inst, 0);
            assert_eq!(checker(&inst, &coloring).nb_colors(), Some(3), "{}", algo);
        }
    }
}
