//! Greedy heuristics for the Graph Coloring problem (random greedy, DSATUR, RLF)

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// coloring instance base trait, colorings and checker
pub mod color;

/// errors raised while reading instances and exporting results
pub mod error;

/// read/write DIMACS formats
pub mod dimacs;

/// greedy coloring algorithms
pub mod search;

/// run records and reports (csv, colors, json statistics)
pub mod report;

/// helper and utility methods for executables
pub mod util;
