use std::io::{self, Write};

use serde::{Serialize, Deserialize};
use serde_json::{json, Value};

use crate::color::{Coloring, CheckerResult};
use crate::search::Algorithm;

/// line written before the row of an instance whose coloring is invalid
pub const INVALID_COLORING_WARNING: &str = "*** WARNING: incorrect coloring: ***";

/** result of one run (one instance colored by one algorithm) */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// instance name
    pub instance: String,
    /// algorithm name
    pub algorithm: String,
    /// number of colors used
    pub nb_colors: usize,
    /// time spent coloring (seconds)
    pub time_searched: f64,
    /// result of the checker
    pub valid: bool,
    /// per-vertex colors (1-based), if kept
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<usize>>,
}

impl RunRecord {
    /** builds the record of a run. `keep_colors` stores the full assignment. */
    pub fn new(
        instance:&str,
        algorithm:Algorithm,
        coloring:&Coloring,
        check:&CheckerResult,
        time_searched:f64,
        keep_colors:bool,
    ) -> Self {
        Self {
            instance: instance.to_string(),
            algorithm: algorithm.to_string(),
            nb_colors: coloring.nb_colors(),
            time_searched,
            valid: check.is_ok(),
            colors: if keep_colors { Some(coloring.to_one_based()) } else { None },
        }
    }
}

/// rounds value to the given precision (a power of ten, e.g. 0.001)
pub fn round_to(value:f64, precision:f64) -> f64 {
    let factor = (1. / precision).round();
    (value * factor).round() / factor
}

/// statistics of a run, exported in the perf file
pub fn stats_json(record:&RunRecord) -> Value {
    json!({
        "primal_list": vec![record.nb_colors],
        "time_searched": record.time_searched,
        "inst_name": record.instance,
        "algorithm": record.algorithm,
        "valid": record.valid,
    })
}

/// header of the console table
pub fn table_header() -> String {
    format!("{:>20}{:>10}{:>15}", "Instance", "Colors", "Time, sec")
}

/// row of the console table
pub fn table_row(record:&RunRecord) -> String {
    format!("{:>20}{:>10}{:>15}", record.instance, record.nb_colors, round_to(record.time_searched, 0.001))
}


/** CSV report: `Instance; Colors; Time (sec)` then one row per instance */
#[derive(Debug)]
pub struct CsvReport<W:Write> {
    out: W,
}

impl<W:Write> CsvReport<W> {
    /// creates the report and writes its header
    pub fn new(mut out:W) -> io::Result<Self> {
        writeln!(out, "Instance; Colors; Time (sec)")?;
        Ok(Self { out })
    }

    /// adds a row (preceded by a warning if the coloring is invalid)
    pub fn push(&mut self, record:&RunRecord) -> io::Result<()> {
        if !record.valid {
            writeln!(self.out, "{}", INVALID_COLORING_WARNING)?;
        }
        writeln!(self.out, "{};{};{}", record.instance, record.nb_colors, round_to(record.time_searched, 0.001))
    }

    /// flushes and returns the underlying writer
    pub fn into_inner(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}


/** per-vertex colors: instance name, colors separated by spaces, empty line */
#[derive(Debug)]
pub struct ColorsReport<W:Write> {
    out: W,
}

impl<W:Write> ColorsReport<W> {
    /// creates the report
    pub fn new(out:W) -> Self { Self { out } }

    /// adds an instance (nothing is written if the record does not keep its colors)
    pub fn push(&mut self, record:&RunRecord) -> io::Result<()> {
        if let Some(colors) = &record.colors {
            let colors:Vec<String> = colors.iter().map(|c| c.to_string()).collect();
            writeln!(self.out, "{}\n{}\n", record.instance, colors.join(" "))?;
        }
        Ok(())
    }

    /// flushes and returns the underlying writer
    pub fn into_inner(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
