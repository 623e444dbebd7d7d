use std::fs;

use anyhow::{Context, Result};
use clap::ArgMatches;
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::coloring::Solution;
use crate::dimacs::read_from_file;
use crate::enumeration::EnumerationConfig;
use crate::graph::Graph;

/** installs the log subscriber (stderr, filtered by `RUST_LOG`, `info` by default).
Does nothing if a subscriber is already installed.
*/
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/** parameters shared by the executables */
#[derive(Debug)]
pub struct Params {
    /// instance file name
    pub inst_filename: String,
    /// instance
    pub graph: Graph,
    /// enumeration limit
    pub config: EnumerationConfig,
    /// where to write the solution
    pub sol_file: Option<String>,
    /// where to write the statistics
    pub perf_file: Option<String>,
}

/** reads command line input: the instance, the optional enumeration limit and output files */
pub fn read_params(main_args:&ArgMatches) -> Result<Params> {
    let inst_filename = main_args.value_of("instance")
        .context("missing instance argument")?
        .to_string();
    let max_results = match main_args.value_of("max-results") {
        None => None,
        Some(e) => Some(e.parse::<usize>().with_context(|| format!("invalid --max-results `{}`", e))?),
    };
    let config = EnumerationConfig { max_results };
    // read value of the solution filename
    let sol_file = main_args.value_of("solution").map(|e| {
        info!(file = e, "printing solutions");
        e.to_string()
    });
    // read value of the performance logs filename
    let perf_file = main_args.value_of("perf").map(|e| {
        info!(file = e, "printing perfs");
        e.to_string()
    });
    let graph = read_from_file(&inst_filename)?;
    graph.display_statistics();
    Ok(Params { inst_filename, graph, config, sol_file, perf_file })
}

/** writes a string encoding the solution: each line corresponds to a color */
pub fn solution_to_string(solution:&[Vec<usize>]) -> String {
    let mut res = String::default();
    for e in solution {
        let line:Vec<String> = e.iter().map(|v| v.to_string()).collect();
        res += line.join(" ").as_str();
        res += "\n";
    }
    res
}

/// exports search results to files
pub fn export_results(
    stats:&Value,
    perf_file:Option<&str>,
    sol_file:Option<&str>,
    solution:Option<&Solution>,
) -> Result<()> {
    if let Some(filename) = perf_file {
        let content = serde_json::to_string_pretty(stats)?;
        fs::write(filename, content).with_context(|| format!("couldn't write {}", filename))?;
    }
    if let (Some(filename), Some(sol)) = (sol_file, solution) {
        fs::write(filename, solution_to_string(sol))
            .with_context(|| format!("write_solution: unable to write the solution in {}", filename))?;
    }
    Ok(())
}
