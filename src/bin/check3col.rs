use std::time::Instant;

use anyhow::{bail, Result};
use clap::{App, load_yaml};
use serde_json::json;
use tracing::info;

use anticlique_color::coloring::{checker, CheckerResult, ColoringVerdict};
use anticlique_color::util::{init_logging, read_params, export_results};


/** decides if a graph is 3-colorable, optionally exports a 3-coloring */
pub fn main() -> Result<()> {
    init_logging();
    // parse arguments
    let yaml = load_yaml!("check3col.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let params = read_params(&main_args)?;

    // solve it
    let t_start = Instant::now();
    let verdict = params.graph.check_3_coloring_with(&params.config);
    let duration = t_start.elapsed().as_secs_f32();
    info!(duration, "3-coloring test done");
    match &verdict {
        ColoringVerdict::Colorable { anticlique } => println!("3-colorable (first color: {})", anticlique),
        ColoringVerdict::NotColorable => println!("not 3-colorable"),
        ColoringVerdict::Inconclusive { explored } => println!(
            "inconclusive: no witness among the first {} maximal anticliques", explored
        ),
    }

    // build the coloring if needed
    let solution = match (&verdict, &params.sol_file) {
        (ColoringVerdict::Colorable { .. }, Some(_)) => params.graph.find_3_coloring(),
        _ => None,
    };
    if let Some(sol) = &solution {
        match checker(&params.graph, sol) {
            CheckerResult::Ok(nb_colors) => info!(nb_colors, "coloring checked"),
            other => bail!("invalid solution (reason: {:?})", other),
        }
    }
    let stats = json!({
        "verdict": verdict,
        "time_searched": duration,
        "inst_name": params.inst_filename,
        "config": params.config,
    });

    // export results
    export_results(&stats, params.perf_file.as_deref(), params.sol_file.as_deref(), solution.as_ref())
}
