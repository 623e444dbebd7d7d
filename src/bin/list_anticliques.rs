use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{App, load_yaml};
use serde_json::json;
use tracing::info;

use anticlique_color::util::{init_logging, read_params, export_results};


/** lists the maximal anticliques of an instance */
pub fn main() -> Result<()> {
    init_logging();
    // parse arguments
    let yaml = load_yaml!("list_anticliques.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let params = read_params(&main_args)?;

    // solve it
    let t_start = Instant::now();
    let enumeration = params.graph.list_max_anticliques(&params.config);
    let duration = t_start.elapsed().as_secs_f32();
    info!(
        duration,
        nb_anticliques = enumeration.anticliques.len(),
        truncated = enumeration.truncated,
        "enumeration done"
    );
    let mut listing = String::default();
    for anticlique in &enumeration.anticliques {
        let vertices:Vec<String> = anticlique.iter().map(|v| v.to_string()).collect();
        listing += vertices.join(" ").as_str();
        listing += "\n";
    }
    match &params.sol_file {
        None => print!("{}", listing),
        Some(filename) => fs::write(filename, listing)
            .with_context(|| format!("unable to write the anticliques in {}", filename))?,
    }
    if enumeration.truncated {
        println!("truncated after {} maximal anticliques", enumeration.anticliques.len());
    }
    let stats = json!({
        "nb_anticliques": enumeration.anticliques.len(),
        "truncated": enumeration.truncated,
        "time_searched": duration,
        "inst_name": params.inst_filename,
        "nb_edges": params.graph.nb_edges(),
    });

    // export results
    export_results(&stats, params.perf_file.as_deref(), None, None)
}
