use std::fs;

use anyhow::{Context, Result};
use clap::{App, load_yaml};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use anticlique_color::generators::random_graph;
use anticlique_color::util::init_logging;


/** parses an argument that has a value (required or with a default) */
fn parse_arg<T:std::str::FromStr>(main_args:&clap::ArgMatches, name:&str) -> Result<T> {
    let raw = main_args.value_of(name).with_context(|| format!("missing argument {}", name))?;
    raw.parse::<T>().ok().with_context(|| format!("invalid value for {}: `{}`", name, raw))
}

/** average number of maximal anticliques of G(n,p), grouped by number of edges */
pub fn main() -> Result<()> {
    init_logging();
    // parse arguments
    let yaml = load_yaml!("anticlique_distribution.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let n:usize = parse_arg(&main_args, "vertices")?;
    let density:f64 = parse_arg(&main_args, "density")?;
    let k:usize = parse_arg(&main_args, "trials")?;
    let output = main_args.value_of("output").context("missing output file")?;
    let mut rng = match main_args.value_of("seed") {
        None => StdRng::from_entropy(),
        Some(s) => StdRng::seed_from_u64(s.parse::<u64>().with_context(|| format!("invalid seed `{}`", s))?),
    };
    anyhow::ensure!(density > 0., "density must be positive");

    // results[m]: numbers of maximal anticliques of the sampled graphs with m edges
    let mut results:Vec<Vec<usize>> = vec![Vec::new() ; 1 + n * n.saturating_sub(1) / 2];
    let mut step = 0;
    loop {
        let p = step as f64 * density;
        if p > 1. { break; }
        info!(p, "sampling");
        for _ in 0..k {
            let graph = random_graph(n, p, &mut rng);
            results[graph.nb_edges()].push(graph.max_anticliques().count());
        }
        step += 1;
    }
    let mut content = String::default();
    for group in &results {
        let average = if group.is_empty() { 0. } else {
            group.iter().sum::<usize>() as f64 / group.len() as f64
        };
        content += format!("{}\n", average).as_str();
    }
    fs::write(output, content).with_context(|| format!("unable to write {}", output))?;
    Ok(())
}
