use std::collections::BTreeSet;

use bit_set::BitSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::graph::Graph;
use crate::greedy::{complete_anticlique, lex_min_max_anticlique};
use crate::vertex_set::{VertexId, VertexSet};

/** parameters of the maximal anticlique enumeration */
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumerationConfig {
    /** stops after this many anticliques (None: enumerate everything).
    A finite value makes the enumeration, and every answer derived from it, possibly incomplete.
    */
    #[serde(default)]
    pub max_results: Option<usize>,
}

impl EnumerationConfig {
    /// enumeration without a limit
    pub fn unbounded() -> Self { Self { max_results: None } }

    /// enumeration stopping after `max_results` anticliques
    pub fn bounded(max_results:usize) -> Self { Self { max_results: Some(max_results) } }
}

/** result of a (possibly bounded) enumeration */
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enumeration {
    /// maximal anticliques found, in increasing order
    pub anticliques: Vec<VertexSet>,
    /// true if the limit was hit while some maximal anticliques were still unreported
    pub truncated: bool,
}

/**
Lists the maximal anticliques of a graph in increasing order (reverse search).

The frontier starts with the lexicographically least maximal anticlique. Each extracted set `s`
produces, for each pivot `j > s.min_vertex()`, the seed `{i in s, i < j, i not adjacent to j} + {j}`.
A seed is kept only if its closed neighborhood covers `0..=j` (the seed is then a maximal
anticlique of the prefix graph, so `s` is its canonical parent); its greedy completion enters
the frontier if it is greater than `s`. Every maximal anticlique is reached exactly once.
*/
#[derive(Debug)]
pub struct MaxAnticliques<'a> {
    /// graph being enumerated
    graph: &'a Graph,
    /// pending anticliques (extract-min, insert-if-absent)
    frontier: BTreeSet<VertexSet>,
    /// nb anticliques produced so far
    nb_produced: usize,
}

impl<'a> MaxAnticliques<'a> {
    /** creates the enumeration, seeded with the least maximal anticlique */
    pub fn new(graph:&'a Graph) -> Self {
        let mut frontier = BTreeSet::new();
        frontier.insert(lex_min_max_anticlique(graph));
        Self { graph, frontier, nb_produced: 0 }
    }

    /// true iff every maximal anticlique has been produced
    pub fn is_exhausted(&self) -> bool { self.frontier.is_empty() }

    /// number of anticliques produced so far
    pub fn nb_produced(&self) -> usize { self.nb_produced }

    /// number of anticliques discovered but not produced yet
    pub fn frontier_size(&self) -> usize { self.frontier.len() }

    /** seed obtained by pivoting `s` on `j`, if `s` is its canonical parent */
    fn admissible_seed(&self, s:&VertexSet, j:VertexId) -> Option<BitSet> {
        let pivot_neighbors = self.graph.neighbors(j);
        let mut seed:BitSet = s.iter()
            .take_while(|i| *i < j)
            .filter(|i| !pivot_neighbors.contains(*i))
            .collect();
        seed.insert(j);
        // the seed must dominate the prefix 0..=j
        let mut covering = seed.clone();
        for i in seed.iter() {
            covering.union_with(self.graph.neighbors(i));
        }
        if (0..=j).all(|i| covering.contains(i)) { Some(seed) } else { None }
    }
}

impl<'a> Iterator for MaxAnticliques<'a> {
    type Item = VertexSet;

    fn next(&mut self) -> Option<VertexSet> {
        let s = self.frontier.pop_first()?;
        let n = self.graph.nb_vertices();
        for j in (s.min_vertex()+1)..n {
            if let Some(seed) = self.admissible_seed(&s, j) {
                let t = complete_anticlique(self.graph, &seed);
                if t > s {
                    self.frontier.insert(t);
                }
            }
        }
        self.nb_produced += 1;
        debug!(produced = self.nb_produced, frontier = self.frontier.len(), "maximal anticlique");
        Some(s)
    }
}

impl Graph {
    /// lazy enumeration of the maximal anticliques, in increasing order
    pub fn max_anticliques(&self) -> MaxAnticliques<'_> { MaxAnticliques::new(self) }

    /// every maximal anticlique of the graph, in increasing order
    pub fn list_all_max_anticliques(&self) -> Vec<VertexSet> {
        self.max_anticliques().collect()
    }

    /** maximal anticliques of the graph in increasing order, up to `config.max_results`.
    The result reports whether the limit cut the enumeration short.
    */
    pub fn list_max_anticliques(&self, config:&EnumerationConfig) -> Enumeration {
        let mut it = self.max_anticliques();
        let anticliques:Vec<VertexSet> = match config.max_results {
            None => it.by_ref().collect(),
            Some(limit) => it.by_ref().take(limit).collect(),
        };
        let truncated = !it.is_exhausted();
        if truncated {
            warn!(
                limit = anticliques.len(),
                pending = it.frontier_size(),
                "maximal anticlique enumeration truncated, results are incomplete"
            );
        }
        Enumeration { anticliques, truncated }
    }
}
