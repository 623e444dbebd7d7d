use bit_set::BitSet;
use serde::Serialize;
use tracing::{debug, info};

use crate::bipartite::{two_coloring, Side};
use crate::enumeration::EnumerationConfig;
use crate::graph::Graph;
use crate::vertex_set::{VertexId, VertexSet};

/** Solution of a graph coloring problem
(represented as a partition).
*/
pub type Solution = Vec<Vec<VertexId>>;

/** answer of a (possibly bounded) 3-coloring test */
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum ColoringVerdict {
    /// removing `anticlique` leaves a bipartite graph
    Colorable {
        /// maximal anticlique used as the first color
        anticlique: VertexSet,
    },
    /// every maximal anticlique was tried: the graph is not 3-colorable
    NotColorable,
    /// the enumeration limit was reached before a witness was found
    Inconclusive {
        /// number of maximal anticliques tried
        explored: usize,
    },
}

impl ColoringVerdict {
    /// true iff the graph is known to be 3-colorable
    pub fn is_colorable(&self) -> bool { matches!(self, ColoringVerdict::Colorable { .. }) }
}

impl Graph {
    /** true iff the graph is 3-colorable.

    A graph is 3-colorable iff some maximal anticlique leaves a bipartite graph once removed.
    The maximal anticliques are tried in increasing order, without limit.
    */
    pub fn check_3_coloring(&self) -> bool {
        self.check_3_coloring_with(&EnumerationConfig::unbounded()).is_colorable()
    }

    /** 3-coloring test trying at most `config.max_results` maximal anticliques.
    Running out of budget gives [`ColoringVerdict::Inconclusive`], never a false "no".
    */
    pub fn check_3_coloring_with(&self, config:&EnumerationConfig) -> ColoringVerdict {
        let mut it = self.max_anticliques();
        let limit = config.max_results.unwrap_or(usize::MAX);
        while it.nb_produced() < limit {
            let anticlique = match it.next() {
                None => break,
                Some(s) => s,
            };
            if self.is_rest_bipartite(&anticlique) {
                debug!(tried = it.nb_produced(), %anticlique, "bipartite remainder found");
                return ColoringVerdict::Colorable { anticlique };
            }
        }
        if it.is_exhausted() {
            ColoringVerdict::NotColorable
        } else {
            info!(explored = it.nb_produced(), "3-coloring test stopped by the enumeration limit");
            ColoringVerdict::Inconclusive { explored: it.nb_produced() }
        }
    }

    /** a 3-coloring of the graph, if any (at most 3 non-empty color classes).
    The first class is the first maximal anticlique whose removal leaves a bipartite graph.
    */
    pub fn find_3_coloring(&self) -> Option<Solution> {
        for anticlique in self.max_anticliques() {
            if let Some(sides) = two_coloring(self, &anticlique) {
                let mut res:Solution = vec![anticlique.iter().collect(), vec![], vec![]];
                for (v, side) in sides.iter().enumerate() {
                    match side {
                        Some(Side::Left) => res[1].push(v),
                        Some(Side::Right) => res[2].push(v),
                        None => {},
                    }
                }
                res.retain(|c| !c.is_empty());
                return Some(res);
            }
        }
        None
    }
}

/** result of the solution checker */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerResult {
    /// feasible solution, with its number of colors
    Ok(usize),
    /// vertex present in two color classes (or twice in one)
    VertexAddedTwice(VertexId),
    /// vertex missing from every color class
    VertexNotColored(VertexId),
    /// two adjacent vertices share a color
    ConflictingEdge(VertexId, VertexId),
}

/**
checks that `sol` is a proper coloring of `graph`.
returns the number of colors if it is, or the first problem found.
*/
pub fn checker(graph:&Graph, sol:&[Vec<VertexId>]) -> CheckerResult {
    // check that all vertices are added
    let mut visited = BitSet::with_capacity(graph.nb_vertices());
    for c in sol {
        for v in c {
            if !visited.insert(*v) {
                return CheckerResult::VertexAddedTwice(*v); // already added
            }
        }
    }
    if let Some(v) = (0..graph.nb_vertices()).find(|v| !visited.contains(*v)) {
        return CheckerResult::VertexNotColored(v);
    }
    // check conflicts
    for c in sol {
        for (i, u) in c.iter().enumerate() {
            for v in &c[i+1..] {
                if graph.are_adjacent(*u, *v) { return CheckerResult::ConflictingEdge(*u, *v); }
            }
        }
    }
    // if ok: return the number of colors
    CheckerResult::Ok(sol.len())
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::generators::{complete_graph, cycle_graph, max_anticlique_graph};

    /// 1-based edges
    fn build_graph(n:usize, edges:&[(usize,usize)]) -> Graph {
        let zero_based:Vec<(usize,usize)> = edges.iter().map(|(a,b)| (a-1, b-1)).collect();
        Graph::from_edges(n, &zero_based)
    }

    #[test]
    fn test_empty_graphs() {
        for n in 0..=5 {
            assert!(Graph::empty(n).check_3_coloring());
        }
    }

    #[test]
    fn test_full_graphs() {
        for n in 1..=3 {
            assert!(complete_graph(n).check_3_coloring());
        }
        for n in 4..=5 {
            assert!(!complete_graph(n).check_3_coloring());
        }
    }

    #[test]
    fn test_mixed_graphs() {
        // two triangles sharing vertex 3
        let bowtie = build_graph(5, &[(1,2), (1,3), (2,3), (3,4), (3,5), (4,5)]);
        // wheel with 4 spokes
        let wheel = build_graph(5, &[(1,2), (2,3), (3,4), (4,1), (1,5), (2,5), (3,5), (4,5)]);
        // contains K4 on {1,2,3,4}
        let with_k4 = build_graph(5, &[(1,2), (1,3), (2,3), (1,4), (3,4), (2,4), (3,5), (4,5)]);
        assert!(bowtie.check_3_coloring());
        assert!(wheel.check_3_coloring());
        assert!(!with_k4.check_3_coloring());
    }

    #[test]
    fn test_verdicts() {
        let k4 = complete_graph(4);
        assert_eq!(k4.check_3_coloring_with(&EnumerationConfig::unbounded()), ColoringVerdict::NotColorable);
        assert_eq!(
            k4.check_3_coloring_with(&EnumerationConfig::bounded(2)),
            ColoringVerdict::Inconclusive { explored: 2 }
        );
        assert_eq!(
            k4.check_3_coloring_with(&EnumerationConfig::bounded(4)),
            ColoringVerdict::NotColorable
        );
        let c5 = cycle_graph(5);
        match c5.check_3_coloring_with(&EnumerationConfig::bounded(1)) {
            ColoringVerdict::Colorable { anticlique } => assert!(c5.is_max_anticlique(&anticlique)),
            other => panic!("unexpected verdict {:?}", other),
        }
    }

    #[test]
    fn test_verdict_serialization() {
        let verdict = ColoringVerdict::Colorable { anticlique: VertexSet::from_vertices(3, vec![0, 2]) };
        assert_eq!(
            serde_json::to_string(&verdict).unwrap(),
            r#"{"verdict":"colorable","anticlique":[0,2]}"#
        );
        assert_eq!(
            serde_json::to_string(&ColoringVerdict::NotColorable).unwrap(),
            r#"{"verdict":"not_colorable"}"#
        );
    }

    #[test]
    fn test_find_3_coloring() {
        for g in &[cycle_graph(5), cycle_graph(7), max_anticlique_graph(9), max_anticlique_graph(11), Graph::empty(3)] {
            let sol = g.find_3_coloring().unwrap();
            assert!(sol.len() <= 3);
            assert_eq!(checker(g, &sol), CheckerResult::Ok(sol.len()));
        }
        assert_eq!(complete_graph(4).find_3_coloring(), None);
        // K4 plus two triangles
        assert_eq!(max_anticlique_graph(10).find_3_coloring(), None);
    }

    #[test]
    fn test_checker() {
        let g = cycle_graph(4);
        assert_eq!(checker(&g, &[vec![0, 2], vec![1, 3]]), CheckerResult::Ok(2));
        assert_eq!(checker(&g, &[vec![0, 2], vec![1, 3, 0]]), CheckerResult::VertexAddedTwice(0));
        assert_eq!(checker(&g, &[vec![0, 2], vec![1]]), CheckerResult::VertexNotColored(3));
        assert_eq!(checker(&g, &[vec![0, 1], vec![2, 3]]), CheckerResult::ConflictingEdge(0, 1));
    }
}
