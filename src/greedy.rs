use bit_set::BitSet;

use crate::graph::Graph;
use crate::vertex_set::VertexSet;

/** greedy "lexicographically least maximal anticlique" of the whole graph.

Scans the vertices in increasing order. A vertex that is not excluded yet is taken, and its
neighbors are excluded. The vertices never excluded form the result, which is the smallest
maximal anticlique for the order of [`VertexSet`].
*/
pub fn lex_min_max_anticlique(graph:&Graph) -> VertexSet {
    complete_anticlique(graph, &BitSet::new())
}

/** lexicographically least maximal anticlique that contains the anticlique `seed`.

The neighbors of every seed vertex are excluded first, then the greedy scan of
[`lex_min_max_anticlique`] runs over the remaining vertices (seed vertices are picked up by the
scan since nothing excludes them). `seed` must be an anticlique.

Costs one pass over the vertices with a word-parallel union per taken vertex.
*/
pub fn complete_anticlique(graph:&Graph, seed:&BitSet) -> VertexSet {
    let n = graph.nb_vertices();
    let mut excluded = BitSet::with_capacity(n);
    for v in seed.iter() {
        excluded.union_with(graph.neighbors(v));
    }
    for v in 0..n {
        if !excluded.contains(v) {
            excluded.union_with(graph.neighbors(v));
        }
    }
    let mut res = VertexSet::full(n).into_bits();
    res.difference_with(&excluded);
    VertexSet::new(n, res)
}

impl Graph {
    /// see [`lex_min_max_anticlique`]
    pub fn lex_min_max_anticlique(&self) -> VertexSet { lex_min_max_anticlique(self) }
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::generators::complete_graph;

    /// 1-based edges, as in the usual instance files
    fn build_graph(n:usize, edges:&[(usize,usize)]) -> Graph {
        let zero_based:Vec<(usize,usize)> = edges.iter().map(|(a,b)| (a-1, b-1)).collect();
        Graph::from_edges(n, &zero_based)
    }

    #[test]
    fn test_empty_graphs() {
        for n in 1..=5 {
            assert_eq!(Graph::empty(n).lex_min_max_anticlique(), VertexSet::full(n));
        }
    }

    #[test]
    fn test_full_graphs() {
        for n in 1..=5 {
            assert_eq!(complete_graph(n).lex_min_max_anticlique(), VertexSet::from_mask(n, 0b1));
        }
    }

    #[test]
    fn test_mixed_graphs() {
        let g1 = build_graph(5, &[(1,2)]);
        let g2 = build_graph(5, &[(1,2), (1,4)]);
        let g3 = build_graph(5, &[(1,2), (1,3), (1,4)]);
        let g4 = build_graph(5, &[(1,5), (2,5), (3,5), (1,2)]);
        assert_eq!(g1.lex_min_max_anticlique(), VertexSet::from_mask(5, 0b11101));
        assert_eq!(g2.lex_min_max_anticlique(), VertexSet::from_mask(5, 0b10101));
        assert_eq!(g3.lex_min_max_anticlique(), VertexSet::from_mask(5, 0b10001));
        assert_eq!(g4.lex_min_max_anticlique(), VertexSet::from_mask(5, 0b01101));
    }

    #[test]
    fn test_seed_forces_vertices() {
        // path 0-1-2-3
        let g = Graph::from_edges(4, &[(0,1), (1,2), (2,3)]);
        let seed_1:BitSet = vec![1].into_iter().collect();
        assert_eq!(complete_anticlique(&g, &seed_1), VertexSet::from_vertices(4, vec![1, 3]));
        let seed_2:BitSet = vec![2].into_iter().collect();
        assert_eq!(complete_anticlique(&g, &seed_2), VertexSet::from_vertices(4, vec![0, 2]));
    }

    #[test]
    fn test_zero_vertices() {
        assert!(Graph::empty(0).lex_min_max_anticlique().is_empty());
    }
}
