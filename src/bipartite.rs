use crate::graph::Graph;
use crate::vertex_set::{VertexId, VertexSet};

/** side of a vertex in a two-coloring */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// first color (given to the root of each component)
    Left,
    /// second color
    Right,
}

impl Side {
    /// the other side
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Uncolored,
    Excluded,
    Colored(Side),
}

/// outcome of resuming the neighbor scan of a vertex
enum Step {
    /// found an uncolored neighbor (and the cursor to resume from)
    Descend(VertexId, usize),
    /// every neighbor is resolved
    Done,
    /// a neighbor has the same side: odd cycle
    Conflict,
}

/// scans the neighbors of `v` (of side `side`) from index `cursor`
fn resume_scan(graph:&Graph, marks:&[Mark], v:VertexId, side:Side, cursor:usize) -> Step {
    let row = graph.neighbors(v);
    for u in cursor..graph.nb_vertices() {
        if !row.contains(u) { continue; }
        match marks[u] {
            Mark::Uncolored => return Step::Descend(u, u+1),
            Mark::Colored(s) if s == side => return Step::Conflict,
            _ => {}
        }
    }
    Step::Done
}

/**
two-coloring of the subgraph induced by the vertices not in `excluded`.

Returns None if this subgraph contains an odd cycle. Otherwise, `res[v]` is the side of `v`
(None for excluded vertices). Uses an explicit stack of (vertex, side, cursor) so that long
paths do not hit the recursion limit. O(n²) because neighbors are scanned on the dense rows.
*/
pub fn two_coloring(graph:&Graph, excluded:&VertexSet) -> Option<Vec<Option<Side>>> {
    let n = graph.nb_vertices();
    let mut marks = vec![Mark::Uncolored ; n];
    for v in excluded.iter() {
        marks[v] = Mark::Excluded;
    }
    let mut stack:Vec<(VertexId, Side, usize)> = Vec::new();
    for root in 0..n {
        if marks[root] != Mark::Uncolored { continue; }
        marks[root] = Mark::Colored(Side::Left);
        stack.push((root, Side::Left, 0));
        while let Some(&(v, side, cursor)) = stack.last() {
            match resume_scan(graph, &marks, v, side, cursor) {
                Step::Conflict => return None,
                Step::Done => { stack.pop(); },
                Step::Descend(u, next_cursor) => {
                    if let Some(top) = stack.last_mut() { top.2 = next_cursor; }
                    marks[u] = Mark::Colored(side.opposite());
                    stack.push((u, side.opposite(), 0));
                }
            }
        }
    }
    Some(marks.into_iter().map(|m| match m {
        Mark::Colored(s) => Some(s),
        _ => None,
    }).collect())
}

/// true iff the graph without the vertices of `excluded` is bipartite
pub fn is_rest_bipartite(graph:&Graph, excluded:&VertexSet) -> bool {
    two_coloring(graph, excluded).is_some()
}

impl Graph {
    /// see [`is_rest_bipartite`]
    pub fn is_rest_bipartite(&self, excluded:&VertexSet) -> bool { is_rest_bipartite(self, excluded) }
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::generators::{complete_graph, cycle_graph};

    fn check_proper(graph:&Graph, sides:&[Option<Side>]) {
        for (u,v) in graph.edges() {
            if let (Some(a), Some(b)) = (sides[u], sides[v]) {
                assert_ne!(a, b, "edge ({}, {}) is monochromatic", u, v);
            }
        }
    }

    #[test]
    fn test_even_cycle() {
        let g = cycle_graph(6);
        let sides = two_coloring(&g, &VertexSet::empty(6)).unwrap();
        assert!(sides.iter().all(|s| s.is_some()));
        assert_eq!(sides[0], Some(Side::Left));
        assert_eq!(sides[1], Some(Side::Right));
        check_proper(&g, &sides);
    }

    #[test]
    fn test_odd_cycle() {
        let g = cycle_graph(5);
        assert!(!is_rest_bipartite(&g, &VertexSet::empty(5)));
        // removing any vertex leaves a path
        for v in 0..5 {
            assert!(g.is_rest_bipartite(&VertexSet::from_vertices(5, vec![v])));
        }
    }

    #[test]
    fn test_excluded_vertices() {
        let g = complete_graph(4);
        assert!(!g.is_rest_bipartite(&VertexSet::from_vertices(4, vec![0])));
        let sides = two_coloring(&g, &VertexSet::from_vertices(4, vec![0, 1])).unwrap();
        assert_eq!(sides[0], None);
        assert_eq!(sides[1], None);
        check_proper(&g, &sides);
    }

    #[test]
    fn test_several_components() {
        // triangle 0-1-2 excluded through 0, plus a path 3-4-5
        let g = Graph::from_edges(6, &[(0,1), (1,2), (2,0), (3,4), (4,5)]);
        let sides = two_coloring(&g, &VertexSet::from_vertices(6, vec![0])).unwrap();
        check_proper(&g, &sides);
        assert_eq!(sides[3], Some(Side::Left));
        assert_eq!(sides[5], Some(Side::Left));
    }

    #[test]
    fn test_long_path_does_not_recurse() {
        let n = 5_000;
        let edges:Vec<(usize,usize)> = (1..n).map(|v| (v-1, v)).collect();
        let g = Graph::from_edges(n, &edges);
        assert!(g.is_rest_bipartite(&VertexSet::empty(n)));
    }

    #[test]
    fn test_zero_vertices() {
        assert_eq!(two_coloring(&Graph::empty(0), &VertexSet::empty(0)), Some(vec![]));
    }
}
