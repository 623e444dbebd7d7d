use bit_set::BitSet;
use rand::Rng;

use crate::graph::Graph;
use crate::vertex_set::VertexId;

/** random graph from the Erdős–Rényi model G(n, p):
each of the n(n-1)/2 edges is present independently with probability `p` (clamped to [0,1]).
*/
pub fn random_graph<R:Rng + ?Sized>(n:usize, p:f64, rng:&mut R) -> Graph {
    let p_edge = p.max(0.).min(1.);
    let mut adj_matrix = vec![BitSet::with_capacity(n) ; n];
    for i in 0..n {
        for j in i+1..n {
            if rng.gen_bool(p_edge) {
                adj_matrix[i].insert(j);
                adj_matrix[j].insert(i);
            }
        }
    }
    Graph::from_adj_matrix(adj_matrix)
}

/// complete graph K_n
pub fn complete_graph(n:usize) -> Graph {
    let edges:Vec<(VertexId,VertexId)> = (0..n)
        .flat_map(|i| (i+1..n).map(move |j| (i,j)))
        .collect();
    Graph::from_edges(n, &edges)
}

/// cycle 0-1-...-(n-1)-0 (n >= 3)
pub fn cycle_graph(n:usize) -> Graph {
    debug_assert!(n >= 3, "a cycle needs at least 3 vertices");
    let edges:Vec<(VertexId,VertexId)> = (0..n).map(|i| (i, (i+1) % n)).collect();
    Graph::from_edges(n, &edges)
}

/** graph on n vertices with the largest number of maximal anticliques (Moon–Moser):
 - n % 3 == 0: n/3 disjoint triangles
 - n % 3 == 1: a K4 and disjoint triangles (n > 3)
 - n % 3 == 2: a K2 and disjoint triangles
*/
pub fn max_anticlique_graph(n:usize) -> Graph {
    let mut edges:Vec<(VertexId,VertexId)> = Vec::new();
    let first_triangle = match n % 3 {
        0 => 0,
        1 if n > 3 => {
            for j in 0..4 {
                for k in j+1..4 { edges.push((j,k)); }
            }
            4
        },
        1 => n, // single vertex: nothing to add
        _ => {
            edges.push((0,1));
            2
        }
    };
    for i in (first_triangle..n).step_by(3) {
        edges.extend_from_slice(&[(i,i+1), (i,i+2), (i+1,i+2)]);
    }
    Graph::from_edges(n, &edges)
}


#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_graph_extremes() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(random_graph(10, 0., &mut rng).nb_edges(), 0);
        assert_eq!(random_graph(10, 1., &mut rng).nb_edges(), 45);
        assert_eq!(random_graph(10, 2., &mut rng).nb_edges(), 45);
    }

    #[test]
    fn test_random_graph_is_seeded() {
        let g1 = random_graph(20, 0.5, &mut StdRng::seed_from_u64(7));
        let g2 = random_graph(20, 0.5, &mut StdRng::seed_from_u64(7));
        assert_eq!(g1.edges(), g2.edges());
    }

    #[test]
    fn test_named_graphs() {
        assert_eq!(complete_graph(5).nb_edges(), 10);
        assert_eq!(cycle_graph(5).nb_edges(), 5);
        assert_eq!(max_anticlique_graph(9).nb_edges(), 9);
        assert_eq!(max_anticlique_graph(10).nb_edges(), 6 + 6);
        assert_eq!(max_anticlique_graph(8).nb_edges(), 1 + 6);
        assert_eq!(max_anticlique_graph(1).nb_edges(), 0);
        assert_eq!(max_anticlique_graph(2).nb_edges(), 1);
    }
}
