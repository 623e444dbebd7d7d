//! 3-colorability of simple graphs through the enumeration of maximal anticliques.
//!
//! A graph is 3-colorable iff one of its maximal anticliques (maximal independent sets) leaves
//! a bipartite graph once removed. The maximal anticliques are listed without duplicates and in
//! increasing order by a reverse search over bit vectors.

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// vertex subsets and their total order
pub mod vertex_set;

/// immutable graph (bit vector adjacency matrix)
pub mod graph;

/// lexicographically least maximal anticliques
pub mod greedy;

/// enumeration of all maximal anticliques (reverse search)
pub mod enumeration;

/// two-coloring of the graph induced by the non-excluded vertices
pub mod bipartite;

/// 3-coloring test, witnesses and solution checker
pub mod coloring;

/// graph generators (random graphs, extremal instances)
pub mod generators;

/// read DIMACS formats
pub mod dimacs;

/// helper and utility methods for executables
pub mod util;

pub use crate::coloring::{ColoringVerdict, Solution};
pub use crate::enumeration::{Enumeration, EnumerationConfig};
pub use crate::graph::{Graph, GraphError};
pub use crate::vertex_set::{VertexId, VertexSet};
