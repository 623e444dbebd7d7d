use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use bit_set::BitSet;
use serde::{Serialize, Serializer};

/** Vertex Id */
pub type VertexId = usize;

/** subset of the vertices `0..n` of a graph, stored as a bit vector.

Subsets are totally ordered: the lowest index on which two subsets differ decides, and the
subset that contains this index is the smaller one. With this order, the "lexicographically
least" maximal anticlique is the one that takes low indices first.
*/
#[derive(Clone, Default)]
pub struct VertexSet {
    /// number of vertices of the underlying graph (also the sentinel returned by `min_vertex`)
    n: usize,
    /// members of the subset
    bits: BitSet,
}

impl VertexSet {
    /** builds a subset of `0..n` from its bit vector */
    pub fn new(n:usize, bits:BitSet) -> Self {
        debug_assert!(bits.iter().all(|v| v < n), "vertex set contains an index >= {}", n);
        Self { n, bits }
    }

    /// the empty subset of `0..n`
    pub fn empty(n:usize) -> Self { Self { n, bits: BitSet::with_capacity(n) } }

    /// the subset containing every vertex of `0..n`
    pub fn full(n:usize) -> Self { Self { n, bits: (0..n).collect() } }

    /// builds a subset from a list of vertices
    pub fn from_vertices<I:IntoIterator<Item=VertexId>>(n:usize, vertices:I) -> Self {
        Self::new(n, vertices.into_iter().collect())
    }

    /** builds a subset from a machine word: bit `i` of `mask` is vertex `i`.
    Only meaningful for `n <= 64`.
    */
    pub fn from_mask(n:usize, mask:u64) -> Self {
        debug_assert!(n <= 64, "from_mask only handles up to 64 vertices");
        Self::from_vertices(n, (0..n).filter(|i| mask >> i & 1 == 1))
    }

    /// read-only view of the underlying bit vector
    pub fn view(&self) -> &BitSet { &self.bits }

    /// takes the underlying bit vector
    pub fn into_bits(self) -> BitSet { self.bits }

    /// number of vertices of the graph this subset lives in
    pub fn nb_vertices(&self) -> usize { self.n }

    /// smallest vertex of the subset, or `n` if the subset is empty
    pub fn min_vertex(&self) -> VertexId {
        self.bits.iter().next().unwrap_or(self.n)
    }

    /// true iff `v` belongs to the subset
    pub fn contains(&self, v:VertexId) -> bool { self.bits.contains(v) }

    /// number of vertices in the subset
    pub fn len(&self) -> usize { self.bits.len() }

    /// true iff the subset has no vertex
    pub fn is_empty(&self) -> bool { self.bits.is_empty() }

    /// iterates over the vertices of the subset in increasing order
    pub fn iter(&self) -> impl Iterator<Item=VertexId> + '_ { self.bits.iter() }

    /// vertices of `0..n` that are not in the subset
    pub fn complement(&self) -> Self {
        let mut res = Self::full(self.n);
        res.bits.difference_with(&self.bits);
        res
    }
}

impl Ord for VertexSet {
    fn cmp(&self, other: &Self) -> Ordering {
        // the first differing index decides, having it present ranks first
        match self.bits.symmetric_difference(&other.bits).next() {
            None => Ordering::Equal,
            Some(i) if self.bits.contains(i) => Ordering::Less,
            Some(_) => Ordering::Greater,
        }
    }
}

// `PartialOrd` needs to be implemented as well.
impl PartialOrd for VertexSet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for VertexSet {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for VertexSet {}

impl Hash for VertexSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for v in self.bits.iter() { v.hash(state); }
    }
}

impl fmt::Debug for VertexSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.bits.iter()).finish()
    }
}

impl fmt::Display for VertexSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vertices:Vec<String> = self.iter().map(|v| v.to_string()).collect();
        write!(f, "{{{}}}", vertices.join(", "))
    }
}

impl Serialize for VertexSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.bits.iter())
    }
}
