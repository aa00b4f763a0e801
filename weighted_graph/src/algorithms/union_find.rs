//! Disjoint-set union with path compression and union by size.

use serde::Serialize;

use crate::Vertex;

/// Disjoint-set forest over the vertices `0..n`.
///
/// `parent[r] == r` iff `r` is a representative. `size` is only meaningful
/// at representatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisjointSet {
    parent: Vec<Vertex>,
    size: Vec<usize>,
    sets: usize,
}

impl DisjointSet {
    /// `n` singleton sets.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            sets: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    pub const fn set_count(&self) -> usize {
        self.sets
    }

    /// Representative of `u`'s set. Every node on the way is re-pointed at
    /// the representative.
    ///
    /// # Panics
    ///
    /// Panics if `u >= len()`.
    pub fn find(&mut self, u: Vertex) -> Vertex {
        let mut root = u;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = u;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merge the sets represented by `r1` and `r2`, returning the new
    /// representative. The smaller tree goes under the larger; on a tie `r1`
    /// goes under `r2`.
    ///
    /// Both arguments must be distinct representatives, i.e. values just
    /// returned by [`find`](Self::find). Passing anything else corrupts the
    /// set sizes; this is checked only in debug builds.
    ///
    /// # Panics
    ///
    /// Panics if either argument is `>= len()`.
    pub fn union(&mut self, r1: Vertex, r2: Vertex) -> Vertex {
        debug_assert_eq!(self.parent[r1], r1, "union on non-representative {r1}");
        debug_assert_eq!(self.parent[r2], r2, "union on non-representative {r2}");
        debug_assert_ne!(r1, r2, "union of a set with itself");

        let (root, child) = if self.size[r1] > self.size[r2] {
            (r1, r2)
        } else {
            (r2, r1)
        };
        self.parent[child] = root;
        self.size[root] += self.size[child];
        self.sets -= 1;
        root
    }

    /// Whether `a` and `b` are in the same set.
    pub fn connected(&mut self, a: Vertex, b: Vertex) -> bool {
        self.find(a) == self.find(b)
    }

    /// Number of elements in `u`'s set.
    pub fn size_of(&mut self, u: Vertex) -> usize {
        let root = self.find(u);
        self.size[root]
    }
}
