//! Union-find (disjoint set union) over dense vertex ids.
//!
//! Kruskal uses it to reject cycle-forming edges, and tests replay MST output
//! through a fresh instance to prove acyclicity. Path compression plus union
//! by rank keeps every operation amortised near-constant regardless of the
//! order unions arrive in.

use std::cmp::Ordering;

/// Disjoint sets over `0..len` with diagnostic operation counters.
///
/// # Examples
/// ```
/// use spantree_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(3);
/// assert!(sets.union(0, 1));
/// assert!(!sets.union(1, 0));
/// assert_eq!(sets.find(1), sets.find(0));
/// assert_eq!(sets.component_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u32>,
    components: usize,
    finds: u64,
    unions: u64,
}

impl DisjointSet {
    /// Creates `len` singleton sets.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            components: len,
            finds: 0,
            unions: 0,
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when the structure has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.components }

    /// Returns how many times [`DisjointSet::find`] has been called,
    /// including the lookups made by [`DisjointSet::union`].
    #[must_use]
    #[rustfmt::skip]
    pub const fn finds(&self) -> u64 { self.finds }

    /// Returns how many times [`DisjointSet::union`] has been called.
    #[must_use]
    #[rustfmt::skip]
    pub const fn unions(&self) -> u64 { self.unions }

    /// Returns the canonical root of `node`'s set, compressing the path.
    ///
    /// One call counts as one find however long the path is.
    ///
    /// # Panics
    /// Panics if `node >= self.len()`.
    pub fn find(&mut self, node: usize) -> usize {
        self.finds = self.finds.saturating_add(1);

        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = node;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `false` without changing anything when both are already in
    /// the same set. The lower-rank root is attached under the higher-rank
    /// root; on equal ranks `right`'s root goes under `left`'s root.
    ///
    /// # Panics
    /// Panics if either argument is `>= self.len()`.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        self.unions = self.unions.saturating_add(1);

        let left_root = self.find(left);
        let right_root = self.find(right);
        if left_root == right_root {
            return false;
        }

        match self.rank[left_root].cmp(&self.rank[right_root]) {
            Ordering::Less => self.parent[left_root] = right_root,
            Ordering::Greater => self.parent[right_root] = left_root,
            Ordering::Equal => {
                self.parent[right_root] = left_root;
                self.rank[left_root] = self.rank[left_root].saturating_add(1);
            }
        }
        self.components -= 1;
        true
    }

    /// Returns `true` when `left` and `right` share a set.
    ///
    /// # Panics
    /// Panics if either argument is `>= self.len()`.
    pub fn connected(&mut self, left: usize, right: usize) -> bool {
        self.find(left) == self.find(right)
    }
}
