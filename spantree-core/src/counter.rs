//! Operation tallies reported alongside each MST result.

/// Counts the elementary operations an MST algorithm performed.
///
/// Kruskal contributes sort comparisons, finds and unions; Prim contributes
/// heap pushes, pops and comparisons. [`OperationCounter::total`] is the
/// single figure reported for complexity comparisons.
///
/// # Examples
/// ```
/// use spantree_core::OperationCounter;
///
/// let counter = OperationCounter::new();
/// assert_eq!(counter.total(), 0);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct OperationCounter {
    comparisons: u64,
    pushes: u64,
    pops: u64,
    finds: u64,
    unions: u64,
}

impl OperationCounter {
    /// Creates a counter with every tally at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            comparisons: 0,
            pushes: 0,
            pops: 0,
            finds: 0,
            unions: 0,
        }
    }

    pub(crate) const fn record_comparison(&mut self) {
        self.comparisons = self.comparisons.saturating_add(1);
    }

    pub(crate) const fn record_push(&mut self) {
        self.pushes = self.pushes.saturating_add(1);
    }

    pub(crate) const fn record_pop(&mut self) {
        self.pops = self.pops.saturating_add(1);
    }

    pub(crate) const fn record_finds(&mut self, finds: u64) {
        self.finds = self.finds.saturating_add(finds);
    }

    pub(crate) const fn record_unions(&mut self, unions: u64) {
        self.unions = self.unions.saturating_add(unions);
    }

    /// Weight comparisons (sort comparator calls, stale-entry checks and
    /// neighbour scans).
    #[must_use]
    #[rustfmt::skip]
    pub const fn comparisons(&self) -> u64 { self.comparisons }

    /// Priority-queue insertions.
    #[must_use]
    #[rustfmt::skip]
    pub const fn pushes(&self) -> u64 { self.pushes }

    /// Priority-queue removals.
    #[must_use]
    #[rustfmt::skip]
    pub const fn pops(&self) -> u64 { self.pops }

    /// Disjoint-set root lookups.
    #[must_use]
    #[rustfmt::skip]
    pub const fn finds(&self) -> u64 { self.finds }

    /// Disjoint-set union calls, successful or not.
    #[must_use]
    #[rustfmt::skip]
    pub const fn unions(&self) -> u64 { self.unions }

    /// Sum of all tallies.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.comparisons
            .saturating_add(self.pushes)
            .saturating_add(self.pops)
            .saturating_add(self.finds)
            .saturating_add(self.unions)
    }
}
