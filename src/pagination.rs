/// Tracks which batch the user has asked for.
///
/// The index only moves forward, one step per "load more", and stops at the
/// last allowed batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current: usize,
    max_batches: usize,
}

impl Pagination {
    pub fn new(max_batches: usize) -> Self {
        Self {
            current: 0,
            max_batches,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn max_batches(&self) -> usize {
        self.max_batches
    }

    /// Highest batch count the index may reach, given how many batches
    /// actually exist once the id list has been published.
    fn ceiling(&self, available: Option<usize>) -> usize {
        available.map_or(self.max_batches, |n| n.min(self.max_batches))
    }

    /// Whether another "load more" would move the index.
    pub fn can_advance(&self, available: Option<usize>) -> bool {
        self.current + 1 < self.ceiling(available)
    }

    /// Advances the index by one. Returns false, leaving the index alone,
    /// when it already sits on the last allowed batch.
    pub fn load_more(&mut self, available: Option<usize>) -> bool {
        if !self.can_advance(available) {
            return false;
        }
        self.current += 1;
        true
    }

    /// Pulls the index back inside the published batch range. Only matters
    /// when "load more" was pressed before the id list arrived and the list
    /// turned out shorter than the configured maximum.
    pub fn settle(&mut self, available: usize) {
        let last = self.ceiling(Some(available)).saturating_sub(1);
        self.current = self.current.min(last);
    }
}
