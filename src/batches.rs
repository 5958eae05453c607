use crate::api::StoryId;

pub const BATCH_SIZE: usize = 20;
pub const DEFAULT_MAX_STORIES: usize = 500;

/// Number of batches needed to cover `max_stories` ids.
pub const fn max_batches(max_stories: usize) -> usize {
    max_stories.div_ceil(BATCH_SIZE)
}

/// The ranked story ids, split into fixed-size batches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchList {
    batches: Vec<Vec<StoryId>>,
}

impl BatchList {
    /// Keeps the first `max_stories` ids and chunks them into batches of
    /// [`BATCH_SIZE`]. Only the last batch may be short.
    pub fn partition(ids: &[StoryId], max_stories: usize) -> Self {
        let considered = &ids[..ids.len().min(max_stories)];
        Self {
            batches: considered
                .chunks(BATCH_SIZE)
                .map(<[StoryId]>::to_vec)
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&[StoryId]> {
        self.batches.get(index).map(Vec::as_slice)
    }

    pub fn total_ids(&self) -> usize {
        self.batches.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: u64) -> Vec<StoryId> {
        (1..=n).collect()
    }

    #[test]
    fn test_default_max_is_25_batches() {
        assert_eq!(max_batches(DEFAULT_MAX_STORIES), 25);
        let list = BatchList::partition(&ids(600), DEFAULT_MAX_STORIES);
        assert_eq!(list.len(), 25);
        assert_eq!(list.total_ids(), 500);
        assert_eq!(list.get(24).map(<[StoryId]>::len), Some(20));
    }

    #[test]
    fn test_batch_count_is_ceiling_of_max() {
        for max in [1, 19, 20, 21, 39, 40, 41, 99, 100, 487, 500] {
            let list = BatchList::partition(&ids(1000), max);
            assert_eq!(list.len(), max.div_ceil(BATCH_SIZE), "max = {max}");
            assert_eq!(list.len(), max_batches(max));

            let expected_last = match max % BATCH_SIZE {
                0 => BATCH_SIZE,
                rem => rem,
            };
            let last = list.get(list.len() - 1).unwrap();
            assert_eq!(last.len(), expected_last, "max = {max}");
        }
    }

    #[test]
    fn test_batches_keep_ranking_order() {
        let list = BatchList::partition(&ids(45), DEFAULT_MAX_STORIES);
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(0).unwrap(), &ids(20)[..]);
        assert_eq!(list.get(1).unwrap()[0], 21);
        assert_eq!(list.get(2).unwrap(), &[41, 42, 43, 44, 45]);
    }

    #[test]
    fn test_short_remote_list_has_no_empty_batches() {
        let list = BatchList::partition(&ids(30), DEFAULT_MAX_STORIES);
        assert_eq!(list.len(), 2);
        assert!(list.get(2).is_none());
    }

    #[test]
    fn test_empty_id_list() {
        let list = BatchList::partition(&[], DEFAULT_MAX_STORIES);
        assert!(list.is_empty());
        assert_eq!(list.total_ids(), 0);
    }
}
