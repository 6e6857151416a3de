use std::hash::Hash;

use indexmap::IndexMap;

use crate::render::NodeId;

/// Partition of bound shapes against a new dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataJoin {
    /// Shapes kept, with the index of the record they are now bound to.
    pub update: Vec<(usize, NodeId)>,
    /// Record indexes without a shape.
    pub enter: Vec<usize>,
    /// Shapes whose record is gone.
    pub exit: Vec<NodeId>,
}

impl DataJoin {
    /// Joins `bound` shapes to `keys` by key equality.
    ///
    /// A key repeated in `keys` only matches one shape; later repeats enter.
    /// Exits keep the order of `bound`.
    #[must_use]
    pub fn bind<K: Eq + Hash>(
        bound: impl IntoIterator<Item = (K, NodeId)>,
        keys: impl IntoIterator<Item = K>,
    ) -> Self {
        let mut remaining: IndexMap<K, NodeId> = IndexMap::new();
        let mut exit = Vec::new();
        for (key, node) in bound {
            if let Some(duplicate) = remaining.insert(key, node) {
                exit.push(duplicate);
            }
        }

        let mut join = Self::default();
        for (index, key) in keys.into_iter().enumerate() {
            match remaining.shift_remove(&key) {
                Some(node) => join.update.push((index, node)),
                None => join.enter.push(index),
            }
        }
        exit.extend(remaining.into_values());
        join.exit = exit;
        join
    }

    /// Joins by position: shape `i` is bound to record `i`.
    #[must_use]
    pub fn by_index(bound: &[NodeId], len: usize) -> Self {
        Self::bind(bound.iter().copied().enumerate(), 0..len)
    }

    /// Number of shapes bound once the join is applied.
    #[must_use]
    pub fn bound_len(&self) -> usize {
        self.update.len() + self.enter.len()
    }
}

#[cfg(test)]
mod tests {
    use super::DataJoin;
    use crate::render::NodeId;

    fn nodes(ids: &[u64]) -> Vec<NodeId> {
        ids.iter().copied().map(NodeId).collect()
    }

    #[test]
    fn index_join_splits_growth_into_enter() {
        let join = DataJoin::by_index(&nodes(&[1, 2]), 4);
        assert_eq!(join.update, vec![(0, NodeId(1)), (1, NodeId(2))]);
        assert_eq!(join.enter, vec![2, 3]);
        assert!(join.exit.is_empty());
        assert_eq!(join.bound_len(), 4);
    }

    #[test]
    fn index_join_splits_shrink_into_exit() {
        let join = DataJoin::by_index(&nodes(&[1, 2, 3]), 1);
        assert_eq!(join.update, vec![(0, NodeId(1))]);
        assert!(join.enter.is_empty());
        assert_eq!(join.exit, nodes(&[2, 3]));
    }

    #[test]
    fn key_join_matches_moved_records() {
        let bound = vec![("A", NodeId(1)), ("B", NodeId(2)), ("C", NodeId(3))];
        let join = DataJoin::bind(bound, ["C", "A", "D"]);
        assert_eq!(join.update, vec![(0, NodeId(3)), (1, NodeId(1))]);
        assert_eq!(join.enter, vec![2]);
        assert_eq!(join.exit, vec![NodeId(2)]);
    }
}
