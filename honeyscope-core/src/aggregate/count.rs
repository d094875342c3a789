use ahash::RandomState;
use std::collections::HashMap;
use std::hash::Hash;

/// Count occurrences of each key.
///
/// Rows come back in descending count order. Equal counts keep first-seen
/// order, so the result is deterministic for a given input order.
pub(crate) fn count_by<K, I>(keys: I) -> Vec<(K, u64)>
where
    K: Hash + Eq + Clone,
    I: IntoIterator<Item = K>,
{
    let mut index: HashMap<K, usize, RandomState> = HashMap::default();
    let mut rows: Vec<(K, u64)> = Vec::new();

    for key in keys {
        match index.get(&key) {
            Some(&i) => rows[i].1 += 1,
            None => {
                index.insert(key.clone(), rows.len());
                rows.push((key, 1));
            }
        }
    }

    // Stable sort: ties stay in first-seen order.
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows
}
