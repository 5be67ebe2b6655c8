//! Greedy best-candidate selection.

use std::cmp::Ordering;

/// Return the item with the maximum key, or `None` for an empty input.
///
/// Single linear pass, no materialized sort. Among equal keys the FIRST
/// item wins — unlike [`Iterator::max_by_key`], which keeps the last —
/// so greedy selection stays stable under input order.
pub fn max_by_key<I, T, K, F>(items: I, key: F) -> Option<T>
where
    I: IntoIterator<Item = T>,
    K: Ord,
    F: FnMut(&T) -> K,
{
    max_by_key_with(items, key, Ord::cmp)
}

/// Like [`max_by_key`], with a caller-supplied ordering on the key type.
pub fn max_by_key_with<I, T, K, F, C>(items: I, mut key: F, mut compare: C) -> Option<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> K,
    C: FnMut(&K, &K) -> Ordering,
{
    let mut iter = items.into_iter();
    let mut best = iter.next()?;
    let mut best_key = key(&best);

    for item in iter {
        let item_key = key(&item);
        if compare(&item_key, &best_key) == Ordering::Greater {
            best = item;
            best_key = item_key;
        }
    }

    Some(best)
}
