//! Sequence helpers
//!
//! Free functions over iterables: eager filter/map, order-preserving
//! dedup, grouping, and fallible variants that short-circuit on the first
//! error.

use std::collections::HashMap;
use std::hash::Hash;

use itertools::Itertools;

use crate::error::Result;

/// Keep the items matching a predicate.
pub fn filter<T>(items: Vec<T>, pred: impl Fn(&T) -> bool) -> Vec<T> {
    items.into_iter().filter(|item| pred(item)).collect()
}

/// Map every item through `f`, eagerly.
pub fn map_to<T, U>(items: Vec<T>, f: impl Fn(T) -> U) -> Vec<U> {
    items.into_iter().map(f).collect()
}

/// Drop duplicate items, keeping first occurrences in order.
#[must_use]
pub fn distinct<T>(items: Vec<T>) -> Vec<T>
where
    T: Hash + Eq + Clone,
{
    items.into_iter().unique().collect()
}

/// The first item matching a predicate, if any.
pub fn first_match<T>(items: &[T], pred: impl Fn(&T) -> bool) -> Option<&T> {
    items.iter().find(|item| pred(item))
}

/// Group items by a key function.
pub fn group_by_key<T, K, F>(items: Vec<T>, key_fn: F) -> HashMap<K, Vec<T>>
where
    K: Hash + Eq,
    F: Fn(&T) -> K,
{
    items
        .into_iter()
        .map(|item| (key_fn(&item), item))
        .into_group_map()
}

/// Map every item through a fallible `f`, stopping at the first error.
///
/// # Errors
///
/// Returns the first error produced by `f`.
pub fn map_result<T, U>(
    items: impl IntoIterator<Item = T>,
    f: impl Fn(T) -> Result<U>,
) -> Result<Vec<U>> {
    items.into_iter().map(f).collect()
}

/// Keep the items a fallible predicate accepts, stopping at the first error.
///
/// # Errors
///
/// Returns the first error produced by `pred`.
pub fn filter_result<T>(
    items: impl IntoIterator<Item = T>,
    pred: impl Fn(&T) -> Result<bool>,
) -> Result<Vec<T>> {
    let mut kept = Vec::new();
    for item in items {
        if pred(&item)? {
            kept.push(item);
        }
    }
    Ok(kept)
}
