//! Small collection helpers: dedup, sorting, mode, reversal.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Removes repeated elements, keeping the first occurrence of each and
/// preserving the original order.
pub fn remove_duplicates<T>(items: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| seen.insert((*item).clone()))
        .cloned()
        .collect()
}

/// Sorts a slice in descending order with pairwise adjacent swaps. O(n²),
/// in place.
pub fn bubble_sort_desc<T: Ord>(items: &mut [T]) {
    for i in 0..items.len() {
        for j in 1..items.len() - i {
            if items[j - 1] < items[j] {
                items.swap(j - 1, j);
            }
        }
    }
}

/// Returns the most frequent string in the slice. Ties go to the element
/// that reached the maximum count first; an empty slice yields `""`.
pub fn mode(items: &[String]) -> String {
    let Some(first) = items.first() else {
        return String::new();
    };
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut max_el = first.as_str();
    let mut max_count = 1;
    for item in items {
        let count = counts.entry(item.as_str()).or_insert(0);
        *count += 1;
        if *count > max_count {
            max_el = item;
            max_count = *count;
        }
    }
    max_el.to_string()
}

/// Reverses a slice in place by swapping ends inward.
pub fn reverse_in_place<T>(items: &mut [T]) {
    if items.is_empty() {
        return;
    }
    let mut i = 0;
    let mut j = items.len() - 1;
    while i < j {
        items.swap(i, j);
        i += 1;
        j -= 1;
    }
}
