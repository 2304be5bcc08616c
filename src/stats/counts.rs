//! Frequency counts and grouped aggregates.
//!
//! Ties are always resolved the same way: among equal counts, the value
//! seen first (in row order) comes first. `mode` is the first entry of
//! `value_counts`, so both agree everywhere.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// `(value, occurrences)` sorted by occurrences, descending.
pub fn value_counts<K, I>(values: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for value in values {
        match index.get(&value) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }
    }

    // stable: first-seen order survives among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Most frequent value, `None` for an empty input.
pub fn mode<K, I>(values: I) -> Option<K>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    value_counts(values).into_iter().next().map(|(k, _)| k)
}

/// `(value, occurrences)` sorted by value, ascending.
pub fn sorted_counts<K, I>(values: I) -> Vec<(K, usize)>
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    let mut counts: BTreeMap<K, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts.into_iter().collect()
}

/// Value counts inside each group; groups sorted ascending.
pub fn grouped_value_counts<G, K, I>(pairs: I) -> Vec<(G, Vec<(K, usize)>)>
where
    G: Ord,
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = (G, K)>,
{
    let mut groups: BTreeMap<G, Vec<K>> = BTreeMap::new();
    for (group, value) in pairs {
        groups.entry(group).or_default().push(value);
    }

    groups
        .into_iter()
        .map(|(g, values)| (g, value_counts(values)))
        .collect()
}

/// Arithmetic mean inside each group; groups sorted ascending.
pub fn grouped_mean<G, I>(pairs: I) -> Vec<(G, f64)>
where
    G: Ord,
    I: IntoIterator<Item = (G, f64)>,
{
    let mut groups: BTreeMap<G, (f64, usize)> = BTreeMap::new();
    for (group, value) in pairs {
        let acc = groups.entry(group).or_insert((0.0, 0));
        acc.0 += value;
        acc.1 += 1;
    }

    groups
        .into_iter()
        .map(|(g, (sum, n))| (g, sum / n as f64))
        .collect()
}
