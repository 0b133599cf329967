// File: crates/dash-core/src/aggregate.rs
// Summary: Per-category maximum reduction (skills), iterated in first-seen key order.

use std::collections::HashMap;

use crate::record::SkillRecord;

/// Category -> largest amount observed. Keys iterate in the order they were first
/// offered; callers that want another order sort the output of [`CategoryAggregate::iter`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryAggregate {
    entries: Vec<(String, f64)>,
    index: HashMap<String, usize>,
}

impl CategoryAggregate {
    pub fn new() -> Self { Self::default() }

    /// Record `amount` for `category`, keeping the existing value unless `amount` is
    /// strictly greater, so the first-seen maximum survives ties.
    pub fn offer(&mut self, category: &str, amount: f64) {
        match self.index.get(category) {
            Some(&i) => {
                if self.entries[i].1 < amount {
                    self.entries[i].1 = amount;
                }
            }
            None => {
                self.index.insert(category.to_string(), self.entries.len());
                self.entries.push((category.to_string(), amount));
            }
        }
    }

    pub fn get(&self, category: &str) -> Option<f64> {
        self.index.get(category).map(|&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Entries sorted by descending value; equal values keep first-seen order.
    pub fn sorted_by_value(&self) -> Vec<(&str, f64)> {
        let mut out: Vec<_> = self.iter().collect();
        out.sort_by(|a, b| b.1.total_cmp(&a.1));
        out
    }
}

impl FromIterator<(String, f64)> for CategoryAggregate {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut agg = Self::new();
        for (k, v) in iter {
            agg.offer(&k, v);
        }
        agg
    }
}

/// Reduce `records` to one maximum amount per category in a single pass.
pub fn max_per_category<'a>(records: impl IntoIterator<Item = &'a SkillRecord>) -> CategoryAggregate {
    let mut agg = CategoryAggregate::new();
    for r in records {
        agg.offer(&r.category, r.amount);
    }
    agg
}
