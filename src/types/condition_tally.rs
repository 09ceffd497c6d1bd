//! Frequency count of forecast condition categories.

use serde::Serialize;

/// Occurrences of each condition category, in first-seen order.
///
/// Categories are never duplicated. The order only decides which slice and
/// colour comes first in the donut chart.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ConditionTally {
    entries: Vec<(String, usize)>,
}

impl ConditionTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one more occurrence of `category`.
    pub fn record(&mut self, category: &str) {
        match self.entries.iter_mut().find(|(name, _)| name == category) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((category.to_string(), 1)),
        }
    }

    pub fn get(&self, category: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Number of distinct categories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for ConditionTally {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut tally = ConditionTally::new();
        for category in iter {
            tally.record(category);
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::ConditionTally;

    #[test]
    fn test_tally_keeps_first_seen_order() {
        let tally: ConditionTally = ["Rain", "Clouds", "Rain", "Clear", "Clouds", "Rain"]
            .into_iter()
            .collect();

        let entries: Vec<(&str, usize)> = tally.iter().collect();
        assert_eq!(entries, vec![("Rain", 3), ("Clouds", 2), ("Clear", 1)]);
        assert_eq!(tally.total(), 6);
        assert_eq!(tally.len(), 3);
        assert_eq!(tally.get("Snow"), None);
    }

    #[test]
    fn test_empty_tally() {
        let tally = ConditionTally::new();
        assert!(tally.is_empty());
        assert_eq!(tally.total(), 0);
    }
}
