use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedReturn {
    pub name: String,
    pub symbol: String,
    pub value: f64,
}

/// Returns sorted descending by value. Equal values are ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankedReturns {
    entries: Vec<RankedReturn>,
}

impl RankedReturns {
    pub fn rank(entries: impl IntoIterator<Item = RankedReturn>) -> Self {
        let mut entries: Vec<RankedReturn> = entries
            .into_iter()
            .filter(|e| e.value.is_finite())
            .collect();

        entries.sort_by(|a, b| {
            b.value
                .partial_cmp(&a.value)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.name.cmp(&b.name))
        });

        Self { entries }
    }

    pub fn best(&self) -> Option<&RankedReturn> {
        self.entries.first()
    }

    pub fn entries(&self) -> &[RankedReturn] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, value: f64) -> RankedReturn {
        RankedReturn {
            name: name.to_string(),
            symbol: format!("{name}-USD"),
            value,
        }
    }

    #[test]
    fn sorts_descending() {
        let ranked = RankedReturns::rank(vec![
            entry("ETH", -0.01),
            entry("BTC", 0.03),
            entry("ADA", 0.0),
            entry("SOL", 0.015),
        ]);

        for w in ranked.entries().windows(2) {
            assert!(w[0].value >= w[1].value);
        }
        assert_eq!(ranked.best().map(|b| b.name.as_str()), Some("BTC"));
    }

    #[test]
    fn breaks_ties_by_name() {
        let ranked = RankedReturns::rank(vec![entry("ETH", 0.0), entry("ADA", 0.0)]);
        let names: Vec<_> = ranked.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["ADA", "ETH"]);
    }

    #[test]
    fn empty_input_has_no_best() {
        let ranked = RankedReturns::rank(Vec::new());
        assert!(ranked.is_empty());
        assert!(ranked.best().is_none());
    }

    #[test]
    fn drops_non_finite_values() {
        let ranked = RankedReturns::rank(vec![entry("BTC", f64::NAN), entry("ETH", 0.01)]);
        assert_eq!(ranked.len(), 1);
    }
}
