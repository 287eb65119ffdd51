//! # Ranked Presenter
//!
//! Orders recommendations for display. Two views are derived from the same
//! ranking: the full table (crop + percentage) and the podium (top three
//! with rank labels, no score).

use std::cmp::Ordering;

use crate::recommend::Recommendation;

/// Labels for the podium view. Entries past the third are not shown there.
pub const RANK_LABELS: [&str; 3] = ["1st", "2nd", "3rd"];

/// Shown when there is nothing to rank.
pub const EMPTY_MESSAGE: &str =
    "No recommendations available. Please submit the form to get results.";

/// Display-ready ordering of a recommendation list.
#[derive(Debug, Clone, PartialEq)]
pub enum Ranking {
    /// No recommendations yet (or the backend returned none). Not an error.
    Empty,
    /// Sorted by probability, highest first.
    Ranked(Vec<Recommendation>),
}

/// One podium row.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry<'a> {
    pub label: &'static str,
    pub crop: &'a str,
}

impl Ranking {
    pub fn is_empty(&self) -> bool {
        matches!(self, Ranking::Empty)
    }

    /// The full sorted list (empty slice for `Ranking::Empty`).
    pub fn entries(&self) -> &[Recommendation] {
        match self {
            Ranking::Empty => &[],
            Ranking::Ranked(entries) => entries,
        }
    }

    /// At most three entries, labeled 1st/2nd/3rd.
    pub fn top_three(&self) -> Vec<RankedEntry<'_>> {
        self.entries()
            .iter()
            .zip(RANK_LABELS)
            .map(|(entry, label)| RankedEntry {
                label,
                crop: &entry.crop,
            })
            .collect()
    }
}

/// NaN sorts below every real probability.
fn sort_key(probability: f64) -> f64 {
    if probability.is_nan() {
        f64::NEG_INFINITY
    } else {
        probability
    }
}

fn by_probability_desc(a: &Recommendation, b: &Recommendation) -> Ordering {
    sort_key(b.probability).total_cmp(&sort_key(a.probability))
}

/// Ranks recommendations by probability, descending. `sort_by` is stable,
/// so ties keep the order the backend sent them in.
pub fn rank(entries: &[Recommendation]) -> Ranking {
    if entries.is_empty() {
        return Ranking::Empty;
    }
    let mut sorted = entries.to_vec();
    sorted.sort_by(by_probability_desc);
    Ranking::Ranked(sorted)
}

/// Formats a probability as a percentage with two decimals (`0.7` → `70.00%`).
pub fn format_probability(probability: f64) -> String {
    format!("{:.2}%", probability * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crops(ranking: &Ranking) -> Vec<&str> {
        ranking.entries().iter().map(|e| e.crop.as_str()).collect()
    }

    #[test]
    fn test_sorts_descending() {
        let input = vec![Recommendation::new("Rice", 0.3), Recommendation::new("Wheat", 0.7)];
        let ranking = rank(&input);
        assert_eq!(
            ranking,
            Ranking::Ranked(vec![
                Recommendation::new("Wheat", 0.7),
                Recommendation::new("Rice", 0.3),
            ])
        );
    }

    #[test]
    fn test_empty_input_is_sentinel() {
        let ranking = rank(&[]);
        assert_eq!(ranking, Ranking::Empty);
        assert!(ranking.is_empty());
        assert!(ranking.top_three().is_empty());
    }

    #[test]
    fn test_ties_keep_input_order() {
        let input = vec![
            Recommendation::new("Maize", 0.2),
            Recommendation::new("Rice", 0.5),
            Recommendation::new("Jowar", 0.2),
            Recommendation::new("Bajra", 0.5),
        ];
        assert_eq!(crops(&rank(&input)), vec!["Rice", "Bajra", "Maize", "Jowar"]);
    }

    #[test]
    fn test_top_three_of_five() {
        let input = vec![
            Recommendation::new("Cotton", 0.05),
            Recommendation::new("Rice", 0.40),
            Recommendation::new("Sugarcane", 0.10),
            Recommendation::new("Wheat", 0.30),
            Recommendation::new("Maize", 0.15),
        ];
        let ranking = rank(&input);
        let podium = ranking.top_three();
        assert_eq!(podium.len(), 3);
        assert_eq!(
            podium,
            vec![
                RankedEntry { label: "1st", crop: "Rice" },
                RankedEntry { label: "2nd", crop: "Wheat" },
                RankedEntry { label: "3rd", crop: "Maize" },
            ]
        );
    }

    #[test]
    fn test_top_three_with_fewer_entries() {
        let ranking = rank(&[Recommendation::new("Rice", 0.9)]);
        let podium = ranking.top_three();
        assert_eq!(podium, vec![RankedEntry { label: "1st", crop: "Rice" }]);
    }

    #[test]
    fn test_nan_sorts_last() {
        let input = vec![
            Recommendation::new("Unknown", f64::NAN),
            Recommendation::new("Rice", 0.1),
        ];
        assert_eq!(crops(&rank(&input)), vec!["Rice", "Unknown"]);
    }

    #[test]
    fn test_format_probability() {
        assert_eq!(format_probability(0.7), "70.00%");
        assert_eq!(format_probability(0.12346), "12.35%");
        assert_eq!(format_probability(1.0), "100.00%");
        assert_eq!(format_probability(0.0), "0.00%");
    }
}
