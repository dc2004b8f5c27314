//! Dashboard aggregation: labor cost grouped by date and plot.

use crate::cost::labor_cost;
use crate::domain::{JournalEntry, Plot};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Total labor cost for one plot on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostSummary {
    pub date: NaiveDate,
    pub plot: Plot,
    pub total_cost: i64,
}

/// Groups entries by `(date, plot)` and sums their labor cost.
///
/// Output is sorted by date ascending then plot ascending so renderings and
/// tests are deterministic; input order never matters. Status reports carry
/// zero labor and show up as zero-cost groups. Empty input is an empty
/// summary, not an error.
pub fn summarize(entries: &[JournalEntry]) -> Vec<CostSummary> {
    let mut groups: BTreeMap<(NaiveDate, Plot), i64> = BTreeMap::new();
    for entry in entries {
        *groups
            .entry((entry.date(), entry.plot().clone()))
            .or_insert(0) += labor_cost(entry.labor_count());
    }
    groups
        .into_iter()
        .map(|((date, plot), total_cost)| CostSummary {
            date,
            plot,
            total_cost,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PlantStatus, StatusReport, WorkRecord};
    use std::collections::BTreeSet;

    fn work(date: &str, plot: &str, labor_count: u32) -> JournalEntry {
        JournalEntry::Work(WorkRecord {
            date: date.parse().unwrap(),
            plot: Plot::new(plot),
            tasks: BTreeSet::new(),
            labor_count,
            note: String::new(),
        })
    }

    #[test]
    fn empty_journal_yields_empty_summary() {
        assert_eq!(summarize(&[]), Vec::new());
    }

    #[test]
    fn same_day_same_plot_costs_are_summed() {
        let entries = vec![work("2024-03-05", "coffee", 2), work("2024-03-05", "coffee", 3)];
        let summary = summarize(&entries);
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].total_cost, 1_000_000);
    }

    #[test]
    fn output_is_sorted_by_date_then_plot() {
        let entries = vec![
            work("2024-03-06", "mango", 1),
            work("2024-03-05", "mango", 1),
            work("2024-03-05", "coffee", 1),
        ];
        let summary = summarize(&entries);
        let keys: Vec<(NaiveDate, String)> = summary
            .iter()
            .map(|s| (s.date, s.plot.name().to_owned()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("2024-03-05".parse().unwrap(), "coffee".to_owned()),
                ("2024-03-05".parse().unwrap(), "mango".to_owned()),
                ("2024-03-06".parse().unwrap(), "mango".to_owned()),
            ]
        );
    }

    #[test]
    fn input_permutation_does_not_change_the_summary() {
        let a = vec![
            work("2024-03-05", "coffee", 2),
            work("2024-03-06", "durian", 4),
            work("2024-03-05", "coffee", 3),
        ];
        let mut b = a.clone();
        b.reverse();
        assert_eq!(summarize(&a), summarize(&b));
    }

    #[test]
    fn status_reports_appear_as_zero_cost_groups() {
        let entries = vec![JournalEntry::Status(StatusReport {
            date: "2024-03-05".parse().unwrap(),
            plot: Plot::new("mango"),
            status: PlantStatus::Good,
            note: String::new(),
        })];
        let summary = summarize(&entries);
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].total_cost, 0);
    }
}
