//! Monthly category pivot for the summary screen.
//!
//! Takes the flat `(category, month, amount)` aggregates served by
//! `/pivot_data` and lays them out in the fixed display order: income,
//! then each of needs/wants/savings followed by its subtotal, with blank
//! separator rows in between.

use std::collections::{BTreeSet, HashMap};

use crate::categories::{normalize_label, Category, CategoryGroup, RowColor};
use crate::{format_amount, PivotRecord};

/// What a pivot row represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotRowKind {
    Category(Category),
    Subtotal(CategoryGroup),
    Separator,
}

impl PivotRowKind {
    pub fn group(&self) -> Option<CategoryGroup> {
        match self {
            PivotRowKind::Category(category) => category.group(),
            PivotRowKind::Subtotal(group) => Some(*group),
            PivotRowKind::Separator => None,
        }
    }
}

/// Zebra stripe assigned to a row, alternating within a run of one group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowStripe {
    pub color: RowColor,
    /// First, third, ... row of the run
    pub odd: bool,
}

impl RowStripe {
    pub fn css_class(&self) -> String {
        let parity = if self.odd { "odd" } else { "even" };
        format!("{}-{}", self.color.css_name(), parity)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PivotRow {
    pub kind: PivotRowKind,
    /// One amount per month, aligned with [`PivotTable::months`]
    pub amounts: Vec<f64>,
    pub all_time_total: f64,
    pub year_total: f64,
    pub stripe: Option<RowStripe>,
}

impl PivotRow {
    pub fn label(&self) -> String {
        match self.kind {
            PivotRowKind::Category(category) => category.as_str().to_string(),
            PivotRowKind::Subtotal(group) => group.subtotal_label(),
            PivotRowKind::Separator => String::new(),
        }
    }

    pub fn is_separator(&self) -> bool {
        self.kind == PivotRowKind::Separator
    }

    pub fn formatted_amounts(&self) -> Vec<String> {
        self.amounts.iter().copied().map(format_amount).collect()
    }

    pub fn formatted_all_time_total(&self) -> String {
        format_amount(self.all_time_total)
    }

    pub fn formatted_year_total(&self) -> String {
        format_amount(self.year_total)
    }

    pub fn css_class(&self) -> String {
        self.stripe.map(|stripe| stripe.css_class()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PivotTable {
    /// Distinct month labels, newest first
    pub months: Vec<String>,
    pub rows: Vec<PivotRow>,
    /// Calendar year used for the year-to-date column
    pub year: i32,
}

impl PivotTable {
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

/// The fixed row order of the summary table
pub fn layout() -> Vec<PivotRowKind> {
    let mut rows: Vec<PivotRowKind> = CategoryGroup::Income
        .members()
        .iter()
        .map(|category| PivotRowKind::Category(*category))
        .collect();

    for group in [CategoryGroup::Needs, CategoryGroup::Wants, CategoryGroup::Savings] {
        rows.push(PivotRowKind::Separator);
        rows.extend(group.members().iter().map(|category| PivotRowKind::Category(*category)));
        rows.push(PivotRowKind::Separator);
        rows.push(PivotRowKind::Subtotal(group));
    }

    rows
}

/// Distinct month labels in the aggregates, sorted newest first
pub fn distinct_months_desc(records: &[PivotRecord]) -> Vec<String> {
    records
        .iter()
        .map(|record| record.month.trim().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .rev()
        .collect()
}

/// Whether a `YYYY-MM` month label falls in `year`.
///
/// Labels that do not start with a `YYYY-` prefix belong to no year.
pub fn month_in_year(month: &str, year: i32) -> bool {
    match month.trim().split_once('-') {
        Some((prefix, _)) => prefix.len() == 4 && prefix.parse::<i32>().ok() == Some(year),
        None => false,
    }
}

/// Builds the summary pivot. `year` selects the year-to-date column.
pub fn build_pivot(records: &[PivotRecord], year: i32) -> PivotTable {
    let months = distinct_months_desc(records);

    let mut lookup: HashMap<(String, String), f64> = HashMap::new();
    for record in records {
        let key = (normalize_label(&record.category), record.month.trim().to_string());
        *lookup.entry(key).or_insert(0.0) += record.amount;
    }

    let category_amount = |category: Category, month: &str| -> f64 {
        lookup
            .get(&(category.as_str().to_string(), month.to_string()))
            .copied()
            .unwrap_or(0.0)
    };

    let mut rows = Vec::new();
    let mut run_group: Option<CategoryGroup> = None;
    let mut run_index = 0usize;

    for kind in layout() {
        let amounts: Vec<f64> = match kind {
            PivotRowKind::Category(category) => months
                .iter()
                .map(|month| category_amount(category, month))
                .collect(),
            PivotRowKind::Subtotal(group) => months
                .iter()
                .map(|month| {
                    group
                        .members()
                        .iter()
                        .map(|category| category_amount(*category, month))
                        .sum()
                })
                .collect(),
            PivotRowKind::Separator => Vec::new(),
        };

        let all_time_total = amounts.iter().sum();
        let year_total = months
            .iter()
            .zip(&amounts)
            .filter(|(month, _)| month_in_year(month, year))
            .map(|(_, amount)| amount)
            .sum();

        let group = kind.group();
        if group.is_none() || group != run_group {
            run_index = 0;
        }
        run_group = group;
        let stripe = group.map(|group| RowStripe {
            color: group.color(),
            odd: run_index % 2 == 0,
        });
        if group.is_some() {
            run_index += 1;
        }

        rows.push(PivotRow {
            kind,
            amounts,
            all_time_total,
            year_total,
            stripe,
        });
    }

    PivotTable { months, rows, year }
}
