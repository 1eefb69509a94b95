//! Cumulative year-over-year spend series for the trends screen.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::{CategorySpend, ReportingPeriod};

pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Line colour for years without an entry in [`YEAR_COLORS`]
pub const FALLBACK_YEAR_COLOR: &str = "#888888";

pub const YEAR_COLORS: [(i32, &str); 5] = [
    (2022, "#FF5733"),
    (2023, "#33FF57"),
    (2024, "#3357FF"),
    (2025, "#FF33A1"),
    (2026, "#FFC133"),
];

/// Cumulative spend for every observed year at one month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub month: &'static str,
    /// `None` for months of the current year that have not happened yet
    pub values: BTreeMap<i32, Option<f64>>,
}

impl TrendPoint {
    pub fn value(&self, year: i32) -> Option<f64> {
        self.values.get(&year).copied().flatten()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrendSeries {
    /// Observed years, ascending
    pub years: Vec<i32>,
    /// Twelve points, January first. Empty when no records were observed.
    pub points: Vec<TrendPoint>,
}

impl TrendSeries {
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// The drawable `(month index, value)` pairs for one year
    pub fn line(&self, year: i32) -> Vec<(usize, f64)> {
        self.points
            .iter()
            .enumerate()
            .filter_map(|(index, point)| point.value(year).map(|value| (index, value)))
            .collect()
    }

    /// Smallest and largest plotted value, always including zero
    pub fn value_range(&self) -> (f64, f64) {
        self.points
            .iter()
            .flat_map(|point| point.values.values().flatten().copied())
            .fold((0.0_f64, 0.0_f64), |(min, max), value| (min.min(value), max.max(value)))
    }
}

/// Position of a three-letter month name in the calendar, 0-based
pub fn month_index(name: &str) -> Option<usize> {
    let name = name.trim();
    MONTH_NAMES.iter().position(|month| *month == name)
}

/// Turns raw monthly spend records into per-year running totals.
///
/// Records sharing a (year, month) are added together and records with an
/// unrecognised month name are dropped. In `period.year`, months after
/// `period.month` are left empty.
pub fn build_trend_series(records: &[CategorySpend], period: ReportingPeriod) -> TrendSeries {
    let years: Vec<i32> = records
        .iter()
        .map(|record| record.year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    if years.is_empty() {
        return TrendSeries::default();
    }

    let mut monthly: BTreeMap<i32, [f64; 12]> =
        years.iter().map(|year| (*year, [0.0; 12])).collect();
    for record in records {
        if let (Some(index), Some(cells)) = (month_index(&record.month), monthly.get_mut(&record.year)) {
            cells[index] += record.amount;
        }
    }

    let mut cumulative: BTreeMap<i32, [Option<f64>; 12]> = BTreeMap::new();
    for (year, cells) in &monthly {
        let mut running = 0.0;
        let mut values = [None; 12];
        for (index, amount) in cells.iter().enumerate() {
            running += amount;
            let elapsed = *year != period.year || index < period.month as usize;
            values[index] = elapsed.then_some(running);
        }
        cumulative.insert(*year, values);
    }

    let points = MONTH_NAMES
        .into_iter()
        .enumerate()
        .map(|(index, month)| TrendPoint {
            month,
            values: cumulative
                .iter()
                .map(|(year, values)| (*year, values[index]))
                .collect(),
        })
        .collect();

    TrendSeries { years, points }
}

/// How a year's line is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearStyle {
    pub color: &'static str,
    pub stroke_width: u32,
}

pub fn year_style(year: i32, current_year: i32) -> YearStyle {
    let color = YEAR_COLORS
        .iter()
        .find(|(mapped, _)| *mapped == year)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_YEAR_COLOR);

    YearStyle {
        color,
        stroke_width: if year == current_year { 3 } else { 2 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spend(year: i32, month: &str, amount: f64) -> CategorySpend {
        CategorySpend {
            year,
            month: month.to_string(),
            amount,
        }
    }

    fn values(series: &TrendSeries, year: i32) -> Vec<Option<f64>> {
        series.points.iter().map(|point| point.value(year)).collect()
    }

    #[test]
    fn test_running_sum_within_year() {
        let records = vec![
            spend(2024, "Jan", 100.0),
            spend(2024, "Feb", 150.0),
            spend(2024, "Apr", 200.0),
        ];
        let series = build_trend_series(&records, ReportingPeriod::new(2026, 10));

        let values = values(&series, 2024);
        assert_eq!(&values[..4], [Some(100.0), Some(250.0), Some(250.0), Some(450.0)]);
        assert!(values[4..].iter().all(|value| *value == Some(450.0)));
    }

    #[test]
    fn test_cumulative_value_is_sum_through_month() {
        let records = vec![
            spend(2023, "Mar", 10.0),
            spend(2023, "Jun", 5.5),
            spend(2023, "Jun", 4.5),
            spend(2023, "Dec", 1.0),
        ];
        let series = build_trend_series(&records, ReportingPeriod::new(2024, 1));

        for (index, point) in series.points.iter().enumerate() {
            let expected: f64 = records
                .iter()
                .filter(|record| month_index(&record.month).unwrap() <= index)
                .map(|record| record.amount)
                .sum();
            assert_eq!(point.value(2023), Some(expected));
        }
    }

    #[test]
    fn test_sums_reset_at_year_boundary() {
        let records = vec![
            spend(2023, "Dec", 500.0),
            spend(2024, "Jan", 20.0),
        ];
        let series = build_trend_series(&records, ReportingPeriod::new(2025, 6));

        assert_eq!(series.years, vec![2023, 2024]);
        assert_eq!(series.points[0].value(2023), Some(0.0));
        assert_eq!(series.points[0].value(2024), Some(20.0));
        assert_eq!(series.points[11].value(2023), Some(500.0));
        assert_eq!(series.points[11].value(2024), Some(20.0));
    }

    #[test]
    fn test_future_months_of_current_year_are_null() {
        let records = vec![
            spend(2024, "Jan", 1.0),
            spend(2025, "Feb", 2.0),
        ];
        let series = build_trend_series(&records, ReportingPeriod::new(2025, 3));

        let current = values(&series, 2025);
        assert_eq!(&current[..3], [Some(0.0), Some(2.0), Some(2.0)]);
        assert!(current[3..].iter().all(Option::is_none));

        // past years stay complete
        assert!(values(&series, 2024).iter().all(Option::is_some));
        assert_eq!(series.line(2025).len(), 3);
    }

    #[test]
    fn test_unknown_month_names_are_ignored() {
        let records = vec![spend(2024, "Smarch", 99.0), spend(2024, " Mar ", 1.0)];
        let series = build_trend_series(&records, ReportingPeriod::new(2026, 1));

        assert_eq!(series.points[11].value(2024), Some(1.0));
    }

    #[test]
    fn test_empty_records() {
        let series = build_trend_series(&[], ReportingPeriod::new(2024, 5));
        assert!(series.is_empty());
        assert!(series.points.is_empty());
        assert_eq!(series.value_range(), (0.0, 0.0));
    }

    #[test]
    fn test_value_range_includes_zero() {
        let records = vec![spend(2023, "Jan", -40.0), spend(2023, "Feb", -10.0)];
        let series = build_trend_series(&records, ReportingPeriod::new(2024, 1));
        assert_eq!(series.value_range(), (-50.0, 0.0));
    }

    #[test]
    fn test_year_style() {
        assert_eq!(year_style(2024, 2026), YearStyle { color: "#3357FF", stroke_width: 2 });
        assert_eq!(year_style(2026, 2026).stroke_width, 3);
        assert_eq!(year_style(2019, 2026).color, FALLBACK_YEAR_COLOR);
    }

    #[test]
    fn test_month_index() {
        assert_eq!(month_index("Jan"), Some(0));
        assert_eq!(month_index("Dec"), Some(11));
        assert_eq!(month_index("December"), None);
    }
}
