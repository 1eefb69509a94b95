//! Category labels and the category → group table shared by every screen.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Transaction;

/// The fixed set of labels the budget service accepts for a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Groceries,
    Shopping,
    PersonalCare,
    Transport,
    Transfers,
    Bills,
    Needs,
    Travel,
    EatingOut,
    Income,
    Entertainment,
    EmergencyFund,
    Charity,
    Gifts,
    Lisa,
    Isa,
    Tax,
    Unknown,
}

impl Category {
    /// Every category, in the order the category selector lists them
    pub const ALL: [Category; 18] = [
        Category::Groceries,
        Category::Shopping,
        Category::PersonalCare,
        Category::Transport,
        Category::Transfers,
        Category::Bills,
        Category::Needs,
        Category::Travel,
        Category::EatingOut,
        Category::Income,
        Category::Entertainment,
        Category::EmergencyFund,
        Category::Charity,
        Category::Gifts,
        Category::Lisa,
        Category::Isa,
        Category::Tax,
        Category::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Groceries => "GROCERIES",
            Category::Shopping => "SHOPPING",
            Category::PersonalCare => "PERSONAL_CARE",
            Category::Transport => "TRANSPORT",
            Category::Transfers => "TRANSFERS",
            Category::Bills => "BILLS",
            Category::Needs => "NEEDS",
            Category::Travel => "TRAVEL",
            Category::EatingOut => "EATING_OUT",
            Category::Income => "INCOME",
            Category::Entertainment => "ENTERTAINMENT",
            Category::EmergencyFund => "EMERGENCY_FUND",
            Category::Charity => "CHARITY",
            Category::Gifts => "GIFTS",
            Category::Lisa => "LISA",
            Category::Isa => "ISA",
            Category::Tax => "TAX",
            Category::Unknown => "UNKNOWN",
        }
    }

    /// The display group this category is reported under, if any
    pub fn group(&self) -> Option<CategoryGroup> {
        CategoryGroup::ALL
            .into_iter()
            .find(|group| group.members().contains(self))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = normalize_label(s);
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == label)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Row/line colour family for a group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowColor {
    Green,
    Red,
    Blue,
}

impl RowColor {
    pub fn css_name(&self) -> &'static str {
        match self {
            RowColor::Green => "green",
            RowColor::Red => "red",
            RowColor::Blue => "blue",
        }
    }
}

/// Semantic buckets used for subtotals, striping and trend charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CategoryGroup {
    Income,
    Needs,
    Wants,
    Savings,
}

/// Groups that get a cumulative trend chart
pub const TREND_GROUPS: [CategoryGroup; 3] = [
    CategoryGroup::Needs,
    CategoryGroup::Wants,
    CategoryGroup::Savings,
];

impl CategoryGroup {
    pub const ALL: [CategoryGroup; 4] = [
        CategoryGroup::Income,
        CategoryGroup::Needs,
        CategoryGroup::Wants,
        CategoryGroup::Savings,
    ];

    pub fn members(&self) -> &'static [Category] {
        match self {
            CategoryGroup::Income => &[Category::Income],
            CategoryGroup::Needs => &[Category::Bills, Category::Groceries, Category::Transport],
            CategoryGroup::Wants => &[
                Category::Shopping,
                Category::Entertainment,
                Category::EatingOut,
                Category::PersonalCare,
                Category::Travel,
                Category::Charity,
                Category::Gifts,
            ],
            CategoryGroup::Savings => &[Category::EmergencyFund, Category::Lisa, Category::Isa],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryGroup::Income => "Income",
            CategoryGroup::Needs => "Needs",
            CategoryGroup::Wants => "Wants",
            CategoryGroup::Savings => "Savings",
        }
    }

    pub fn subtotal_label(&self) -> String {
        format!("Total {}", self.label())
    }

    pub fn color(&self) -> RowColor {
        match self {
            CategoryGroup::Income | CategoryGroup::Savings => RowColor::Green,
            CategoryGroup::Needs => RowColor::Red,
            CategoryGroup::Wants => RowColor::Blue,
        }
    }

    /// Looks up the group of a raw category label (trimmed, case-insensitive)
    pub fn of_label(label: &str) -> Option<Self> {
        label.parse::<Category>().ok().and_then(|category| category.group())
    }
}

/// Distinct category labels seen in a transaction list, sorted.
/// Transactions without a category are reported as `UNKNOWN`.
pub fn distinct_categories(transactions: &[Transaction]) -> Vec<String> {
    transactions
        .iter()
        .map(|transaction| match transaction.category.as_deref() {
            Some(category) if !category.trim().is_empty() => category.to_string(),
            _ => Category::Unknown.as_str().to_string(),
        })
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub(crate) fn normalize_label(label: &str) -> String {
    label.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::transaction;

    #[test]
    fn test_all_categories_round_trip_through_labels() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert_eq!(Category::ALL.len(), 18);
    }

    #[test]
    fn test_parse_is_trimmed_and_case_insensitive() {
        assert_eq!(" eating_out ".parse::<Category>().unwrap(), Category::EatingOut);
        assert!("PETS".parse::<Category>().is_err());
    }

    #[test]
    fn test_every_category_has_at_most_one_group() {
        for category in Category::ALL {
            let owners = CategoryGroup::ALL
                .iter()
                .filter(|group| group.members().contains(&category))
                .count();
            assert!(owners <= 1, "{} belongs to {} groups", category, owners);
        }
    }

    #[test]
    fn test_ungrouped_categories() {
        assert_eq!(Category::Transfers.group(), None);
        assert_eq!(Category::Tax.group(), None);
        assert_eq!(Category::Unknown.group(), None);
        assert_eq!(Category::Needs.group(), None);
        assert_eq!(Category::Lisa.group(), Some(CategoryGroup::Savings));
    }

    #[test]
    fn test_group_lookup_by_label() {
        assert_eq!(CategoryGroup::of_label("groceries"), Some(CategoryGroup::Needs));
        assert_eq!(CategoryGroup::of_label("GIFTS"), Some(CategoryGroup::Wants));
        assert_eq!(CategoryGroup::of_label("INCOME"), Some(CategoryGroup::Income));
        assert_eq!(CategoryGroup::of_label("Total Needs"), None);
    }

    #[test]
    fn test_group_colors() {
        assert_eq!(CategoryGroup::Income.color(), RowColor::Green);
        assert_eq!(CategoryGroup::Needs.color(), RowColor::Red);
        assert_eq!(CategoryGroup::Wants.color(), RowColor::Blue);
        assert_eq!(CategoryGroup::Savings.color(), RowColor::Green);
        assert_eq!(CategoryGroup::Needs.subtotal_label(), "Total Needs");
    }

    #[test]
    fn test_distinct_categories() {
        let transactions = vec![
            transaction("1", 1.0, Some("TRAVEL")),
            transaction("2", 1.0, None),
            transaction("3", 1.0, Some("BILLS")),
            transaction("4", 1.0, Some("TRAVEL")),
            transaction("5", 1.0, Some("")),
        ];

        assert_eq!(distinct_categories(&transactions), vec!["BILLS", "TRAVEL", "UNKNOWN"]);
    }
}
