use std::cmp::Ordering;

use crate::Transaction;

/// Sortable column of the transaction table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    TransactionId,
    Date,
    Description,
    Amount,
    Account,
    Category,
}

impl SortKey {
    /// Columns in table order
    pub const ALL: [SortKey; 6] = [
        SortKey::TransactionId,
        SortKey::Date,
        SortKey::Description,
        SortKey::Amount,
        SortKey::Account,
        SortKey::Category,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::TransactionId => "ID",
            SortKey::Date => "Date",
            SortKey::Description => "Description",
            SortKey::Amount => "Amount",
            SortKey::Account => "Account",
            SortKey::Category => "Category",
        }
    }

    fn compare(&self, a: &Transaction, b: &Transaction) -> Ordering {
        match self {
            SortKey::TransactionId => a.id.cmp(&b.id),
            SortKey::Date => a.date.cmp(&b.date),
            SortKey::Description => a.description.cmp(&b.description),
            SortKey::Amount => a.amount.total_cmp(&b.amount),
            SortKey::Account => a.account.cmp(&b.account),
            SortKey::Category => a.category.cmp(&b.category),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn ascending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    /// Sort to apply after a click on `key`'s header: descending if the
    /// table is already ascending on that column, ascending otherwise.
    pub fn after_click(current: Option<SortConfig>, key: SortKey) -> Self {
        match current {
            Some(SortConfig { key: current_key, direction: SortDirection::Ascending }) if current_key == key => Self {
                key,
                direction: SortDirection::Descending,
            },
            _ => Self::ascending(key),
        }
    }

    /// Header arrow for `key`, if it is the active column
    pub fn indicator(current: Option<SortConfig>, key: SortKey) -> Option<&'static str> {
        current
            .filter(|config| config.key == key)
            .map(|config| config.direction.arrow())
    }
}

/// Stable in-place sort; ties keep their relative order in both directions.
pub fn sort_transactions(transactions: &mut [Transaction], config: SortConfig) {
    transactions.sort_by(|a, b| match config.direction {
        SortDirection::Ascending => config.key.compare(a, b),
        SortDirection::Descending => config.key.compare(b, a),
    });
}
