//! Category registry
//!
//! Each transaction kind has a fixed, ordered list of permitted categories.
//! The order is the numbering shown in menus (1-based).

use std::fmt;
use std::str::FromStr;

use super::transaction::TransactionKind;
use crate::error::{TrackerError, TrackerResult};

/// Categories accepted for income transactions, in menu order
pub const INCOME_CATEGORIES: &[&str] = &["salary", "business", "other"];

/// Categories accepted for expense transactions, in menu order
pub const EXPENSE_CATEGORIES: &[&str] = &["food", "rent", "travel", "utilities", "other"];

/// Get the ordered categories for a transaction kind
pub fn categories_for(kind: TransactionKind) -> &'static [&'static str] {
    match kind {
        TransactionKind::Income => INCOME_CATEGORIES,
        TransactionKind::Expense => EXPENSE_CATEGORIES,
    }
}

/// Check whether a category is registered for the given kind (case-insensitive)
pub fn is_valid(kind: TransactionKind, category: &str) -> bool {
    let category = category.to_lowercase();
    categories_for(kind).iter().any(|c| *c == category)
}

/// How a caller picks a category: by menu number or by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySelector {
    /// 1-based position in [`categories_for`]
    Index(usize),
    Name(String),
}

impl CategorySelector {
    /// Resolve to a registered category name for `kind`
    pub fn resolve(&self, kind: TransactionKind) -> TrackerResult<&'static str> {
        let categories = categories_for(kind);
        match self {
            Self::Index(index) => index
                .checked_sub(1)
                .and_then(|i| categories.get(i))
                .copied()
                .ok_or_else(|| {
                    TrackerError::Validation(format!(
                        "Invalid category number {} (choose 1-{})",
                        index,
                        categories.len()
                    ))
                }),
            Self::Name(name) => {
                let wanted = name.trim().to_lowercase();
                categories
                    .iter()
                    .find(|c| **c == wanted)
                    .copied()
                    .ok_or_else(|| {
                        TrackerError::Validation(format!(
                            "'{}' is not a valid {} category (expected one of: {})",
                            name,
                            kind,
                            categories.join(", ")
                        ))
                    })
            }
        }
    }
}

impl FromStr for CategorySelector {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(TrackerError::Validation("Category cannot be empty".into()));
        }
        Ok(match s.parse::<usize>() {
            Ok(index) => Self::Index(index),
            Err(_) => Self::Name(s.to_string()),
        })
    }
}

impl fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "#{}", index),
            Self::Name(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_for() {
        assert_eq!(
            categories_for(TransactionKind::Income),
            &["salary", "business", "other"]
        );
        assert_eq!(categories_for(TransactionKind::Expense).len(), 5);
        assert_eq!(categories_for(TransactionKind::Expense)[3], "utilities");
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid(TransactionKind::Income, "salary"));
        assert!(is_valid(TransactionKind::Income, "Salary"));
        assert!(is_valid(TransactionKind::Expense, "other"));
        assert!(!is_valid(TransactionKind::Income, "food"));
        assert!(!is_valid(TransactionKind::Expense, "salary"));
    }

    #[test]
    fn test_resolve_by_index() {
        let selector = CategorySelector::Index(2);
        assert_eq!(selector.resolve(TransactionKind::Expense).unwrap(), "rent");
        assert_eq!(selector.resolve(TransactionKind::Income).unwrap(), "business");

        assert!(CategorySelector::Index(0)
            .resolve(TransactionKind::Income)
            .unwrap_err()
            .is_validation());
        assert!(CategorySelector::Index(4)
            .resolve(TransactionKind::Income)
            .is_err());
    }

    #[test]
    fn test_resolve_by_name() {
        let selector = CategorySelector::Name("Travel".into());
        assert_eq!(selector.resolve(TransactionKind::Expense).unwrap(), "travel");
        assert!(selector.resolve(TransactionKind::Income).is_err());
    }

    #[test]
    fn test_selector_parsing() {
        assert_eq!(
            "3".parse::<CategorySelector>().unwrap(),
            CategorySelector::Index(3)
        );
        assert_eq!(
            " food ".parse::<CategorySelector>().unwrap(),
            CategorySelector::Name("food".into())
        );
        assert!("  ".parse::<CategorySelector>().is_err());
    }
}
