//! Category entity and the built-in starter catalog

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::types::CategoryKind;

/// A user-scoped label for classifying income and expense transactions.
/// Deletion only flips `is_active`; name, kind and owner are preserved.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Category {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CategoryKind,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One entry of the starter catalog offered to every new user.
#[derive(Debug, Clone, Copy)]
pub struct CategoryPreset {
    pub name: &'static str,
    pub kind: CategoryKind,
    pub icon: &'static str,
    pub color: &'static str,
}

/// Starter catalog, materialized for a user when their category list is
/// first requested empty (or explicitly on demand). Inserts skip names the
/// user already has, so materializing twice is harmless.
pub const DEFAULT_CATEGORIES: &[CategoryPreset] = &[
    CategoryPreset { name: "Groceries", kind: CategoryKind::Expense, icon: "shopping-cart", color: "#4CAF50" },
    CategoryPreset { name: "Transport", kind: CategoryKind::Expense, icon: "bus", color: "#2196F3" },
    CategoryPreset { name: "Housing", kind: CategoryKind::Expense, icon: "home", color: "#795548" },
    CategoryPreset { name: "Utilities", kind: CategoryKind::Expense, icon: "bolt", color: "#FF9800" },
    CategoryPreset { name: "Entertainment", kind: CategoryKind::Expense, icon: "film", color: "#9C27B0" },
    CategoryPreset { name: "Health", kind: CategoryKind::Expense, icon: "heart", color: "#F44336" },
    CategoryPreset { name: "Dining Out", kind: CategoryKind::Expense, icon: "utensils", color: "#FF5722" },
    CategoryPreset { name: "Shopping", kind: CategoryKind::Expense, icon: "shopping-bag", color: "#E91E63" },
    CategoryPreset { name: "Salary", kind: CategoryKind::Income, icon: "briefcase", color: "#8BC34A" },
    CategoryPreset { name: "Freelance", kind: CategoryKind::Income, icon: "laptop", color: "#00BCD4" },
    CategoryPreset { name: "Investments", kind: CategoryKind::Income, icon: "trending-up", color: "#3F51B5" },
    CategoryPreset { name: "Other Income", kind: CategoryKind::Income, icon: "plus-circle", color: "#607D8B" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_size() {
        assert_eq!(DEFAULT_CATEGORIES.len(), 12);

        let expense = DEFAULT_CATEGORIES
            .iter()
            .filter(|p| p.kind == CategoryKind::Expense)
            .count();
        let income = DEFAULT_CATEGORIES
            .iter()
            .filter(|p| p.kind == CategoryKind::Income)
            .count();
        assert_eq!(expense, 8);
        assert_eq!(income, 4);
    }

    #[test]
    fn test_default_catalog_names_unique() {
        let mut names: Vec<String> = DEFAULT_CATEGORIES
            .iter()
            .map(|p| p.name.to_lowercase())
            .collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), DEFAULT_CATEGORIES.len());
    }
}
