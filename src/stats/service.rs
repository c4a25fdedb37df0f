//! Statistics Service
//!
//! Monthly income and expense totals per user. Transfers move money between
//! a user's own accounts and are excluded from both sides.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::TransactionKind;
use crate::error::AppError;
use crate::store::TransactionStore;

/// Totals for one calendar month.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlySummary {
    pub year: i32,
    pub month: u32,
    pub income: Decimal,
    pub expense: Decimal,
    pub net: Decimal,
}

#[derive(Debug, Clone)]
pub struct StatsService {
    transactions: TransactionStore,
}

impl StatsService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            transactions: TransactionStore::new(pool),
        }
    }

    /// Income, expense, and net totals for the given month. A month with no
    /// transactions reports zeros.
    pub async fn monthly_totals(
        &self,
        user_id: Uuid,
        year: i32,
        month: u32,
    ) -> Result<MonthlySummary, AppError> {
        let (start, end) = month_window(year, month)?;

        let income = self
            .transactions
            .sum_by_kind(user_id, TransactionKind::Income, start, end)
            .await?;
        let expense = self
            .transactions
            .sum_by_kind(user_id, TransactionKind::Expense, start, end)
            .await?;

        Ok(MonthlySummary {
            year,
            month,
            income,
            expense,
            net: income - expense,
        })
    }
}

/// Inclusive UTC window covering one calendar month, from the first day at
/// midnight to the last day at 23:59:59.
fn month_window(year: i32, month: u32) -> Result<(DateTime<Utc>, DateTime<Utc>), AppError> {
    if !(1..=12).contains(&month) {
        return Err(AppError::Validation(
            "Month must be between 1 and 12".to_string(),
        ));
    }

    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::Validation("Year is out of range".to_string()))?;
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let next_first = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .ok_or_else(|| AppError::Validation("Year is out of range".to_string()))?;

    let start = first.and_time(NaiveTime::MIN).and_utc();
    let end = next_first.and_time(NaiveTime::MIN).and_utc() - Duration::seconds(1);

    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_covers_whole_month() {
        let (start, end) = month_window(2024, 9).unwrap();

        assert_eq!(start.to_rfc3339(), "2024-09-01T00:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2024-09-30T23:59:59+00:00");
    }

    #[test]
    fn test_window_rolls_over_december() {
        let (start, end) = month_window(2024, 12).unwrap();

        assert_eq!(start.to_rfc3339(), "2024-12-01T00:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2024-12-31T23:59:59+00:00");
    }

    #[test]
    fn test_window_handles_leap_february() {
        let (_, end) = month_window(2024, 2).unwrap();
        assert_eq!(end.to_rfc3339(), "2024-02-29T23:59:59+00:00");

        let (_, end) = month_window(2023, 2).unwrap();
        assert_eq!(end.to_rfc3339(), "2023-02-28T23:59:59+00:00");
    }

    #[test]
    fn test_window_rejects_invalid_months() {
        assert!(month_window(2024, 0).is_err());
        assert!(month_window(2024, 13).is_err());
    }
}
