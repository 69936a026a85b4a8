//! Income/expense totals over a calendar month.

use rust_decimal::Decimal;
use serde::Serialize;
use time::{Month, UtcOffset};

use crate::{
    timezone::local_date,
    transaction::{Transaction, TransactionKind},
};

/// The income, expense and net totals for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthSummary {
    /// Total income in the month.
    #[serde(with = "crate::money::serde_amount")]
    pub income: Decimal,
    /// Total expenses in the month.
    #[serde(with = "crate::money::serde_amount")]
    pub expense: Decimal,
    /// `income - expense`.
    #[serde(with = "crate::money::serde_amount")]
    pub net: Decimal,
}

/// Sum income and expenses over the transactions whose `date` falls in the
/// given calendar month in the given timezone.
pub fn month_summary(
    transactions: &[Transaction],
    year: i32,
    month: Month,
    timezone_offset: UtcOffset,
) -> MonthSummary {
    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;

    for transaction in transactions {
        let date = local_date(transaction.date, timezone_offset);

        if date.year() != year || date.month() != month {
            continue;
        }

        match transaction.kind {
            TransactionKind::Income => income += transaction.amount,
            TransactionKind::Expense => expense += transaction.amount,
        }
    }

    MonthSummary {
        income,
        expense,
        net: income - expense,
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use time::{Month, UtcOffset};

    use crate::transaction::{Transaction, TransactionKind};

    use super::month_summary;

    fn transaction(kind: TransactionKind, amount: Decimal, date: i64) -> Transaction {
        Transaction {
            id: 0,
            kind,
            amount,
            category_id: 1,
            account_id: 1,
            note: String::new(),
            date,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    // 2024-06-15T12:00:00Z.
    const JUNE_15: i64 = 1_718_452_800_000;
    // 2024-07-01T00:00:00Z.
    const JULY_1: i64 = 1_719_792_000_000;

    #[test]
    fn sums_only_the_requested_month() {
        let transactions = vec![
            transaction(TransactionKind::Income, Decimal::from(8_000), JUNE_15),
            transaction(TransactionKind::Expense, Decimal::new(4_550, 2), JUNE_15),
            transaction(TransactionKind::Expense, Decimal::from(100), JULY_1),
        ];

        let summary = month_summary(&transactions, 2024, Month::June, UtcOffset::UTC);

        assert_eq!(summary.income, Decimal::from(8_000));
        assert_eq!(summary.expense, Decimal::new(4_550, 2));
        assert_eq!(summary.net, Decimal::new(795_450, 2));
    }

    #[test]
    fn empty_month_is_all_zero() {
        let summary = month_summary(&[], 2024, Month::June, UtcOffset::UTC);

        assert_eq!(summary.income, Decimal::ZERO);
        assert_eq!(summary.expense, Decimal::ZERO);
        assert_eq!(summary.net, Decimal::ZERO);
    }

    #[test]
    fn month_boundary_follows_the_timezone() {
        // 2024-06-30T23:30:00Z is already July 1st at UTC+13.
        let late_june_utc = JULY_1 - 30 * 60 * 1_000;
        let transactions = vec![transaction(
            TransactionKind::Expense,
            Decimal::from(10),
            late_june_utc,
        )];
        let offset = UtcOffset::from_hms(13, 0, 0).unwrap();

        let june = month_summary(&transactions, 2024, Month::June, offset);
        let july = month_summary(&transactions, 2024, Month::July, offset);

        assert_eq!(june.expense, Decimal::ZERO);
        assert_eq!(july.expense, Decimal::from(10));
    }
}
