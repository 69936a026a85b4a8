//! Pure balance arithmetic over accounts and transactions.
//!
//! All arithmetic uses [rust_decimal::Decimal] so a balance is exact: an
//! account with no transactions has a balance of exactly `initial_balance`,
//! with no floating-point drift.

use rust_decimal::Decimal;

use crate::{
    account::Account,
    transaction::{Transaction, TransactionKind},
};

/// Compute an account's current balance:
/// `initial_balance + Σ income − Σ expenses` over the transactions that
/// reference the account. Transactions on other accounts are ignored.
pub fn compute_account_balance(account: &Account, transactions: &[Transaction]) -> Decimal {
    let mut balance = account.initial_balance;

    for transaction in transactions {
        if transaction.account_id != account.id {
            continue;
        }

        match transaction.kind {
            TransactionKind::Income => balance += transaction.amount,
            TransactionKind::Expense => balance -= transaction.amount,
        }
    }

    balance
}

/// Apply [compute_account_balance] to each account.
pub fn with_balances(mut accounts: Vec<Account>, transactions: &[Transaction]) -> Vec<Account> {
    for account in &mut accounts {
        account.balance = compute_account_balance(account, transactions);
    }

    accounts
}

/// The sum of the derived balances across all accounts.
pub fn total_balance(accounts: &[Account]) -> Decimal {
    accounts.iter().map(|account| account.balance).sum()
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::{
        account::{Account, AccountKind},
        transaction::{Transaction, TransactionKind},
    };

    use super::{compute_account_balance, total_balance, with_balances};

    fn account(id: i64, initial_balance: Decimal) -> Account {
        Account {
            id,
            name: format!("Account {id}"),
            kind: AccountKind::Cash,
            color: "#10b981".to_owned(),
            icon: "banknote".to_owned(),
            initial_balance,
            currency: "CNY".to_owned(),
            created_at: String::new(),
            updated_at: String::new(),
            balance: initial_balance,
        }
    }

    fn transaction(account_id: i64, kind: TransactionKind, amount: Decimal) -> Transaction {
        Transaction {
            id: 0,
            kind,
            amount,
            category_id: 1,
            account_id,
            note: String::new(),
            date: 0,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn no_transactions_returns_initial_balance_exactly() {
        let account = account(1, "100.00".parse().unwrap());

        let balance = compute_account_balance(&account, &[]);

        assert_eq!(balance, "100.00".parse::<Decimal>().unwrap());
        assert_eq!(balance.to_string(), "100.00");
    }

    #[test]
    fn income_adds_and_expenses_subtract() {
        // Account "Cash" starts at 500; a 45.50 expense brings it to 454.50.
        // The 8000 income on a different account must not leak in.
        let cash = account(1, Decimal::from(500));
        let transactions = vec![
            transaction(1, TransactionKind::Expense, Decimal::new(4_550, 2)),
            transaction(2, TransactionKind::Income, Decimal::from(8_000)),
        ];

        let balance = compute_account_balance(&cash, &transactions);

        assert_eq!(balance, Decimal::new(45_450, 2));
    }

    #[test]
    fn no_drift_after_ten_thousand_two_decimal_amounts() {
        let account = account(1, Decimal::ZERO);
        let mut transactions = Vec::with_capacity(10_000);
        let mut expected_cents: i64 = 0;

        // Deterministic pseudo-random amounts in cents.
        let mut seed: u64 = 0x2545_F491_4F6C_DD1D;
        for index in 0..10_000 {
            seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            let cents = (seed >> 33) as i64 % 100_000;
            let amount = Decimal::new(cents, 2);

            let kind = if index % 2 == 0 {
                expected_cents += cents;
                TransactionKind::Income
            } else {
                expected_cents -= cents;
                TransactionKind::Expense
            };

            transactions.push(transaction(1, kind, amount));
        }

        let balance = compute_account_balance(&account, &transactions);

        assert_eq!(balance, Decimal::new(expected_cents, 2));
    }

    #[test]
    fn with_balances_covers_every_account() {
        let accounts = vec![account(1, Decimal::from(500)), account(2, Decimal::from(10))];
        let transactions = vec![
            transaction(1, TransactionKind::Expense, Decimal::new(4_550, 2)),
            transaction(2, TransactionKind::Income, Decimal::from(8_000)),
        ];

        let accounts = with_balances(accounts, &transactions);

        assert_eq!(accounts[0].balance, Decimal::new(45_450, 2));
        assert_eq!(accounts[1].balance, Decimal::from(8_010));
        assert_eq!(total_balance(&accounts), Decimal::new(846_450, 2));
    }
}
