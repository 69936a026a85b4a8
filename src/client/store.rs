//! The client-side data store and its optimistic local-fallback
//! reconciliation policy.

use rust_decimal::Decimal;
use time::{Month, UtcOffset};

use crate::{
    Error,
    account::{Account, NewAccount, UpdateAccount},
    balance::{total_balance, with_balances},
    category::{Category, NewCategory, UpdateCategory},
    client::{
        backend::ApiBackend,
        seed::{default_accounts, default_categories},
    },
    database_id::{AccountId, CategoryId, TransactionId},
    export::export_transactions_csv,
    stats::{CategorySlice, MonthSummary, category_breakdown, month_summary},
    transaction::{
        DayGroup, EnrichedTransaction, NewTransaction, Transaction, TransactionKind,
        UpdateTransaction, core::validate_payload, enrich_transaction, group_by_day,
    },
};

/// Whether the store has completed its initial fetch.
///
/// The rendering surface must treat [StorePhase::Loading] as a distinct
/// state; the store is never "empty and broken" between mount and the first
/// fetch outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorePhase {
    /// Constructed but [DataStore::init] has not yet finished.
    Loading,
    /// The initial fetch finished, successfully or not.
    Ready,
}

/// One entity collection together with its sync status.
///
/// `server_synced` is false whenever the collection holds rows the server
/// does not know about: the seeded defaults after a failed initial fetch, or
/// rows kept local-only after a failed mutation. Local-only rows are never
/// silently merged back; divergence stays visible here.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    /// Whether every row in `data` is known to the server.
    pub server_synced: bool,
    /// The rows.
    pub data: Vec<T>,
}

impl<T> Collection<T> {
    fn local(data: Vec<T>) -> Self {
        Self {
            server_synced: false,
            data,
        }
    }

    fn synced(data: Vec<T>) -> Self {
        Self {
            server_synced: true,
            data,
        }
    }
}

/// The in-memory cache of the three entity collections.
///
/// Constructed once at startup and handed to views explicitly; there is no
/// module-level singleton. Every mutation is optimistic-fallback: the remote
/// call is attempted first, and on success local state is reconciled with the
/// server-returned entity; on failure the same mutation is applied to local
/// state only, with a synthesized ID, and the collection is marked unsynced.
pub struct DataStore<B: ApiBackend> {
    backend: B,
    phase: StorePhase,
    accounts: Collection<Account>,
    categories: Collection<Category>,
    transactions: Collection<Transaction>,
}

impl<B: ApiBackend> DataStore<B> {
    /// Create an empty store in the [StorePhase::Loading] phase.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            phase: StorePhase::Loading,
            accounts: Collection::local(Vec::new()),
            categories: Collection::local(Vec::new()),
            transactions: Collection::local(Vec::new()),
        }
    }

    /// Fetch all three collections in parallel.
    ///
    /// A failed fetch, or an empty result where defaults exist, substitutes
    /// the built-in seed set as an unsynced collection. Transactions have no
    /// seed: a failed fetch leaves them empty and unsynced.
    pub async fn init(&mut self) {
        let (accounts, categories, transactions) = tokio::join!(
            self.backend.list_accounts(),
            self.backend.list_categories(),
            self.backend.list_transactions(),
        );

        self.accounts = match accounts {
            Ok(accounts) if !accounts.is_empty() => Collection::synced(accounts),
            Ok(_) => Collection::local(default_accounts()),
            Err(error) => {
                tracing::warn!("could not fetch accounts, using defaults: {error}");
                Collection::local(default_accounts())
            }
        };

        self.categories = match categories {
            Ok(categories) if !categories.is_empty() => Collection::synced(categories),
            Ok(_) => Collection::local(default_categories()),
            Err(error) => {
                tracing::warn!("could not fetch categories, using defaults: {error}");
                Collection::local(default_categories())
            }
        };

        self.transactions = match transactions {
            Ok(transactions) => Collection::synced(transactions),
            Err(error) => {
                tracing::warn!("could not fetch transactions, starting empty: {error}");
                Collection::local(Vec::new())
            }
        };

        self.phase = StorePhase::Ready;
    }

    /// Whether the initial fetch has completed.
    pub fn phase(&self) -> StorePhase {
        self.phase
    }

    /// The account collection. Balances are not applied; use
    /// [DataStore::accounts_with_balances] for display.
    pub fn accounts(&self) -> &Collection<Account> {
        &self.accounts
    }

    /// The category collection.
    pub fn categories(&self) -> &Collection<Category> {
        &self.categories
    }

    /// The transaction collection.
    pub fn transactions(&self) -> &Collection<Transaction> {
        &self.transactions
    }

    /// Create an account, locally if the server cannot.
    pub async fn add_account(&mut self, payload: NewAccount) -> Account {
        let account = match self.backend.create_account(&payload).await {
            Ok(account) => account,
            Err(error) => {
                tracing::warn!("account creation failed, keeping local copy: {error}");
                self.accounts.server_synced = false;

                Account {
                    id: next_id(self.accounts.data.iter().map(|account| account.id)),
                    name: payload.name,
                    kind: payload.kind,
                    color: payload.color,
                    icon: payload.icon,
                    initial_balance: payload.initial_balance,
                    currency: payload.currency,
                    created_at: String::new(),
                    updated_at: String::new(),
                    balance: payload.initial_balance,
                }
            }
        };

        self.accounts.data.push(account.clone());

        account
    }

    /// Overwrite an account's mutable fields, locally if the server cannot.
    pub async fn update_account(
        &mut self,
        id: AccountId,
        payload: UpdateAccount,
    ) -> Result<Account, Error> {
        let index = self
            .accounts
            .data
            .iter()
            .position(|account| account.id == id)
            .ok_or(Error::NotFound)?;

        let account = match self.backend.update_account(id, &payload).await {
            Ok(account) => account,
            Err(error) => {
                tracing::warn!("account update failed, keeping local copy: {error}");
                self.accounts.server_synced = false;

                let mut account = self.accounts.data[index].clone();
                account.name = payload.name;
                account.kind = payload.kind;
                account.color = payload.color;
                account.icon = payload.icon;
                account.initial_balance = payload.initial_balance;
                account
            }
        };

        self.accounts.data[index] = account.clone();

        Ok(account)
    }

    /// Delete an account.
    ///
    /// The referential guard runs locally before any network call: an
    /// account with transactions cannot be deleted, and the request is never
    /// sent.
    pub async fn delete_account(&mut self, id: AccountId) -> Result<(), Error> {
        if !self.accounts.data.iter().any(|account| account.id == id) {
            return Err(Error::NotFound);
        }

        let has_transactions = self
            .transactions
            .data
            .iter()
            .any(|transaction| transaction.account_id == id);

        if has_transactions {
            return Err(Error::Conflict(
                "Cannot delete account with transactions".to_owned(),
            ));
        }

        if let Err(error) = self.backend.delete_account(id).await {
            tracing::warn!("account deletion failed, removing locally: {error}");
            self.accounts.server_synced = false;
        }

        self.accounts.data.retain(|account| account.id != id);

        Ok(())
    }

    /// Create a category, locally if the server cannot.
    pub async fn add_category(&mut self, payload: NewCategory) -> Category {
        let category = match self.backend.create_category(&payload).await {
            Ok(category) => category,
            Err(error) => {
                tracing::warn!("category creation failed, keeping local copy: {error}");
                self.categories.server_synced = false;

                Category {
                    id: next_id(self.categories.data.iter().map(|category| category.id)),
                    name: payload.name,
                    kind: payload.kind,
                    color: payload.color,
                    icon: payload.icon,
                    parent_id: payload.parent_id,
                    created_at: String::new(),
                    updated_at: String::new(),
                }
            }
        };

        self.categories.data.push(category.clone());

        category
    }

    /// Overwrite a category's mutable fields, locally if the server cannot.
    /// The kind and parent are immutable.
    pub async fn update_category(
        &mut self,
        id: CategoryId,
        payload: UpdateCategory,
    ) -> Result<Category, Error> {
        let index = self
            .categories
            .data
            .iter()
            .position(|category| category.id == id)
            .ok_or(Error::NotFound)?;

        let category = match self.backend.update_category(id, &payload).await {
            Ok(category) => category,
            Err(error) => {
                tracing::warn!("category update failed, keeping local copy: {error}");
                self.categories.server_synced = false;

                let mut category = self.categories.data[index].clone();
                category.name = payload.name;
                category.color = payload.color;
                category.icon = payload.icon;
                category
            }
        };

        self.categories.data[index] = category.clone();

        Ok(category)
    }

    /// Delete a category.
    ///
    /// Both referential guards run locally before any network call: a
    /// category with subcategories or with transactions cannot be deleted.
    pub async fn delete_category(&mut self, id: CategoryId) -> Result<(), Error> {
        if !self.categories.data.iter().any(|category| category.id == id) {
            return Err(Error::NotFound);
        }

        let has_subcategories = self
            .categories
            .data
            .iter()
            .any(|category| category.parent_id == Some(id));

        if has_subcategories {
            return Err(Error::Conflict(
                "Cannot delete category with subcategories".to_owned(),
            ));
        }

        let has_transactions = self
            .transactions
            .data
            .iter()
            .any(|transaction| transaction.category_id == id);

        if has_transactions {
            return Err(Error::Conflict(
                "Cannot delete category with transactions".to_owned(),
            ));
        }

        if let Err(error) = self.backend.delete_category(id).await {
            tracing::warn!("category deletion failed, removing locally: {error}");
            self.categories.server_synced = false;
        }

        self.categories.data.retain(|category| category.id != id);

        Ok(())
    }

    /// Create a transaction, locally if the server cannot.
    ///
    /// Transfer kinds and negative amounts are rejected before any network
    /// call.
    pub async fn add_transaction(&mut self, payload: NewTransaction) -> Result<Transaction, Error> {
        let kind = validate_payload(&payload)?;

        let transaction = match self.backend.create_transaction(&payload).await {
            Ok(transaction) => transaction,
            Err(error) => {
                tracing::warn!("transaction creation failed, keeping local copy: {error}");
                self.transactions.server_synced = false;

                Transaction {
                    id: next_id(
                        self.transactions
                            .data
                            .iter()
                            .map(|transaction| transaction.id),
                    ),
                    kind,
                    amount: payload.amount,
                    category_id: payload.category_id,
                    account_id: payload.account_id,
                    note: payload.note,
                    date: payload.date,
                    created_at: String::new(),
                    updated_at: String::new(),
                }
            }
        };

        self.transactions.data.push(transaction.clone());

        Ok(transaction)
    }

    /// Overwrite a transaction, locally if the server cannot.
    pub async fn update_transaction(
        &mut self,
        id: TransactionId,
        payload: UpdateTransaction,
    ) -> Result<Transaction, Error> {
        let kind = validate_payload(&payload)?;

        let index = self
            .transactions
            .data
            .iter()
            .position(|transaction| transaction.id == id)
            .ok_or(Error::NotFound)?;

        let transaction = match self.backend.update_transaction(id, &payload).await {
            Ok(transaction) => transaction,
            Err(error) => {
                tracing::warn!("transaction update failed, keeping local copy: {error}");
                self.transactions.server_synced = false;

                let mut transaction = self.transactions.data[index].clone();
                transaction.kind = kind;
                transaction.amount = payload.amount;
                transaction.category_id = payload.category_id;
                transaction.account_id = payload.account_id;
                transaction.note = payload.note;
                transaction.date = payload.date;
                transaction
            }
        };

        self.transactions.data[index] = transaction.clone();

        Ok(transaction)
    }

    /// Delete a transaction. There is no referential guard.
    pub async fn delete_transaction(&mut self, id: TransactionId) -> Result<(), Error> {
        if !self
            .transactions
            .data
            .iter()
            .any(|transaction| transaction.id == id)
        {
            return Err(Error::NotFound);
        }

        if let Err(error) = self.backend.delete_transaction(id).await {
            tracing::warn!("transaction deletion failed, removing locally: {error}");
            self.transactions.server_synced = false;
        }

        self.transactions
            .data
            .retain(|transaction| transaction.id != id);

        Ok(())
    }

    /// The accounts with their derived balances applied.
    pub fn accounts_with_balances(&self) -> Vec<Account> {
        with_balances(self.accounts.data.clone(), &self.transactions.data)
    }

    /// The sum of every account's derived balance.
    pub fn total_balance(&self) -> Decimal {
        total_balance(&self.accounts_with_balances())
    }

    /// The categories with no parent.
    pub fn parent_categories(&self) -> Vec<&Category> {
        self.categories
            .data
            .iter()
            .filter(|category| category.parent_id.is_none())
            .collect()
    }

    /// The subcategories of a parent category.
    pub fn subcategories(&self, parent_id: CategoryId) -> Vec<&Category> {
        self.categories
            .data
            .iter()
            .filter(|category| category.parent_id == Some(parent_id))
            .collect()
    }

    /// Every transaction joined with its resolved category, parent category
    /// and account.
    pub fn enriched_transactions(&self) -> Vec<EnrichedTransaction> {
        self.transactions
            .data
            .iter()
            .map(|transaction| {
                enrich_transaction(transaction, &self.categories.data, &self.accounts.data)
            })
            .collect()
    }

    /// The enriched transactions grouped into calendar days, newest first.
    pub fn timeline(&self, timezone_offset: UtcOffset) -> Vec<DayGroup<EnrichedTransaction>> {
        let mut enriched = self.enriched_transactions();
        enriched.sort_by(|left, right| right.transaction.date.cmp(&left.transaction.date));

        group_by_day(&enriched, timezone_offset)
    }

    /// Income, expense and net totals for one calendar month.
    pub fn month_summary(
        &self,
        year: i32,
        month: Month,
        timezone_offset: UtcOffset,
    ) -> MonthSummary {
        month_summary(&self.transactions.data, year, month, timezone_offset)
    }

    /// Per-category expense totals, largest first.
    pub fn expense_breakdown(&self) -> Vec<CategorySlice> {
        category_breakdown(&self.enriched_transactions(), TransactionKind::Expense)
    }

    /// The transactions as a CSV document.
    pub fn export_csv(&self) -> Result<String, Error> {
        export_transactions_csv(&self.enriched_transactions())
    }
}

fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().unwrap_or(0).max(0) + 1
}
