//! The network seam of the client data store.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::{
    account::{Account, NewAccount, UpdateAccount},
    category::{Category, NewCategory, UpdateCategory},
    database_id::{AccountId, CategoryId, TransactionId},
    endpoints,
    transaction::{NewTransaction, Transaction, UpdateTransaction},
};

/// A failure reported by an [ApiBackend].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BackendError {
    /// The request never produced a response, e.g. the server was down.
    #[error("request failed: {0}")]
    Transport(String),

    /// The server responded with a non-success status.
    #[error("{message}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The `error` field of the response body, or the status line when
        /// the body could not be parsed.
        message: String,
    },
}

/// The remote API as seen by the client data store.
///
/// [crate::DataStore] is generic over this trait so that tests can substitute
/// a failing or recording double for the real HTTP client.
#[async_trait]
pub trait ApiBackend {
    /// Fetch all accounts.
    async fn list_accounts(&self) -> Result<Vec<Account>, BackendError>;
    /// Create an account and return the stored row.
    async fn create_account(&self, payload: &NewAccount) -> Result<Account, BackendError>;
    /// Overwrite an account and return the stored row.
    async fn update_account(
        &self,
        id: AccountId,
        payload: &UpdateAccount,
    ) -> Result<Account, BackendError>;
    /// Delete an account.
    async fn delete_account(&self, id: AccountId) -> Result<(), BackendError>;

    /// Fetch all categories.
    async fn list_categories(&self) -> Result<Vec<Category>, BackendError>;
    /// Create a category and return the stored row.
    async fn create_category(&self, payload: &NewCategory) -> Result<Category, BackendError>;
    /// Overwrite a category's mutable fields and return the stored row.
    async fn update_category(
        &self,
        id: CategoryId,
        payload: &UpdateCategory,
    ) -> Result<Category, BackendError>;
    /// Delete a category.
    async fn delete_category(&self, id: CategoryId) -> Result<(), BackendError>;

    /// Fetch all transactions.
    async fn list_transactions(&self) -> Result<Vec<Transaction>, BackendError>;
    /// Create a transaction and return the stored row.
    async fn create_transaction(
        &self,
        payload: &NewTransaction,
    ) -> Result<Transaction, BackendError>;
    /// Overwrite a transaction and return the stored row.
    async fn update_transaction(
        &self,
        id: TransactionId,
        payload: &UpdateTransaction,
    ) -> Result<Transaction, BackendError>;
    /// Delete a transaction.
    async fn delete_transaction(&self, id: TransactionId) -> Result<(), BackendError>;
}

/// The real [ApiBackend] speaking JSON over HTTP to the server.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a backend for the server at `base_url`, e.g.
    /// `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn item_url(&self, endpoint: &str, id: i64) -> String {
        format!("{}{}", self.base_url, endpoints::format_endpoint(endpoint, id))
    }

    async fn get<T: DeserializeOwned>(&self, url: String) -> Result<T, BackendError> {
        let response = self.client.get(url).send().await.map_err(transport)?;

        parse_body(check_status(response).await?).await
    }

    async fn post<T: DeserializeOwned>(
        &self,
        url: String,
        payload: &impl serde::Serialize,
    ) -> Result<T, BackendError> {
        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(transport)?;

        parse_body(check_status(response).await?).await
    }

    async fn put<T: DeserializeOwned>(
        &self,
        url: String,
        payload: &impl serde::Serialize,
    ) -> Result<T, BackendError> {
        let response = self
            .client
            .put(url)
            .json(payload)
            .send()
            .await
            .map_err(transport)?;

        parse_body(check_status(response).await?).await
    }

    async fn delete(&self, url: String) -> Result<(), BackendError> {
        let response = self.client.delete(url).send().await.map_err(transport)?;

        check_status(response).await?;

        Ok(())
    }
}

fn transport(error: reqwest::Error) -> BackendError {
    BackendError::Transport(error.to_string())
}

async fn parse_body<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, BackendError> {
    response.json().await.map_err(transport)
}

/// Turn a non-success response into a [BackendError::Status], extracting the
/// message from the `{"error": ...}` body when one is present.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| {
            body.get("error")
                .and_then(|message| message.as_str())
                .map(str::to_owned)
        })
        .unwrap_or_else(|| status.to_string());

    Err(BackendError::Status {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl ApiBackend for HttpBackend {
    async fn list_accounts(&self) -> Result<Vec<Account>, BackendError> {
        self.get(self.url(endpoints::ACCOUNTS)).await
    }

    async fn create_account(&self, payload: &NewAccount) -> Result<Account, BackendError> {
        self.post(self.url(endpoints::ACCOUNTS), payload).await
    }

    async fn update_account(
        &self,
        id: AccountId,
        payload: &UpdateAccount,
    ) -> Result<Account, BackendError> {
        self.put(self.item_url(endpoints::ACCOUNT, id), payload).await
    }

    async fn delete_account(&self, id: AccountId) -> Result<(), BackendError> {
        self.delete(self.item_url(endpoints::ACCOUNT, id)).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, BackendError> {
        self.get(self.url(endpoints::CATEGORIES)).await
    }

    async fn create_category(&self, payload: &NewCategory) -> Result<Category, BackendError> {
        self.post(self.url(endpoints::CATEGORIES), payload).await
    }

    async fn update_category(
        &self,
        id: CategoryId,
        payload: &UpdateCategory,
    ) -> Result<Category, BackendError> {
        self.put(self.item_url(endpoints::CATEGORY, id), payload).await
    }

    async fn delete_category(&self, id: CategoryId) -> Result<(), BackendError> {
        self.delete(self.item_url(endpoints::CATEGORY, id)).await
    }

    async fn list_transactions(&self) -> Result<Vec<Transaction>, BackendError> {
        self.get(self.url(endpoints::TRANSACTIONS)).await
    }

    async fn create_transaction(
        &self,
        payload: &NewTransaction,
    ) -> Result<Transaction, BackendError> {
        self.post(self.url(endpoints::TRANSACTIONS), payload).await
    }

    async fn update_transaction(
        &self,
        id: TransactionId,
        payload: &UpdateTransaction,
    ) -> Result<Transaction, BackendError> {
        self.put(self.item_url(endpoints::TRANSACTION, id), payload)
            .await
    }

    async fn delete_transaction(&self, id: TransactionId) -> Result<(), BackendError> {
        self.delete(self.item_url(endpoints::TRANSACTION, id)).await
    }
}
