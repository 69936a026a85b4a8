//! The client-side view of the system: an HTTP backend, built-in default
//! data and an in-memory store that degrades to local-only mutation when the
//! server is unreachable.

mod backend;
mod seed;
mod store;

pub use backend::{ApiBackend, BackendError, HttpBackend};
pub use seed::{default_accounts, default_categories};
pub use store::{Collection, DataStore, StorePhase};
