//! Application state shared across handlers.

use std::sync::Arc;

use crate::auth::service::AccountService;
use crate::database::queries::PgUserStore;

/// The account service over the concrete Postgres store.
pub type AccountServiceImpl = AccountService<PgUserStore>;

/// State handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Shared account service.
    pub accounts: Arc<AccountServiceImpl>,
}

impl AppState {
    pub fn new(accounts: AccountServiceImpl) -> Self {
        Self {
            accounts: Arc::new(accounts),
        }
    }
}
