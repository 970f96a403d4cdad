/*
[INPUT]:  Client configuration, account titles and credentials
[OUTPUT]: Caller-owned registry of accounts with memoized child handles
[POS]:    Registry layer - ergonomic facade over public and private clients
[UPDATE]: When registry lookup semantics or handle kinds change
*/

pub mod account;
pub mod market;

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::auth::{Authenticator, Credentials};
use crate::http::{ClientConfig, PrivateClient, PublicClient, Result, Transport};

pub use account::Account;
pub use market::{Market, Pool};

/// Registry of accounts keyed by title
///
/// Constructed and owned by the application; independent registries in one
/// process share nothing. All accounts reuse the registry's transport.
#[derive(Debug)]
pub struct Yobit {
    config: ClientConfig,
    public: PublicClient,
    accounts: RwLock<HashMap<String, Arc<Account>>>,
}

impl Yobit {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let public = PublicClient::with_config(config.clone())?;
        Ok(Self::from_public(config, public))
    }

    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        let public = PublicClient::with_transport(config.clone(), transport)?;
        Ok(Self::from_public(config, public))
    }

    fn from_public(config: ClientConfig, public: PublicClient) -> Self {
        Self {
            config,
            public,
            accounts: RwLock::new(HashMap::new()),
        }
    }

    /// Market-data client
    pub fn public(&self) -> &PublicClient {
        &self.public
    }

    /// Register an account; an existing title returns the existing account
    /// and ignores `credentials`.
    pub fn add_account(&self, title: &str, credentials: Credentials) -> Arc<Account> {
        get_or_create(&self.accounts, title, || {
            let client = PrivateClient::with_authenticator(
                self.public.clone(),
                self.config.private_path.as_str(),
                Arc::new(Authenticator::new(credentials)),
            );
            Account::new(title, client)
        })
    }

    /// Register an account around an already built authenticator
    pub fn add_account_with_authenticator(
        &self,
        title: &str,
        authenticator: Arc<Authenticator>,
    ) -> Arc<Account> {
        get_or_create(&self.accounts, title, || {
            let client = PrivateClient::with_authenticator(
                self.public.clone(),
                self.config.private_path.as_str(),
                authenticator,
            );
            Account::new(title, client)
        })
    }

    pub fn account(&self, title: &str) -> Option<Arc<Account>> {
        self.accounts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(title)
            .cloned()
    }

    pub fn accounts(&self) -> Vec<Arc<Account>> {
        values(&self.accounts)
    }

    pub fn remove_account(&self, title: &str) -> Option<Arc<Account>> {
        self.accounts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(title)
    }
}

/// Get-or-create under a read-then-write lock
fn get_or_create<T>(
    map: &RwLock<HashMap<String, Arc<T>>>,
    key: &str,
    create: impl FnOnce() -> T,
) -> Arc<T> {
    if let Some(existing) = map
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(key)
    {
        return Arc::clone(existing);
    }

    let mut guard = map.write().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(
        guard
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(create())),
    )
}

fn values<T>(map: &RwLock<HashMap<String, Arc<T>>>) -> Vec<Arc<T>> {
    map.read()
        .unwrap_or_else(PoisonError::into_inner)
        .values()
        .cloned()
        .collect()
}
