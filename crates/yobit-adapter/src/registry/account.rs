/*
[INPUT]:  Account title and an authenticated private client
[OUTPUT]: Memoized market and pool handles sharing one nonce counter
[POS]:    Registry layer - per-credential account handle
[UPDATE]: When adding child handle kinds or lookup semantics
*/

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::http::PrivateClient;
use crate::registry::market::{Market, Pool};
use crate::registry::{get_or_create, values};

/// One credential set plus its lazily created market and pool handles
///
/// Every handle created here signs through the same client, so requests made
/// via different markets of one account still draw from a single nonce counter.
#[derive(Debug)]
pub struct Account {
    title: String,
    client: PrivateClient,
    markets: RwLock<HashMap<String, Arc<Market>>>,
    pools: RwLock<HashMap<String, Arc<Pool>>>,
}

impl Account {
    pub(crate) fn new(title: impl Into<String>, client: PrivateClient) -> Self {
        Self {
            title: title.into(),
            client,
            markets: RwLock::new(HashMap::new()),
            pools: RwLock::new(HashMap::new()),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Authenticated client for calls not covered by the handles
    pub fn client(&self) -> &PrivateClient {
        &self.client
    }

    /// Handle for `pair`, created on first use
    pub fn market(&self, pair: &str) -> Arc<Market> {
        get_or_create(&self.markets, pair, || Market::new(self.client.clone(), pair))
    }

    pub fn markets(&self) -> Vec<Arc<Market>> {
        values(&self.markets)
    }

    pub fn remove_market(&self, pair: &str) -> Option<Arc<Market>> {
        self.markets
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(pair)
    }

    /// Handle for `pool`, created on first use
    pub fn pool(&self, pool: &str) -> Arc<Pool> {
        get_or_create(&self.pools, pool, || Pool::new(self.client.clone(), pool))
    }

    pub fn pools(&self) -> Vec<Arc<Pool>> {
        values(&self.pools)
    }

    pub fn remove_pool(&self, pool: &str) -> Option<Arc<Pool>> {
        self.pools
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(pool)
    }
}
