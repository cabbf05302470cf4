use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

/// One async mutex per product id.
///
/// Order, ship and restock hold the guard across fetch, validate and persist
/// so two requests against the same product cannot interleave. Requests
/// against different products never wait on each other.
#[derive(Default)]
pub struct ProductLocks {
    locks: Mutex<HashMap<i64, Arc<Mutex<()>>>>,
}

impl ProductLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, product_id: i64) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            // Entries only referenced by the map are idle.
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            locks.entry(product_id).or_default().clone()
        };
        lock.lock_owned().await
    }

    #[cfg(test)]
    async fn tracked(&self) -> usize {
        self.locks.lock().await.len()
    }
}
