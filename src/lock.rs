//! Process-wide reader-writer lock shared by the maintenance task and the
//! HTTP handlers.

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Cloneable handle to the single reader-writer lock every component
/// contends on.
///
/// The lock guards no data; the contention pattern itself is what the demo
/// exhibits. Constructed once in `main` and passed by shared ownership to the
/// maintenance task and the request handlers.
#[derive(Clone, Default)]
pub struct MaintenanceLock {
    inner: Arc<RwLock<()>>,
}

impl MaintenanceLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the lock in shared mode.
    ///
    /// Suspends while an exclusive holder is active. Any number of shared
    /// holders may be active at once.
    pub async fn shared(&self) -> RwLockReadGuard<'_, ()> {
        self.inner.read().await
    }

    /// Acquires the lock in exclusive mode.
    ///
    /// Suspends until no shared or exclusive holder remains.
    pub async fn exclusive(&self) -> RwLockWriteGuard<'_, ()> {
        self.inner.write().await
    }
}
