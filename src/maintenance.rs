//! Periodic exclusive locker.
//!
//! Simulates a recurring maintenance operation that needs exclusive access:
//! each cycle the task sits idle, then holds the lock exclusively for a fixed
//! window. Requests arriving inside the window wait it out.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time;
use tracing::debug;

use crate::lock::MaintenanceLock;

/// Idle stretch between exclusive windows.
pub const IDLE_PERIOD: Duration = Duration::from_secs(10);

/// How long the lock is held exclusively per cycle.
pub const HOLD_PERIOD: Duration = Duration::from_secs(2);

/// Spawns the maintenance cycle with the standard periods.
///
/// The task runs for the life of the process. The handle is returned for
/// callers that want to hold on to it; there is no stop signal.
pub fn spawn_cycle(lock: MaintenanceLock) -> JoinHandle<()> {
    spawn_cycle_with_periods(lock, IDLE_PERIOD, HOLD_PERIOD)
}

/// Spawns the maintenance cycle with explicit idle and hold periods.
pub fn spawn_cycle_with_periods(
    lock: MaintenanceLock,
    idle: Duration,
    hold: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            time::sleep(idle).await;
            let _exclusive = lock.exclusive().await;
            debug!("exclusive window open");
            time::sleep(hold).await;
            debug!("exclusive window closed");
        }
    })
}
