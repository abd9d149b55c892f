//! Entry point for the contention demo server.
//!
//! Spawns the periodic exclusive locker and serves HTTP on a fixed loopback
//! address. There is no configuration surface: no flags, no config files.

use anyhow::Context;
use tracing::{error, info};

use contention_demo::{MaintenanceLock, maintenance, startup};

const BIND_ADDRESS: &str = "127.0.0.1";
const BIND_PORT: u16 = 8989;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    startup::init_logging()?;

    let lock = MaintenanceLock::new();

    // Holds the lock exclusively for 2s out of every 12s cycle, forever.
    let _maintenance = maintenance::spawn_cycle(lock.clone());

    info!(
        "starting contention demo server on {}:{}",
        BIND_ADDRESS, BIND_PORT
    );

    let server = match startup::main_server(lock, BIND_ADDRESS, BIND_PORT) {
        Ok(server) => server,
        Err(e) => {
            error!("listen error: {}", e);
            return Err(e)
                .with_context(|| format!("failed to bind {}:{}", BIND_ADDRESS, BIND_PORT));
        }
    };

    if let Err(e) = server.await {
        error!("server error: {}", e);
        return Err(e).context("server terminated with error");
    }

    Ok(())
}
