//! HTTP server setup.

use actix_web::{App, HttpServer, dev::Server, middleware::Logger};

use crate::api;
use crate::lock::MaintenanceLock;

/// Creates and binds the demo HTTP server.
///
/// Every worker serves the same match-all handler under a shared hold of
/// `lock`. Binding errors are returned to the caller, which decides
/// fatality.
pub fn main_server(
    lock: MaintenanceLock,
    address: &str,
    port: u16,
) -> Result<Server, std::io::Error> {
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(api::configure(lock.clone()))
    })
    .bind((address, port))?
    .run())
}
