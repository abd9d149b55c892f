//! HTTP handlers and app assembly.

use actix_web::{HttpResponse, Responder, web};

use crate::lock::MaintenanceLock;

/// Response body served for every request.
const BODY: &[u8] = b"ok";

/// Serves every request under a shared hold of the maintenance lock.
///
/// Suspends while the maintenance task holds the lock exclusively, then
/// answers `200` with the fixed body. The guard drops when the handler
/// returns, on every exit path.
pub async fn root(lock: web::Data<MaintenanceLock>) -> impl Responder {
    let _shared = lock.shared().await;

    HttpResponse::Ok().body(BODY)
}

/// Builds the app-assembly closure shared by the server builder and the
/// tests.
///
/// The handler is registered as the default service: any method on any path
/// is served, matching a root handler that catches all unmatched paths.
pub fn configure(lock: MaintenanceLock) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(lock))
            .default_service(web::to(root));
    }
}
