//! Route registration

use super::handlers;
use crate::domain::Service;
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;

/// Build the REST router with the service injected as an extension
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route("/lots", post(handlers::create_lot).get(handlers::list_lots))
        .route(
            "/lots/{id}",
            get(handlers::get_lot)
                .put(handlers::update_lot)
                .delete(handlers::delete_lot),
        )
        .layer(Extension(service))
}
