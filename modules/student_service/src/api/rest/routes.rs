//! Route registration for the student registry REST API

use crate::domain::Service;
use super::handlers;
use axum::{routing::get, Extension, Router};
use std::sync::Arc;

/// Build the router with the four read-only endpoints
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route(
            "/students/group/{group_name}",
            get(handlers::students_by_group),
        )
        .route("/students/rating-desc", get(handlers::students_by_rating))
        .route("/students/best-rating", get(handlers::best_per_group))
        .route(
            "/students/less-than-avg-rating",
            get(handlers::below_average_per_group),
        )
        .layer(Extension(service))
}
