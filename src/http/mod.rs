//! HTTP transport for the movie store
//!
//! ## Routes
//!
//! - `GET /movies` lists every movie in collection order
//! - `GET /movies/:id` fetches one movie, 404 when unknown
//! - `POST /movies` creates a movie from the JSON body
//! - `PUT /movies/:id` replaces a movie, 404 when unknown
//! - `DELETE /movies/:id` removes a movie and returns the rest
//! - `GET /health` reports liveness and the collection size
//!
//! Bodies are decoded as JSON whatever the content type says. Malformed
//! bodies answer 400 and unknown paths 404, both with `{ "error": ... }`.

pub mod error;
pub mod movies;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::store::MovieStore;

pub use error::ApiError;

/// Build the axum `Router` serving the given store
pub fn router(store: Arc<MovieStore>) -> Router {
    Router::new()
        .route("/health", get(movies::health))
        .route("/movies", get(movies::list).post(movies::create))
        .route(
            "/movies/:id",
            get(movies::get).put(movies::update).delete(movies::delete),
        )
        .fallback(movies::unknown_route)
        .with_state(store)
}
