use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::Uri;
use serde_json::{Value, json};
use tracing::info;

use super::error::ApiError;
use crate::model::{Movie, MovieInput};
use crate::store::MovieStore;

type Store = State<Arc<MovieStore>>;

/// Decode a movie body regardless of the request's content type
fn decode_input(body: &Bytes) -> Result<MovieInput, ApiError> {
    Ok(serde_json::from_slice(body)?)
}

/// `GET /movies`
pub async fn list(State(store): Store) -> Result<Json<Vec<Movie>>, ApiError> {
    let movies = store.list()?;
    info!("Listing {} movies", movies.len());
    Ok(Json(movies))
}

/// `GET /movies/{id}`
pub async fn get(State(store): Store, Path(id): Path<String>) -> Result<Json<Movie>, ApiError> {
    info!("Fetching movie {}", id);
    Ok(Json(store.get(&id)?))
}

/// `POST /movies`
pub async fn create(
    State(store): Store,
    body: Bytes,
) -> Result<Json<Movie>, ApiError> {
    let candidate = decode_input(&body)?;
    let movie = store.create(candidate)?;
    info!("Created movie {} ({})", movie.id, movie.title);
    Ok(Json(movie))
}

/// `PUT /movies/{id}`
pub async fn update(
    State(store): Store,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Movie>, ApiError> {
    let replacement = decode_input(&body)?;
    let movie = store.update(&id, replacement)?;
    info!("Updated movie {}", movie.id);
    Ok(Json(movie))
}

/// `DELETE /movies/{id}`, answering with the remaining collection
pub async fn delete(
    State(store): Store,
    Path(id): Path<String>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    info!("Deleting movie {}", id);
    Ok(Json(store.delete(&id)?))
}

/// `GET /health`
pub async fn health(State(store): Store) -> Result<Json<Value>, ApiError> {
    let count = store.len()?;
    Ok(Json(json!({ "ok": true, "movies": count })))
}

/// Any path outside the route table
pub async fn unknown_route(uri: Uri) -> ApiError {
    ApiError::UnknownRoute(uri.path().to_string())
}
