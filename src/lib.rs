//! In-memory movie collection served over HTTP with JSON payloads.
//!
//! `store` owns the collection and its CRUD operations, `http` maps routes
//! onto them and `server` binds the listener.

pub mod config;
pub mod error;
pub mod http;
pub mod model;
pub mod server;
pub mod store;

pub use error::StoreError;
pub use model::{Director, Movie, MovieInput};
pub use server::Server;
pub use store::{MovieStore, StoreOptions, UpdateOrder};
