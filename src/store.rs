use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::model::{Director, Movie, MovieInput};

/// Number of distinct ids the generator draws from (`0..DEFAULT_ID_SPACE`)
pub const DEFAULT_ID_SPACE: u32 = 1_000_000;

/// Where an updated movie lands in the collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateOrder {
    /// Remove the old record and append the replacement at the tail
    #[default]
    MoveToEnd,
    /// Overwrite the record at its current position
    InPlace,
}

/// Tunables for a `MovieStore`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    pub update_order: UpdateOrder,
    pub id_space: u32,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            update_order: UpdateOrder::default(),
            id_space: DEFAULT_ID_SPACE,
        }
    }
}

struct Collection {
    movies: Vec<Movie>,
    rng: StdRng,
}

impl Collection {
    /// Index of the first movie with this id
    fn position(&self, id: &str) -> Option<usize> {
        self.movies.iter().position(|movie| movie.id == id)
    }

    /// Draw random ids until one is not already in the collection
    fn next_id(&mut self, space: u32) -> Result<String> {
        let taken: HashSet<u32> = self
            .movies
            .iter()
            .filter_map(|movie| {
                movie
                    .id
                    .parse::<u32>()
                    .ok()
                    .filter(|n| *n < space && n.to_string() == movie.id)
            })
            .collect();
        if taken.len() >= space as usize {
            return Err(StoreError::IdSpaceExhausted(space));
        }

        loop {
            let candidate = self.rng.random_range(0..space).to_string();
            if self.position(&candidate).is_none() {
                return Ok(candidate);
            }
            debug!("Generated id {} already taken, drawing again", candidate);
        }
    }
}

/// In-memory movie collection
///
/// Order is insertion order. Reads share the lock, create/update/delete take
/// it exclusively, and every operation hands back owned copies.
pub struct MovieStore {
    inner: RwLock<Collection>,
    options: StoreOptions,
}

impl MovieStore {
    /// Create a new empty store with default options
    pub fn new() -> Self {
        Self::with_options(StoreOptions::default())
    }

    /// Create a new empty store
    pub fn with_options(options: StoreOptions) -> Self {
        Self::with_movies(options, Vec::new())
    }

    /// Create a store holding the given movies, in order
    pub fn with_movies(options: StoreOptions, movies: Vec<Movie>) -> Self {
        Self::from_parts(options, movies, StdRng::from_os_rng())
    }

    /// Create an empty store whose id sequence is reproducible
    pub fn with_rng_seed(options: StoreOptions, seed: u64) -> Self {
        Self::from_parts(options, Vec::new(), StdRng::seed_from_u64(seed))
    }

    fn from_parts(options: StoreOptions, movies: Vec<Movie>, rng: StdRng) -> Self {
        Self {
            inner: RwLock::new(Collection { movies, rng }),
            options,
        }
    }

    /// The two records a fresh server starts with
    pub fn sample_movies() -> Vec<Movie> {
        vec![
            MovieInput::new("123456", "Movie One")
                .with_director(Director::new("John", "Doe"))
                .into_movie("1".to_string()),
            MovieInput::new("123457", "Movie Two")
                .with_director(Director::new("Steve", "Smith"))
                .into_movie("2".to_string()),
        ]
    }

    pub fn options(&self) -> StoreOptions {
        self.options
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Collection>> {
        self.inner.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Collection>> {
        self.inner.write().map_err(|_| StoreError::LockPoisoned)
    }

    /// Number of movies currently stored
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.movies.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// All movies in collection order
    pub fn list(&self) -> Result<Vec<Movie>> {
        Ok(self.read()?.movies.clone())
    }

    /// First movie whose id matches
    pub fn get(&self, id: &str) -> Result<Movie> {
        let collection = self.read()?;
        collection
            .movies
            .iter()
            .find(|movie| movie.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Assign a fresh id to the candidate and append it
    pub fn create(&self, candidate: MovieInput) -> Result<Movie> {
        let mut collection = self.write()?;
        let id = collection.next_id(self.options.id_space)?;
        let movie = candidate.into_movie(id);
        collection.movies.push(movie.clone());
        debug!("Created movie {}", movie.id);
        Ok(movie)
    }

    /// Replace every field except the id of an existing movie
    pub fn update(&self, id: &str, replacement: MovieInput) -> Result<Movie> {
        let mut collection = self.write()?;
        let index = collection
            .position(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let movie = replacement.into_movie(id.to_string());

        match self.options.update_order {
            UpdateOrder::MoveToEnd => {
                collection.movies.remove(index);
                collection.movies.push(movie.clone());
            }
            UpdateOrder::InPlace => {
                collection.movies[index] = movie.clone();
            }
        }
        debug!("Updated movie {} ({:?})", id, self.options.update_order);
        Ok(movie)
    }

    /// Remove the first movie with this id, if any, and return what is left
    pub fn delete(&self, id: &str) -> Result<Vec<Movie>> {
        let mut collection = self.write()?;
        match collection.position(id) {
            Some(index) => {
                collection.movies.remove(index);
                debug!("Deleted movie {}", id);
            }
            None => debug!("Delete of unknown movie {} ignored", id),
        }
        Ok(collection.movies.clone())
    }
}

impl Default for MovieStore {
    fn default() -> Self {
        Self::new()
    }
}
