//! Movie records and their JSON shape

use serde::{Deserialize, Serialize};

/// Person credited as director of a movie
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Director {
    pub firstname: String,
    pub lastname: String,
}

impl Director {
    pub fn new(firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self {
            firstname: firstname.into(),
            lastname: lastname.into(),
        }
    }
}

/// A movie held by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Store-assigned identifier, unique within the collection
    pub id: String,
    pub isbn: String,
    pub title: String,
    /// Encoded as `null` when absent
    pub director: Option<Director>,
}

/// Caller-supplied fields for create and update
///
/// Every field may be missing on the wire. The `id` is accepted so that
/// clients may echo a full movie back, but the store never uses it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieInput {
    pub id: Option<String>,
    pub isbn: String,
    pub title: String,
    pub director: Option<Director>,
}

impl MovieInput {
    pub fn new(isbn: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: None,
            isbn: isbn.into(),
            title: title.into(),
            director: None,
        }
    }

    pub fn with_director(mut self, director: Director) -> Self {
        self.director = Some(director);
        self
    }

    /// Build the stored record, discarding any id the caller supplied
    pub fn into_movie(self, id: String) -> Movie {
        Movie {
            id,
            isbn: self.isbn,
            title: self.title,
            director: self.director,
        }
    }
}
