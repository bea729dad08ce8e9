//! Query parameter types

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// An ordered set of query parameters, attached verbatim to a request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams {
    items: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty query parameter collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Adds a query parameter to the collection.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.items.push((key.into(), value.into()));
    }

    /// Adds a parameter and returns the collection.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add(key, value);
        self
    }

    /// Returns all parameters in insertion order.
    #[must_use]
    pub fn all(&self) -> &[(String, String)] {
        &self.items
    }

    /// Serializes the parameters as an `application/x-www-form-urlencoded`
    /// query string, without the leading `?`.
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter cannot be encoded.
    pub fn to_query_string(&self) -> DomainResult<String> {
        serde_urlencoded::to_string(&self.items)
            .map_err(|e| DomainError::InvalidQuery(e.to_string()))
    }

    /// Returns the number of parameters.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no parameters.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
