//! Navigation routes between the search and detail screens
//!
//! Routes use the same path shapes as the web client they replace:
//! `/` for search and `/food/{fdcId}` for a single food.

use crate::models::FdcId;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while parsing a route path
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    /// Path does not match any known route
    #[error("Unknown route: {0}")]
    UnknownPath(String),

    /// The food identifier segment is missing or malformed
    #[error("Invalid food id: '{0}'")]
    InvalidId(String),
}

/// A screen the application can navigate to
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// Search page
    #[default]
    Search,
    /// Detail page for one food
    Detail(FdcId),
}

impl Route {
    /// Route for a food's detail page
    #[must_use]
    pub const fn food(id: FdcId) -> Self {
        Self::Detail(id)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Search => f.write_str("/"),
            Self::Detail(id) => write!(f, "/food/{id}"),
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = s.trim();
        if path.is_empty() || path == "/" {
            return Ok(Self::Search);
        }

        let trimmed = path.trim_end_matches('/');
        match trimmed.strip_prefix("/food/") {
            Some(id) => id.parse().map(Self::Detail),
            None if trimmed == "/food" => Err(RouteError::InvalidId(String::new())),
            None => Err(RouteError::UnknownPath(s.to_string())),
        }
    }
}
