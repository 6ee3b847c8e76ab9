//! Route-derived display filter.

use super::TodoQuery;
use std::fmt;

const ROUTE_PREFIX: &str = "#/";

/// Display mode derived from the current route.
///
/// `""` and `"#/"` select every todo, `"#/active"` selects incomplete todos
/// and `"#/completed"` selects completed todos. Any other route, including a
/// bare `"active"` or `"completed"`, is kept as [`Filter::Unrecognized`]
/// holding the route with any `#/` prefix removed; it shows every todo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    /// All todos.
    #[default]
    All,
    /// Incomplete todos only.
    Active,
    /// Completed todos only.
    Completed,
    /// A route outside the known set, passed through verbatim.
    Unrecognized(String),
}

impl Filter {
    /// Maps a displayed route to a filter.
    #[must_use]
    pub fn from_route(route: &str) -> Self {
        if route.is_empty() {
            return Self::All;
        }
        match route.strip_prefix(ROUTE_PREFIX) {
            Some("") => Self::All,
            Some("active") => Self::Active,
            Some("completed") => Self::Completed,
            Some(tail) => Self::Unrecognized(tail.to_owned()),
            None => Self::Unrecognized(route.to_owned()),
        }
    }

    /// Returns the value handed to the view for link highlighting.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Returns the store query selecting the todos this filter shows.
    #[must_use]
    pub const fn query(&self) -> TodoQuery {
        match self {
            Self::Active => TodoQuery::Completed(false),
            Self::Completed => TodoQuery::Completed(true),
            Self::All | Self::Unrecognized(_) => TodoQuery::All,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
