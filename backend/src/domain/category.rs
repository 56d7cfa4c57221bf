//! Question categories.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Storage-assigned category identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(i32);

impl CategoryId {
    /// Wrap a raw identifier.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// The raw identifier.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A labelled grouping of questions, for example "Science".
///
/// Categories are seeded alongside the database and read-only to the
/// service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub kind: String,
}

impl Category {
    pub fn new(id: CategoryId, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

/// Mapping from category id to display name, ordered by id.
///
/// Serialises as a JSON object keyed by the stringified id:
///
/// ```
/// use trivia::domain::{Category, CategoryId, CategoryMap};
///
/// let map = CategoryMap::from_categories([
///     Category::new(CategoryId::new(2), "Art"),
///     Category::new(CategoryId::new(1), "Science"),
/// ]);
/// let json = serde_json::to_value(&map).expect("serialise");
/// assert_eq!(json, serde_json::json!({ "1": "Science", "2": "Art" }));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryMap(BTreeMap<CategoryId, String>);

impl CategoryMap {
    /// Collect categories into a map. Later duplicates replace earlier ones.
    pub fn from_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        Self(
            categories
                .into_iter()
                .map(|category| (category.id, category.kind))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Display name for an id, if the category exists.
    pub fn get(&self, id: CategoryId) -> Option<&str> {
        self.0.get(&id).map(String::as_str)
    }
}
