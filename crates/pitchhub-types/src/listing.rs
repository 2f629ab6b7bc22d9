//! List responses.

use serde::{Deserialize, Deserializer, Serialize};

/// A list of items returned by a collection endpoint.
///
/// Collection endpoints answer either with a bare JSON array or with an
/// object wrapping the array under `items`, `data` or `results`, optionally
/// alongside a `nextCursor`. Both shapes deserialize into a `Listing`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Cursor for the next page, if the server paginates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_cursor: None,
        }
    }
}

impl<T> Listing<T> {
    /// Number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if the server reported a further page.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.next_cursor.is_some()
    }
}

impl<T> IntoIterator for Listing<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Listing<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Shape<I> {
            Bare(Vec<I>),
            Wrapped {
                #[serde(alias = "data", alias = "results")]
                items: Vec<I>,
                #[serde(default, rename = "nextCursor", alias = "next_cursor")]
                next_cursor: Option<String>,
            },
        }

        Ok(match Shape::deserialize(deserializer)? {
            Shape::Bare(items) => Self {
                items,
                next_cursor: None,
            },
            Shape::Wrapped { items, next_cursor } => Self { items, next_cursor },
        })
    }
}
