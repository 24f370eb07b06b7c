//! Story domain model.
//!
//! This module defines the core [`Story`] type representing a single search
//! result record from the remote search API, along with [`StoryId`], its stable
//! identifier. Stories are immutable once received: dismissing a story discards
//! the whole record, individual fields are never mutated.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Stable identifier of a [`Story`].
///
/// The search API is inconsistent about the wire type of `objectID`: depending
/// on the endpoint snapshot it arrives as a JSON string or a JSON number. Both
/// forms are normalized to their string representation at the deserialization
/// boundary, so `StoryId("1")` deserialized from `1` and from `"1"` compare
/// equal.
///
/// # Examples
///
/// ```
/// use hnscout::domain::StoryId;
///
/// let id = StoryId::from("8863");
/// assert_eq!(id.as_str(), "8863");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StoryId(String);

impl StoryId {
    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StoryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for StoryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u64> for StoryId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for StoryId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IdVisitor;

        impl serde::de::Visitor<'_> for IdVisitor {
            type Value = StoryId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or integer story identifier")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> std::result::Result<StoryId, E> {
                Ok(StoryId(v.to_string()))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> std::result::Result<StoryId, E> {
                Ok(StoryId(v.to_string()))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> std::result::Result<StoryId, E> {
                Ok(StoryId(v.to_string()))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// A single search result record.
///
/// Field names follow the wire format of the search API, so the struct
/// deserializes directly from a payload entry without renaming attributes.
///
/// # Fields
///
/// - `object_id`: Stable identifier, unique within a result set
/// - `title`: Story headline
/// - `url`: Link target of the story
/// - `author`: Submitter's username
/// - `num_comments`: Non-negative comment count
/// - `points`: Score, may be negative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    #[serde(rename = "objectID")]
    pub object_id: StoryId,
    pub title: String,
    pub url: String,
    pub author: String,
    pub num_comments: u32,
    pub points: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn story_deserializes_with_string_id() {
        let json = r#"{
            "objectID": "8863",
            "title": "My YC app",
            "url": "http://example.com",
            "author": "dhouston",
            "num_comments": 71,
            "points": 111
        }"#;

        let story: Story = serde_json::from_str(json).unwrap();
        assert_eq!(story.object_id, StoryId::from("8863"));
        assert_eq!(story.title, "My YC app");
        assert_eq!(story.num_comments, 71);
    }

    #[test]
    fn story_deserializes_with_numeric_id() {
        let json = r#"{
            "objectID": 0,
            "title": "React",
            "url": "https://reactjs.org/",
            "author": "Jordan Walke",
            "num_comments": 3,
            "points": 4
        }"#;

        let story: Story = serde_json::from_str(json).unwrap();
        assert_eq!(story.object_id, StoryId::from("0"));
    }

    #[test]
    fn numeric_and_string_ids_compare_equal() {
        let a: StoryId = serde_json::from_str("42").unwrap();
        let b: StoryId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn story_with_missing_field_is_rejected() {
        let json = r#"{"objectID": "1", "title": "no author"}"#;
        assert!(serde_json::from_str::<Story>(json).is_err());
    }
}
