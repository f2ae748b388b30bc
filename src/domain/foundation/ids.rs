//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for one run through the quiz.
///
/// Sessions are never persisted; the id only correlates log lines and events
/// emitted by the same wizard instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuizSessionId(Uuid);

impl QuizSessionId {
    /// Creates a new random QuizSessionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for QuizSessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for QuizSessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for QuizSessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_unique() {
        assert_ne!(QuizSessionId::new(), QuizSessionId::new());
    }

    #[test]
    fn display_and_parse_roundtrip() {
        let id = QuizSessionId::new();
        let parsed: QuizSessionId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("not-a-uuid".parse::<QuizSessionId>().is_err());
    }

    #[test]
    fn serializes_transparently() {
        let id = QuizSessionId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
    }
}
