//! Player and the id generators used to name them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque player identifier, unique within a round.
pub type PlayerId = String;

/// Hands out fresh player ids. Round setup takes one so tests can pin ids down.
pub trait IdGenerator {
    fn next_id(&mut self) -> PlayerId;
}

/// Random v4 uuids, rendered as strings.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> PlayerId {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic ids: `{prefix}-1`, `{prefix}-2`, ...
#[derive(Clone, Debug)]
pub struct SequentialIds {
    prefix: String,
    next: u32,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> PlayerId {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// A player in a round.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Trimmed, non-empty display name (checked at setup, not here).
    pub name: String,
}

impl Player {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Create a player with an id taken from `ids`.
    pub fn generate(ids: &mut dyn IdGenerator, name: impl Into<String>) -> Self {
        Self::new(ids.next_id(), name)
    }
}
