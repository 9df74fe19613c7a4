//! Unique identifier types for the pass generator
//!
//! This module contains the UUID-based [`PassId`] and the [`IdSource`] seam that
//! hands out fresh identifiers to builders and the prototype cloner.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PassId(pub Uuid);

impl PassId {
    /// Create a new random pass ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PassId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl Serialize for PassId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.hyphenated().to_string())
    }
}

impl<'de> Deserialize<'de> for PassId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let uuid = Uuid::parse_str(&s).map_err(serde::de::Error::custom)?;
        Ok(PassId(uuid))
    }
}

/// Source of fresh pass identifiers
///
/// Every call should return an identifier that has not been handed out before
/// by the same source. Cloning tolerates a source that repeats itself by
/// falling back to a random id after a few draws.
pub trait IdSource: fmt::Debug {
    /// Produce the next identifier
    fn next_id(&mut self) -> PassId;
}

/// Identifier source backed by the operating system RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdSource;

impl IdSource for RandomIdSource {
    fn next_id(&mut self) -> PassId {
        PassId::new()
    }
}

/// Identifier source that yields a reproducible sequence for a given seed
pub struct SeededIdSource {
    seed: u64,
    rng: StdRng,
}

impl fmt::Debug for SeededIdSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeededIdSource").field("seed", &self.seed).finish()
    }
}

impl SeededIdSource {
    /// Create a seeded source
    pub fn new(seed: u64) -> Self {
        Self { seed, rng: StdRng::seed_from_u64(seed) }
    }
}

impl IdSource for SeededIdSource {
    fn next_id(&mut self) -> PassId {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);
        PassId(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }
}

/// Pick the identifier source for an optional seed
pub fn id_source_for(seed: Option<u64>) -> Box<dyn IdSource> {
    match seed {
        Some(seed) => Box::new(SeededIdSource::new(seed)),
        None => Box::new(RandomIdSource),
    }
}
