//! Entity identifiers.
//!
//! Each panel allocates ids from its own [`IdGen`]. The counter is
//! independent of list length, so ids stay unique and monotonic even while
//! scheduled completions are still in flight.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(u64);

impl MessageId {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(u64);

impl ImageId {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(u64);

impl FileId {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic id counter. First allocation yields 1.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdGen(u64);

impl IdGen {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub fn allocated(&self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::IdGen;

    #[test]
    fn idgen_is_monotonic_from_one() {
        let mut r#gen = IdGen::new();
        assert_eq!(r#gen.next(), 1);
        assert_eq!(r#gen.next(), 2);
        assert_eq!(r#gen.next(), 3);
        assert_eq!(r#gen.allocated(), 3);
    }
}
