use std::fmt;

use serde::{Deserialize, Serialize};

/// A unique resident identifier derived from species and arrival sequence.
///
/// The first two characters of the species are upper-cased; a species shorter
/// than two characters is padded with `'X'`. The sequence number is rendered
/// with at least two digits, so `("hyena", 1)` yields `HY01`. Sequence numbers
/// of 100 and above simply widen the field rather than truncating.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AnimalId(String);

impl AnimalId {
    pub fn derive(species: &str, sequence: u32) -> Self {
        let mut id = String::new();
        let mut chars = species.chars();
        for _ in 0..2 {
            match chars.next() {
                Some(c) => id.extend(c.to_uppercase()),
                None => id.push('X'),
            }
        }
        id.push_str(&format!("{sequence:02}"));
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnimalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
