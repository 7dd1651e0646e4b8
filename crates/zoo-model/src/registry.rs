use std::collections::BTreeMap;

use crate::dates::derive_birth_date;
use crate::ids::AnimalId;
use crate::record::{AnimalRecord, ArrivalRecord};

/// Fallback name when the roster is empty.
const UNNAMED: &str = "Unknown";

/// Tracks per-species arrival sequences and round-robin name assignment.
///
/// Counters are keyed by the exact species string, so "Hyena" and "hyena"
/// count separately. The name cursor is shared across all species and wraps
/// over the roster once it is exhausted.
#[derive(Debug, Clone)]
pub struct Registry {
    names: Vec<String>,
    name_cursor: usize,
    sequences: BTreeMap<String, u32>,
}

impl Registry {
    pub fn new(names: Vec<String>) -> Self {
        Self {
            names,
            name_cursor: 0,
            sequences: BTreeMap::new(),
        }
    }

    /// Returns the next 1-based sequence number for a species.
    pub fn next_sequence(&mut self, species: &str) -> u32 {
        let counter = self.sequences.entry(species.to_string()).or_insert(0);
        *counter += 1;
        *counter
    }

    /// Returns the next roster name in file order, cycling once exhausted.
    pub fn assign_name(&mut self) -> String {
        if self.names.is_empty() {
            return UNNAMED.to_string();
        }
        let name = self.names[self.name_cursor % self.names.len()].clone();
        self.name_cursor += 1;
        name
    }

    /// Admits an arrival: derives its birth date and unique ID, assigns a
    /// name, and returns the fully populated resident record.
    pub fn admit(&mut self, arrival: ArrivalRecord) -> AnimalRecord {
        let sequence = self.next_sequence(&arrival.species);
        AnimalRecord {
            id: AnimalId::derive(&arrival.species, sequence),
            name: self.assign_name(),
            birth_date: derive_birth_date(arrival.age, arrival.season),
            species: arrival.species,
            age: arrival.age,
            sex: arrival.sex,
            color: arrival.color,
            weight: arrival.weight,
            origin: arrival.origin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::season::Season;

    fn arrival(species: &str) -> ArrivalRecord {
        ArrivalRecord {
            age: 4,
            sex: "female".to_string(),
            species: species.to_string(),
            season: Season::Spring,
            color: "tan".to_string(),
            weight: 70,
            origin: "somewhere".to_string(),
        }
    }

    #[test]
    fn sequences_are_independent_per_species() {
        let mut registry = Registry::new(vec![]);
        assert_eq!(registry.next_sequence("lion"), 1);
        assert_eq!(registry.next_sequence("lion"), 2);
        assert_eq!(registry.next_sequence("hyena"), 1);
        assert_eq!(registry.next_sequence("lion"), 3);
        assert_eq!(registry.next_sequence("hyena"), 2);
    }

    #[test]
    fn species_keys_are_case_sensitive() {
        let mut registry = Registry::new(vec![]);
        assert_eq!(registry.next_sequence("Hyena"), 1);
        assert_eq!(registry.next_sequence("hyena"), 1);
    }

    #[test]
    fn names_cycle_in_roster_order_across_species() {
        let mut registry = Registry::new(vec!["Ada".to_string(), "Bo".to_string()]);
        assert_eq!(registry.assign_name(), "Ada");
        assert_eq!(registry.assign_name(), "Bo");
        assert_eq!(registry.assign_name(), "Ada");
        assert_eq!(registry.assign_name(), "Bo");
        assert_eq!(registry.assign_name(), "Ada");
    }

    #[test]
    fn empty_roster_yields_unknown() {
        let mut registry = Registry::new(vec![]);
        assert_eq!(registry.assign_name(), "Unknown");
        assert_eq!(registry.assign_name(), "Unknown");
    }

    #[test]
    fn admit_populates_every_field() {
        let mut registry = Registry::new(vec!["Ada".to_string()]);
        let resident = registry.admit(arrival("hyena"));
        assert_eq!(resident.id.as_str(), "HY01");
        assert_eq!(resident.name, "Ada");
        assert_eq!(resident.birth_date.to_string(), "2020-03-15");
        assert_eq!(resident.species, "hyena");
        assert_eq!(resident.origin, "somewhere");

        let second = registry.admit(arrival("hyena"));
        assert_eq!(second.id.as_str(), "HY02");
        assert_eq!(second.name, "Ada");
    }
}
