use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::AnimalId;
use crate::season::Season;

/// One arrival line after parsing, before derivation and naming.
///
/// Species is an open string: unrecognized values are preserved verbatim and
/// flow through grouping unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrivalRecord {
    pub age: u32,
    pub sex: String,
    pub species: String,
    pub season: Season,
    pub color: String,
    /// Weight in pounds.
    pub weight: u32,
    pub origin: String,
}

/// A fully admitted zoo resident.
///
/// Constructed by [`crate::Registry::admit`], so every field is populated:
/// there is no partially derived state to observe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalRecord {
    pub id: AnimalId,
    pub name: String,
    pub species: String,
    pub age: u32,
    pub sex: String,
    pub color: String,
    /// Weight in pounds.
    pub weight: u32,
    pub origin: String,
    pub birth_date: NaiveDate,
}
