pub mod dates;
pub mod error;
pub mod ids;
pub mod record;
pub mod registry;
pub mod season;

pub use dates::{ARRIVAL_DATE, ARRIVAL_YEAR, derive_birth_date};
pub use error::{ModelError, Result};
pub use ids::AnimalId;
pub use record::{AnimalRecord, ArrivalRecord};
pub use registry::Registry;
pub use season::Season;
