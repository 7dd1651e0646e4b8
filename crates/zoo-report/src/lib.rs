//! Zoo population report generation.
//!
//! Groups admitted residents into habitat buckets (one per species, in
//! lexicographic order) and renders the flat-text population report.

mod population;

pub use population::{group_by_habitat, habitat_header, render_population, write_population};
