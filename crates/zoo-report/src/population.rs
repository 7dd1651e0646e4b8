//! Habitat grouping and population report rendering.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use zoo_model::{ARRIVAL_DATE, AnimalRecord};

/// Groups residents into habitat buckets keyed by the exact species string.
///
/// `BTreeMap` iteration yields blocks in ascending lexicographic species
/// order regardless of arrival order; within a bucket, arrival order is
/// preserved.
pub fn group_by_habitat(records: &[AnimalRecord]) -> BTreeMap<&str, Vec<&AnimalRecord>> {
    let mut habitats: BTreeMap<&str, Vec<&AnimalRecord>> = BTreeMap::new();
    for record in records {
        habitats
            .entry(record.species.as_str())
            .or_default()
            .push(record);
    }
    habitats
}

/// Habitat block header. Only the first character is upper-cased; the rest of
/// the species string is kept as-is.
pub fn habitat_header(species: &str) -> String {
    let mut chars = species.chars();
    let capitalized: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    format!("{capitalized} Habitat:")
}

fn resident_line(record: &AnimalRecord) -> String {
    format!(
        "{}; {}; birth date {}; {} color; {}; {} pounds; from {}; arrived {}",
        record.id,
        record.name,
        record.birth_date,
        record.color,
        record.sex,
        record.weight,
        record.origin,
        ARRIVAL_DATE
    )
}

/// Renders the full population report: one block per habitat, each block
/// followed by a blank line.
pub fn render_population(records: &[AnimalRecord]) -> String {
    let mut out = String::new();
    for (species, residents) in group_by_habitat(records) {
        out.push_str(&habitat_header(species));
        out.push('\n');
        for resident in residents {
            out.push_str(&resident_line(resident));
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

/// Renders and writes the report, overwriting any previous run's output.
pub fn write_population(path: &Path, records: &[AnimalRecord]) -> Result<()> {
    fs::write(path, render_population(records))
        .with_context(|| format!("write population report {}", path.display()))
}
