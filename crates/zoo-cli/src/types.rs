use std::path::PathBuf;

use zoo_cli::pipeline::SkippedLine;

#[derive(Debug)]
pub struct RunResult {
    pub output_path: PathBuf,
    /// False when a dry run suppressed the write.
    pub written: bool,
    pub admitted: usize,
    pub habitats: Vec<HabitatSummary>,
    pub skipped: Vec<SkippedLine>,
}

#[derive(Debug)]
pub struct HabitatSummary {
    pub species: String,
    pub residents: usize,
    pub ids: String,
}
