//! Scenario loading and result export. Scenario files are YAML or JSON,
//! picked by file extension; a missing file or malformed document is an
//! error, never a silent fallback.

use std::fs;
use std::path::Path;

use tracing::info;

pub mod export;
pub mod spec;

pub use export::{write_histogram_csv, write_trait_means_csv};
pub use spec::{demo_scenario, GeneratorSpec, RiderSpec, ScenarioSpec, SegmentSpec};

use crate::error::SimError;

/// Load a scenario file. `.yaml`/`.yml` parse as YAML, `.json` as JSON.
pub fn load_scenario(path: &Path) -> Result<ScenarioSpec, SimError> {
    let raw = fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let spec = match extension.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&raw)?,
        "json" => serde_json::from_str(&raw)?,
        other => return Err(SimError::UnsupportedFormat(other.to_string())),
    };
    info!(path = %path.display(), "loaded scenario");
    Ok(spec)
}
