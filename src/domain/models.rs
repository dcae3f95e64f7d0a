use crate::domain::constants::{DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE_SET};
use crate::domain::coordinate::{LibraryCoordinate, TargetId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

fn default_source_set() -> String {
    DEFAULT_SOURCE_SET.to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default = "default_source_set")]
    pub source_set: String,
    #[serde(default)]
    pub targets: Vec<String>,
    #[serde(default)]
    pub repositories: Vec<String>,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,
    /// `group:artifact` entries left out of the intersection.
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Drop libraries that declare no concrete target instead of letting
    /// them empty the intersection.
    #[serde(default)]
    pub ignore_targetless: bool,
    #[serde(default)]
    pub native: NativeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project: None,
            source_set: default_source_set(),
            targets: Vec::new(),
            repositories: Vec::new(),
            output_dir: default_output_dir(),
            cache_dir: None,
            exclude: Vec::new(),
            ignore_targetless: false,
            native: NativeConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct NativeConfig {
    #[serde(default)]
    pub include_deprecated: bool,
    /// Extra or overriding catalog entries: konan name to deprecated flag.
    #[serde(default)]
    pub targets: BTreeMap<String, bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    ProjectDependency,
    FlatDirArtifact,
}

impl SkipReason {
    pub fn describe(self) -> &'static str {
        match self {
            SkipReason::ProjectDependency => "ignoring because project dependency",
            SkipReason::FlatDirArtifact => {
                "ignoring because flat-dir repository artifact has no metadata"
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct TraceEntry {
    pub depth: usize,
    pub node: String,
    pub skipped: Option<SkipReason>,
}

#[derive(Debug, Default)]
pub struct WalkResult {
    pub coordinates: BTreeSet<LibraryCoordinate>,
    pub warnings: Vec<String>,
    pub trace: Vec<TraceEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityReport {
    pub current_targets: BTreeSet<TargetId>,
    pub possible_targets: BTreeSet<TargetId>,
    pub missing_targets: BTreeSet<TargetId>,
    pub unavailable_targets: BTreeSet<TargetId>,
    pub unsupported_by_target: BTreeMap<TargetId, BTreeSet<LibraryCoordinate>>,
    pub supported_by_dependency: BTreeMap<LibraryCoordinate, BTreeSet<TargetId>>,
}

#[derive(Serialize)]
pub struct CheckSummary {
    pub project: String,
    pub source_set: String,
    pub report_path: String,
    pub dependency_count: usize,
    pub current_targets: BTreeSet<TargetId>,
    pub possible_targets: BTreeSet<TargetId>,
    pub missing_targets: BTreeSet<TargetId>,
    pub unavailable_targets: BTreeSet<TargetId>,
    pub warnings: Vec<String>,
}

#[derive(Serialize)]
pub struct DependencyListing {
    pub coordinates: Vec<String>,
    pub warnings: Vec<String>,
}

#[derive(Serialize)]
pub struct TargetListing {
    pub coordinate: String,
    pub targets: BTreeSet<TargetId>,
}

#[derive(Serialize, Clone)]
pub struct CatalogEntry {
    pub konan_name: String,
    pub target: TargetId,
    pub deprecated: bool,
}
