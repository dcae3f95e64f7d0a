use crate::domain::coordinate::{LibraryCoordinate, TargetId};
use std::collections::BTreeSet;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum CheckError {
    #[error("malformed dependency graph: {0}")]
    StructuralGraph(String),
    #[error("no module metadata found for {coordinate} (looked in: {searched})")]
    DescriptorMissing {
        coordinate: LibraryCoordinate,
        searched: String,
    },
    #[error("unable to read module metadata for {coordinate} at {}: {source}", .path.display())]
    DescriptorRead {
        coordinate: LibraryCoordinate,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to parse module metadata for {coordinate}: {source}")]
    DescriptorParse {
        coordinate: LibraryCoordinate,
        #[source]
        source: serde_json::Error,
    },
    #[error("unable to extract targets for {coordinate}: variant '{variant}' {reason}")]
    TargetExtraction {
        coordinate: LibraryCoordinate,
        variant: String,
        reason: String,
    },
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("{}", missing_targets_message(.0))]
    MissingTargets(BTreeSet<TargetId>),
}

fn missing_targets_message(targets: &BTreeSet<TargetId>) -> String {
    let mut out = String::from("Missing targets detected!\n");
    for target in targets {
        out.push_str(" - ");
        out.push_str(target.as_str());
        out.push('\n');
    }
    out
}
