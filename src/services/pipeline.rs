use crate::domain::coordinate::{LibraryCoordinate, TargetId};
use crate::domain::graph::ResolvedGraph;
use crate::domain::models::{CompatibilityReport, WalkResult};
use crate::error::CheckError;
use crate::services::catalog::NativeCatalog;
use crate::services::compat::{apply_exclusions, compute, ExclusionPolicy, TargetsByLibrary};
use crate::services::descriptors::DescriptorSource;
use crate::services::targets::extract_targets;
use crate::services::walker::{format_trace, walk};
use std::collections::BTreeSet;

pub struct Analysis {
    pub walk: WalkResult,
    pub excluded: Vec<LibraryCoordinate>,
    pub report: CompatibilityReport,
}

/// Walks the graph, loads and interprets each library's metadata and
/// computes the compatibility report. Any failure aborts the whole run.
pub fn analyze(
    graph: &ResolvedGraph,
    source: &DescriptorSource<'_>,
    catalog: &NativeCatalog,
    exclusions: &ExclusionPolicy,
    current: &BTreeSet<TargetId>,
) -> Result<Analysis, CheckError> {
    tracing::debug!(nodes = graph.len(), root = %graph.root().id, "walking dependency graph");
    let walk = walk(graph)?;
    tracing::debug!("dependency graph:\n{}", format_trace(&walk.trace));
    for warning in &walk.warnings {
        tracing::warn!("{}", warning);
    }
    tracing::info!(count = walk.coordinates.len(), "collected library coordinates");

    let descriptors = source.load_all(&walk.coordinates)?;

    let mut per_library = TargetsByLibrary::new();
    for (coordinate, descriptor) in &descriptors {
        let targets = extract_targets(coordinate, descriptor, catalog)?;
        tracing::debug!(
            coordinate = %coordinate,
            targets = ?targets.iter().map(TargetId::as_str).collect::<Vec<_>>(),
            "library targets"
        );
        per_library.insert(coordinate.clone(), targets);
    }

    let excluded = apply_exclusions(&mut per_library, exclusions);
    for c in &excluded {
        tracing::info!(coordinate = %c, "excluded from target intersection");
    }

    let report = compute(&per_library, current)?;
    tracing::debug!(
        possible = ?report.possible_targets,
        missing = ?report.missing_targets,
        unavailable = ?report.unavailable_targets,
        "target intersection"
    );

    Ok(Analysis {
        walk,
        excluded,
        report,
    })
}
