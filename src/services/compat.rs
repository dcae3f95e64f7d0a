use crate::domain::coordinate::{LibraryCoordinate, TargetId};
use crate::domain::models::CompatibilityReport;
use crate::error::CheckError;
use std::collections::{BTreeMap, BTreeSet};

pub type TargetsByLibrary = BTreeMap<LibraryCoordinate, BTreeSet<TargetId>>;

/// Libraries left out of the intersection.
#[derive(Debug, Default, Clone)]
pub struct ExclusionPolicy {
    /// `group:artifact` ids.
    pub modules: BTreeSet<String>,
    pub ignore_targetless: bool,
}

impl ExclusionPolicy {
    pub fn excludes(&self, coordinate: &LibraryCoordinate, targets: &BTreeSet<TargetId>) -> bool {
        self.modules.contains(&coordinate.module_id()) || (self.ignore_targetless && targets.is_empty())
    }
}

/// Removes excluded libraries, returning what was dropped.
pub fn apply_exclusions(
    per_library: &mut TargetsByLibrary,
    policy: &ExclusionPolicy,
) -> Vec<LibraryCoordinate> {
    let dropped: Vec<LibraryCoordinate> = per_library
        .iter()
        .filter(|(c, t)| policy.excludes(c, t))
        .map(|(c, _)| c.clone())
        .collect();
    for c in &dropped {
        per_library.remove(c);
    }
    dropped
}

/// Intersects the target sets of all libraries and diffs the result against
/// the configured targets.
///
/// An empty library map is rejected: with nothing to intersect there is no
/// meaningful set of possible targets.
pub fn compute(
    per_library: &TargetsByLibrary,
    current: &BTreeSet<TargetId>,
) -> Result<CompatibilityReport, CheckError> {
    let mut sets = per_library.values();
    let Some(first) = sets.next() else {
        return Err(CheckError::Configuration(
            "no dependencies with module metadata to check; declare at least one library \
             dependency or remove exclusions"
                .to_string(),
        ));
    };

    let possible: BTreeSet<TargetId> = sets.fold(first.clone(), |acc, s| {
        acc.intersection(s).cloned().collect()
    });
    let seen: BTreeSet<TargetId> = per_library.values().flatten().cloned().collect();

    let missing = possible.difference(current).cloned().collect();
    let unavailable = seen.difference(&possible).cloned().collect();

    let mut unsupported_by_target = BTreeMap::new();
    for target in &seen {
        let lacking: BTreeSet<LibraryCoordinate> = per_library
            .iter()
            .filter(|(_, targets)| !targets.contains(target))
            .map(|(c, _)| c.clone())
            .collect();
        if !lacking.is_empty() {
            unsupported_by_target.insert(target.clone(), lacking);
        }
    }

    Ok(CompatibilityReport {
        current_targets: current.clone(),
        possible_targets: possible,
        missing_targets: missing,
        unavailable_targets: unavailable,
        unsupported_by_target,
        supported_by_dependency: per_library.clone(),
    })
}
