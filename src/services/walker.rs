use crate::domain::coordinate::LibraryCoordinate;
use crate::domain::graph::{Edge, NodeIdentity, ResolvedGraph};
use crate::domain::models::{SkipReason, TraceEntry, WalkResult};
use crate::error::CheckError;
use std::collections::HashSet;

enum NodeClass {
    Skip(SkipReason),
    Library(LibraryCoordinate),
}

fn classify(id: &str, identity: &NodeIdentity) -> Result<NodeClass, CheckError> {
    match identity {
        NodeIdentity::Project { .. } => Ok(NodeClass::Skip(SkipReason::ProjectDependency)),
        NodeIdentity::Module { group, version, .. } if group.is_empty() && version.is_empty() => {
            Ok(NodeClass::Skip(SkipReason::FlatDirArtifact))
        }
        NodeIdentity::Module {
            group,
            module,
            version,
        } => Ok(NodeClass::Library(LibraryCoordinate::new(group, module, version))),
        NodeIdentity::Unknown { kind } => Err(CheckError::StructuralGraph(format!(
            "unknown dependency kind '{}': {}",
            kind, id
        ))),
    }
}

/// Collects every external library reachable from the graph root.
///
/// Each node is processed at most once, so shared subgraphs and cycles are
/// walked a single time. Project nodes are not emitted but their own
/// dependencies are. Only resolved edges are followed.
pub fn walk(graph: &ResolvedGraph) -> Result<WalkResult, CheckError> {
    let mut out = WalkResult::default();
    let mut seen = HashSet::new();
    let root = graph.root_index();
    seen.insert(root);
    enter(graph, root, 1, &mut out)?;

    // (node, depth, next edge) frames; keeps pre-order without recursion.
    let mut stack = vec![(root, 1usize, 0usize)];
    while let Some(frame) = stack.last_mut() {
        let node = graph.node(frame.0);
        let Some(edge) = node.edges.get(frame.2) else {
            stack.pop();
            continue;
        };
        frame.2 += 1;
        let depth = frame.1;

        match edge {
            Edge::Resolved(next) => {
                if seen.insert(*next) {
                    enter(graph, *next, depth + 1, &mut out)?;
                    stack.push((*next, depth + 1, 0));
                }
            }
            Edge::Unresolved { requested } => {
                out.warnings
                    .push(format!("{} -> {} is unresolved, skipping", node.id, requested));
            }
        }
    }
    Ok(out)
}

fn enter(
    graph: &ResolvedGraph,
    index: usize,
    depth: usize,
    out: &mut WalkResult,
) -> Result<(), CheckError> {
    let node = graph.node(index);

    let skipped = match classify(&node.id, &node.identity)? {
        NodeClass::Skip(reason) => {
            if reason == SkipReason::FlatDirArtifact {
                out.warnings.push(format!(
                    "{} cannot be checked: flat-dir repository artifact has no metadata",
                    node.id
                ));
            }
            Some(reason)
        }
        NodeClass::Library(coordinate) => {
            out.coordinates.insert(coordinate);
            None
        }
    };
    out.trace.push(TraceEntry {
        depth,
        node: node.id.clone(),
        skipped,
    });
    Ok(())
}

/// Renders the walk trace as an indented tree, one node per line.
pub fn format_trace(trace: &[TraceEntry]) -> String {
    let mut out = String::new();
    for entry in trace {
        for _ in 0..entry.depth {
            out.push_str("  ");
        }
        out.push_str(&entry.node);
        if let Some(reason) = entry.skipped {
            out.push(' ');
            out.push_str(reason.describe());
        }
        out.push('\n');
    }
    out
}
