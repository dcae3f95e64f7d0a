use crate::domain::coordinate::LibraryCoordinate;
use crate::error::CheckError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// On-disk shape of a resolved graph exported by the host build.
#[derive(Debug, Deserialize)]
pub struct GraphExport {
    pub root: String,
    pub components: Vec<ComponentExport>,
}

#[derive(Debug, Deserialize)]
pub struct ComponentExport {
    pub id: String,
    pub kind: String,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub module: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub module_file: Option<PathBuf>,
    #[serde(default)]
    pub dependencies: Vec<EdgeExport>,
}

#[derive(Debug, Deserialize)]
pub struct EdgeExport {
    #[serde(default)]
    pub selected: Option<String>,
    #[serde(default)]
    pub requested: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeIdentity {
    /// Another project of the same build.
    Project { path: String },
    /// A versioned external component. Flat-dir artifacts show up here with
    /// an empty group and version.
    Module {
        group: String,
        module: String,
        version: String,
    },
    Unknown { kind: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Edge {
    Resolved(usize),
    Unresolved { requested: String },
}

#[derive(Clone, Debug)]
pub struct ResolvedNode {
    pub id: String,
    pub identity: NodeIdentity,
    pub edges: Vec<Edge>,
}

#[derive(Debug)]
pub struct ResolvedGraph {
    root: usize,
    nodes: Vec<ResolvedNode>,
    module_files: HashMap<LibraryCoordinate, PathBuf>,
}

impl ResolvedGraph {
    pub fn root(&self) -> &ResolvedNode {
        &self.nodes[self.root]
    }

    pub fn root_index(&self) -> usize {
        self.root
    }

    pub fn node(&self, index: usize) -> &ResolvedNode {
        &self.nodes[index]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Descriptor path handed over by the host for this coordinate, if any.
    pub fn module_file(&self, coordinate: &LibraryCoordinate) -> Option<&Path> {
        self.module_files.get(coordinate).map(PathBuf::as_path)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let export: GraphExport = serde_json::from_str(&raw)?;
        Ok(Self::from_export(export)?)
    }

    pub fn from_export(export: GraphExport) -> Result<Self, CheckError> {
        let mut index = HashMap::new();
        for (i, c) in export.components.iter().enumerate() {
            if index.insert(c.id.clone(), i).is_some() {
                return Err(CheckError::StructuralGraph(format!(
                    "duplicate component id: {}",
                    c.id
                )));
            }
        }

        let root = *index.get(&export.root).ok_or_else(|| {
            CheckError::StructuralGraph(format!("root component not found: {}", export.root))
        })?;

        let mut nodes = Vec::with_capacity(export.components.len());
        let mut module_files = HashMap::new();
        for c in export.components {
            let mut edges = Vec::with_capacity(c.dependencies.len());
            for d in c.dependencies {
                let edge = match (d.selected, d.requested) {
                    (Some(selected), _) => {
                        let target = *index.get(&selected).ok_or_else(|| {
                            CheckError::StructuralGraph(format!(
                                "{} depends on unknown component {}",
                                c.id, selected
                            ))
                        })?;
                        Edge::Resolved(target)
                    }
                    (None, Some(requested)) => Edge::Unresolved { requested },
                    (None, None) => {
                        return Err(CheckError::StructuralGraph(format!(
                            "{} has a dependency with neither 'selected' nor 'requested'",
                            c.id
                        )))
                    }
                };
                edges.push(edge);
            }

            let identity = match c.kind.as_str() {
                "project" => NodeIdentity::Project {
                    path: c.path.unwrap_or_else(|| c.id.clone()),
                },
                "module" => NodeIdentity::Module {
                    group: c.group,
                    module: c.module,
                    version: c.version,
                },
                other => NodeIdentity::Unknown {
                    kind: other.to_string(),
                },
            };

            if let (NodeIdentity::Module { group, module, version }, Some(file)) =
                (&identity, c.module_file)
            {
                module_files.insert(LibraryCoordinate::new(group, module, version), file);
            }

            nodes.push(ResolvedNode {
                id: c.id,
                identity,
                edges,
            });
        }

        Ok(Self {
            root,
            nodes,
            module_files,
        })
    }
}
