use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identity of a resolved library. Field order drives the derived ordering:
/// group, then artifact, then version.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LibraryCoordinate {
    pub group: String,
    pub artifact: String,
    pub version: String,
}

impl LibraryCoordinate {
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
        }
    }

    /// Dependency notation selecting the Gradle module metadata artifact.
    pub fn module_query(&self) -> String {
        format!("{}@module", self)
    }

    /// `group:artifact` without the version, as used by exclusion lists.
    pub fn module_id(&self) -> String {
        format!("{}:{}", self.group, self.artifact)
    }

    pub fn is(&self, group: &str, artifact: &str) -> bool {
        self.group == group && self.artifact == artifact
    }

    /// Maven-layout path of this library's `.module` file relative to a
    /// repository root.
    pub fn module_path(&self) -> String {
        format!(
            "{}/{}/{}/{}-{}.module",
            self.group.replace('.', "/"),
            self.artifact,
            self.version,
            self.artifact,
            self.version
        )
    }
}

impl fmt::Display for LibraryCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}

impl FromStr for LibraryCoordinate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        match parts.as_slice() {
            [group, artifact, version] if !artifact.is_empty() => {
                Ok(Self::new(*group, *artifact, *version))
            }
            _ => Err(format!("expected group:artifact:version, got '{}'", s)),
        }
    }
}

/// A platform name such as `jvm`, `js`, `wasmJs` or `linuxX64`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetId(pub String);

impl TargetId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TargetId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TargetId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
