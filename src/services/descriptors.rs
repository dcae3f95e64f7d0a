use crate::domain::coordinate::LibraryCoordinate;
use crate::domain::graph::ResolvedGraph;
use crate::domain::metadata::ModuleDescriptor;
use crate::error::CheckError;
use rayon::prelude::*;
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::time::Duration;

const FETCH_TIMEOUT_MS: u64 = 10_000;

/// Where `.module` files are looked up, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Repository {
    Local(PathBuf),
    Remote(String),
}

impl Repository {
    pub fn parse(raw: &str) -> Self {
        let s = raw.trim();
        if s.starts_with("http://") || s.starts_with("https://") {
            Repository::Remote(s.trim_end_matches('/').to_string())
        } else if let Some(rest) = s.strip_prefix("~/") {
            let home = std::env::var("HOME").unwrap_or_default();
            Repository::Local(PathBuf::from(home).join(rest))
        } else {
            Repository::Local(PathBuf::from(s))
        }
    }

    fn describe(&self) -> String {
        match self {
            Repository::Local(p) => p.display().to_string(),
            Repository::Remote(url) => url.clone(),
        }
    }
}

pub struct DescriptorSource<'a> {
    pub graph: Option<&'a ResolvedGraph>,
    pub repositories: &'a [Repository],
    pub cache_dir: Option<&'a Path>,
}

pub fn default_cache_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home)
        .join(".cache")
        .join("kmpmt")
        .join("modules"))
}

fn cache_path(cache_dir: &Path, url: &str) -> PathBuf {
    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    let id = hex::encode(hasher.finalize());
    cache_dir.join(format!("{}.module", id))
}

fn fetch_text(url: &str, timeout_ms: u64) -> anyhow::Result<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_millis(timeout_ms))
        .build()?;
    let resp = client.get(url).send()?.error_for_status()?;
    Ok(resp.text()?)
}

fn read_remote(base: &str, coordinate: &LibraryCoordinate, cache_dir: Option<&Path>) -> Option<String> {
    let url = format!("{}/{}", base, coordinate.module_path());
    let cache = cache_dir.map(|d| cache_path(d, &url));
    match fetch_text(&url, FETCH_TIMEOUT_MS) {
        Ok(body) => {
            if let Some(cache) = &cache {
                if let Some(parent) = cache.parent() {
                    let _ = std::fs::create_dir_all(parent);
                }
                if let Err(e) = std::fs::write(cache, &body) {
                    tracing::debug!(error = %e, url = %url, "unable to cache module metadata");
                }
            }
            Some(body)
        }
        Err(e) => {
            tracing::debug!(error = %e, url = %url, "module metadata fetch failed");
            cache.filter(|c| c.exists()).and_then(|c| std::fs::read_to_string(c).ok())
        }
    }
}

/// `None` only when the file does not exist. Any other read failure is fatal
/// for the coordinate.
fn read_local(coordinate: &LibraryCoordinate, path: &Path) -> Result<Option<String>, CheckError> {
    match std::fs::read_to_string(path) {
        Ok(raw) => Ok(Some(raw)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(CheckError::DescriptorRead {
            coordinate: coordinate.clone(),
            path: path.to_path_buf(),
            source,
        }),
    }
}

impl DescriptorSource<'_> {
    /// Raw descriptor text for one coordinate: the host-provided file first,
    /// then each repository in order.
    pub fn read(&self, coordinate: &LibraryCoordinate) -> Result<String, CheckError> {
        tracing::debug!(query = %coordinate.module_query(), "resolving module metadata");
        let mut searched = Vec::new();

        if let Some(file) = self.graph.and_then(|g| g.module_file(coordinate)) {
            match read_local(coordinate, file)? {
                Some(raw) => return Ok(raw),
                None => {
                    tracing::warn!(file = %file.display(), "host-provided module file does not exist");
                    searched.push(file.display().to_string());
                }
            }
        }

        for repo in self.repositories {
            let found = match repo {
                Repository::Local(root) => read_local(coordinate, &root.join(coordinate.module_path()))?,
                Repository::Remote(base) => read_remote(base, coordinate, self.cache_dir),
            };
            if let Some(raw) = found {
                return Ok(raw);
            }
            searched.push(repo.describe());
        }

        Err(CheckError::DescriptorMissing {
            coordinate: coordinate.clone(),
            searched: if searched.is_empty() {
                "no repositories configured".to_string()
            } else {
                searched.join(", ")
            },
        })
    }

    pub fn load(&self, coordinate: &LibraryCoordinate) -> Result<ModuleDescriptor, CheckError> {
        let raw = self.read(coordinate)?;
        parse_descriptor(coordinate, &raw)
    }

    /// Loads every descriptor in parallel. Fails on the first coordinate
    /// without usable metadata.
    pub fn load_all(
        &self,
        coordinates: &BTreeSet<LibraryCoordinate>,
    ) -> Result<BTreeMap<LibraryCoordinate, ModuleDescriptor>, CheckError> {
        coordinates
            .par_iter()
            .map(|c| self.load(c).map(|d| (c.clone(), d)))
            .collect()
    }
}

pub fn parse_descriptor(
    coordinate: &LibraryCoordinate,
    raw: &str,
) -> Result<ModuleDescriptor, CheckError> {
    let descriptor =
        ModuleDescriptor::parse(raw).map_err(|source| CheckError::DescriptorParse {
            coordinate: coordinate.clone(),
            source,
        })?;
    if !descriptor.is_supported_format() {
        tracing::warn!(
            coordinate = %coordinate,
            format_version = %descriptor.format_version,
            "unrecognized module metadata format version"
        );
    }
    Ok(descriptor)
}
