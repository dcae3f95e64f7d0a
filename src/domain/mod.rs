//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `coordinate.rs` — library coordinates and target ids.
//! - `graph.rs` — resolved dependency graph, typed at the import boundary.
//! - `metadata.rs` — Gradle module metadata documents.
//! - `models.rs` — config, walk/report structs and JSON output shapes.
//! - `constants.rs` — stdlib identity, native target catalog, defaults.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects
//! beyond reading the graph export.
//!
//! ## Compatibility note
//! Changes in the serialized structs affect `--json` outputs. Keep them in
//! sync with `docs/contracts/*`.

pub mod constants;
pub mod coordinate;
pub mod graph;
pub mod metadata;
pub mod models;
