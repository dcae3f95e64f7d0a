//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `walker.rs` — resolved graph traversal into library coordinates.
//! - `descriptors.rs` — `.module` lookup (host file, local/remote repos) + parsing.
//! - `catalog.rs` — Kotlin/Native target catalog.
//! - `targets.rs` — per-library target extraction.
//! - `compat.rs` — exclusions, intersection and missing/blocked views.
//! - `pipeline.rs` — walk → load → extract → compute in one call.
//! - `report.rs` — Markdown rendering + atomic report write.
//! - `config.rs` — `kmpmt.toml` resolution.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod catalog;
pub mod compat;
pub mod config;
pub mod descriptors;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod targets;
pub mod walker;
