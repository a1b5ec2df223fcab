// src/records/mod.rs

//! Input record model, loading and pairing.
//!
//! Responsibilities:
//! - Define the two record types (`model.rs`).
//! - Load record sequences from JSON sources on disk (`loader.rs`).
//! - Pair the two sequences positionally (`pair.rs`).

pub mod loader;
pub mod model;
pub mod pair;

pub use loader::{load_templates, load_texts};
pub use model::{TemplateRecord, TextRecord};
pub use pair::pair_records;
