//! Test helpers shared across crates.
//!
//! This crate provides recording doubles for both seams of a binding: a
//! [`RecordingTarget`] that captures every localised string pushed into it,
//! and a [`RecordingResolver`] that logs every lookup before delegating to a
//! [`localized::CatalogueResolver`]. The [`text`] module parses the scalar
//! placeholders used by behavioural step definitions.

mod recording;
pub mod text;

pub use recording::{Lookup, RecordingResolver, RecordingTarget};
