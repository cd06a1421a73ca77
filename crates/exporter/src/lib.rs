//! # Salescope Exporter
//!
//! Serializes one immutable calculation snapshot (raw inputs, derived
//! report, advisory texts) into a labeled, printable report document and
//! writes it under the configured output directory.
//!
//! All display formatting lives here: the engine hands over locale-free
//! numerics and this crate applies the single configured currency rule.
//! An export operates on the snapshot it was given; a later recalculation
//! never affects a document already being written.

pub mod document;
pub mod error;
pub mod format;

pub use document::Exporter;
pub use error::ExportError;
pub use format::{format_currency, format_percent};
