//! # Salescope Events
//!
//! This crate defines the notification structures that report the outcome of
//! every user-triggered action (calculation, export, send) to whatever
//! surface is listening: the HTTP response, the log, or a forwarding webhook.
//!
//! As a Layer 0 crate it has no dependency on any other member crate and
//! provides the definitive language for status reporting.

// Declare the modules that make up this crate.
pub mod messages;

// Re-export the core types to provide a clean public API.
pub use messages::{Notification, NotificationKind, Severity};
