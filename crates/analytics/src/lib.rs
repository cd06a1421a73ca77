//! # Salescope Analytics Engine
//!
//! This crate derives the sales performance metrics from a validated set of
//! deal inputs. It acts as the "unbiased judge" of the system.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `MetricsEngine` is a stateless calculator.
//!   It takes validated inputs and produces a `SalesReport` as output. Every
//!   call recomputes the whole record; there is no incremental state, which
//!   makes it highly reliable and easy to test.
//!
//! ## Public API
//!
//! - `MetricsEngine`: The main struct that contains the calculation logic.
//! - `SalesReport`: The standardized struct that holds the derived metrics.
//! - `Advisory`, `WinRateTier`, `OpportunityRisk`: the qualitative
//!   classification layered on top of a report.

// Declare the modules that constitute this crate.
pub mod advisory;
pub mod engine;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use advisory::{Advisory, OpportunityRisk, WinRateTier};
pub use engine::MetricsEngine;
pub use report::SalesReport;
