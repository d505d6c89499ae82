#![warn(missing_docs)]
//! Core models for linear supply/demand market analysis.
//!
//! This crate holds the data structures shared by the analytical engine
//! (`mkt-solver`) and any presentation layer built on top of it. It performs
//! no I/O and contains only the validation needed to keep the models sound.

/// Core domain models for market analysis.
///
/// This module contains the raw buyer and seller records, the derived
/// observations and curves, the analysis outcomes, and the configuration that
/// parameterizes an analysis run.
///
/// The models in this module are primarily data structures with minimal business logic.
/// The numerical work lives in the solver crate.
pub mod models;
