#![doc(hidden)]

//! Core library for crux-check
//!
//! This library consolidates all functionality for the crux-check tool, which queries the
//! Chrome User Experience Report (`CrUX`) API and checks a page's Core Web Vitals against
//! their "good" thresholds.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface and orchestration
//! - [`crux`]: `CrUX` API client and response model
//! - [`assess`]: Scoring of metrics against their thresholds
//! - [`reports`]: Console and JSON rendering of assessments

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod assess;
pub mod commands;
pub mod crux;
pub mod reports;

pub use crate::commands::{Host, run};
