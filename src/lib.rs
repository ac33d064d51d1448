//! # failure-analytics
//!
//! Weibull reliability estimation and risk scoring for factory maintenance
//! failure records.
//!
//! Given the failure-hour observations recorded for one failure-mode group
//! (same component name, sub-component, and failure mode), this crate
//! estimates Weibull shape and scale parameters by moment matching,
//! evaluates a point reliability, derives a qualitative risk assessment,
//! and samples the reliability curve for charting.
//!
//! ## Modules
//!
//! - [`group`] — Pipeline entry point: per-group estimate + risk assessment
//! - [`weibull`] — Moment-matching fit, reliability model, curve sampling
//! - [`risk`] — Probability bucketing and severity × probability scoring
//! - [`stats`] — Descriptive statistics (mean, population SD, CV)
//! - [`special`] — Gamma function (Lanczos approximation)
//!
//! ## Design Philosophy
//!
//! - **Pure computation**: every estimate is a deterministic function of
//!   its inputs — no persistence, no caching, no shared state
//! - **Filter, don't fail**: groups without usable observations are
//!   excluded from output rather than reported as errors
//! - **Surface defects**: a non-finite estimate is an error, never a
//!   value handed to the presentation layer

pub mod group;
pub mod risk;
pub mod special;
pub mod stats;
pub mod weibull;
