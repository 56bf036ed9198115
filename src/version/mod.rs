//! Version checking layer
//!
//! This module fetches version candidates from a remote source, normalizes
//! them into semantic versions and classifies a target version against the
//! newest one found.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Checker   │────▶│   Source    │────▶│ FetchResult │
//! │ (classify)  │     │ (validate,  │     │ (versions,  │
//! └─────────────┘     │  fetch)     │     │  malformed) │
//!        │            └─────────────┘     └─────────────┘
//!        ▼                   │
//! ┌─────────────┐     ┌─────────────┐
//! │ CheckResult │     │   Sources   │
//! │             │     │(github,json,│
//! └─────────────┘     │ html, meta) │
//!                     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`checker`]: Target normalization, maximum selection and classification
//! - [`error`]: Error types for configuration, transport and comparison failures
//! - [`semver`]: Version string normalization and fix-up transforms
//! - [`source`]: Source trait every medium implements
//! - [`sources`]: Concrete sources (GitHub tags, JSON, HTML, HTML meta tag)
//! - [`types`]: `FetchResult`, `CheckResult` and `Meta`

pub mod checker;
pub mod error;
pub mod semver;
pub mod source;
pub mod sources;
pub mod types;
