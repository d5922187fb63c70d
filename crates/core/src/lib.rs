//! # U-CutStock Core
//!
//! Job and result data model for the U-CutStock one-dimensional
//! cutting-stock engine.
//!
//! This crate defines the problem and solution types shared between solvers:
//! a [`Job`] describes one problem instance (stock length, kerf, demanded
//! piece lengths) and a [`CutResult`] describes a solver's output (pieces
//! grouped per stock unit plus total trimmings). No cutting-stock algorithm
//! lives here.
//!
//! ## Core Components
//!
//! - **Demand**: [`TargetSize`] - a (length, amount) pair
//! - **Problem instance**: [`Job`] - identity, validation, demand expansion
//! - **Solution**: [`CutResult`] - per-stock piece assignments and trimmings
//! - **Identity**: [`IdSequence`] - atomic issuer of unique [`JobId`]s
//!
//! ## Quick Start
//!
//! ```rust
//! use u_cutstock_core::{Job, TargetSize};
//!
//! let job = Job::new(1000, vec![TargetSize::new(500, 2), TargetSize::new(300, 1)])
//!     .with_cut_width(3);
//!
//! let pieces: Vec<u32> = job.sizes().collect();
//! assert_eq!(pieces, [500, 500, 300]);
//! assert_eq!(job.len(), 3);
//! ```
//!
//! Jobs built with [`Job::new`] carry a process-unique identity and compare
//! by it alone; jobs built with [`Job::try_new`] (or deserialized from
//! external input) are validated, carry no identity, and compare field-wise:
//!
//! ```rust
//! use u_cutstock_core::{Job, TargetSize};
//!
//! let a = Job::new(100, vec![TargetSize::new(50, 1)]);
//! let b = Job::new(100, vec![TargetSize::new(50, 1)]);
//! assert_ne!(a, b); // same fields, distinct identities
//!
//! assert!(Job::try_new(0, vec![]).is_err()); // stock length must be positive
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support. Identities are
//!   never serialized; a deserialized job compares field-wise.

pub mod error;
pub mod job;
pub mod result;

// Re-exports
pub use error::{Error, Result};
pub use job::{IdSequence, Job, JobId, TargetSize};
pub use result::CutResult;
