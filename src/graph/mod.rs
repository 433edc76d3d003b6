//! Graph construction and representation
//!
//! This module provides sentence similarity measures, a mutable builder,
//! and the frozen CSR form the ranking solvers iterate over.

pub mod builder;
pub mod csr;
pub mod similarity;
