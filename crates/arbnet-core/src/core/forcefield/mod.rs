//! # Force Field Module
//!
//! Per-atom-type physical property tables and the parameterization pass that
//! stamps those properties onto every atom of a structure before compilation.

pub mod parameterization;
pub mod params;
