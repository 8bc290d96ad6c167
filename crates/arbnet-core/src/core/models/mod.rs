//! # Core Models Module
//!
//! Fundamental data structures for representing the input atomistic
//! structure: atoms with their physical properties, covalent bonds with a
//! cached rotamer classification, and the structure graph that ties them
//! together with connectivity lookups.

pub mod atom;
pub mod ids;
pub mod structure;
pub mod topology;
