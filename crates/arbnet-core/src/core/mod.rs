//! # Core Module
//!
//! This module provides the fundamental building blocks and algorithms for
//! converting an atomistic structure into an articulated rigid-body spring
//! network, serving as the computational core of the library.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules that handle different
//! stages of the compilation:
//!
//! - **Molecular Representation** ([`models`]) - Atoms, bonds, and the structure graph
//! - **Rotamer Classification** ([`rotamers`]) - The articulation-point rule table
//! - **Force Field Parameters** ([`forcefield`]) - Per-type physical property tables
//! - **Rigid-Body Mechanics** ([`mechanics`]) - Partitioning, joints, and spring synthesis
//! - **Network Export** ([`io`]) - Flattened, serializable array forms of the result

pub mod forcefield;
pub mod io;
pub mod mechanics;
pub mod models;
pub mod rotamers;
