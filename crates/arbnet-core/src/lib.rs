//! # ARBNet Core Library
//!
//! A library for compiling atomistic molecular structures (atoms + covalent
//! bonds with 3-D coordinates) into articulated rigid-body spring networks
//! suitable for interactive simulation.
//!
//! ## Architectural Philosophy
//!
//! The library is split into two layers with a strict dependency direction:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`AtomicStructure`,
//!   `RigidBody`, `SpringNetwork`), the rotamer-bond classifier, the
//!   force-field parameter tables, and the partitioning/synthesis algorithms.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer.
//!   It ties the `core` components together into the complete compilation
//!   pipeline: parameterization, rigid-body partitioning, joint resolution,
//!   and spring-network synthesis.
//!
//! Structure-file parsing (PDB, topology, coordinates) and the emission of
//! concrete output formats are deliberately left to external collaborators;
//! the crate consumes an already-built [`core::models::structure::AtomicStructure`]
//! and produces serializable array forms via [`core::io`].

pub mod core;
pub mod workflows;
