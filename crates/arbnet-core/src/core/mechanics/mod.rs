//! # Rigid-Body Mechanics Module
//!
//! The coarse-graining algorithms: partitioning the structure graph into
//! maximal rigid bodies separated only at rotamer bonds, resolving the joint
//! that each rotamer bond represents, and synthesizing the equivalent
//! mass-spring network.

pub mod body;
pub mod joint;
pub mod network;
pub mod partitioner;
pub mod spring;
