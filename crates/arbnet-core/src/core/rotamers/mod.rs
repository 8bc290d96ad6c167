//! # Rotamer Classification Module
//!
//! The configurable rule table that decides whether a covalent bond is a
//! rotatable articulation point between two rigid bodies.

pub mod rules;
