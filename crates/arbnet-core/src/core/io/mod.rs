//! # Network Export Module
//!
//! Flattened, serializable forms of a compiled spring network. The concrete
//! text or binary emission is the job of external serializers; everything
//! here is plain array data that such a serializer can render without further
//! geometric computation.

pub mod arrays;
pub mod dump;
