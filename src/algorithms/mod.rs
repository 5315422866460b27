//! Whole-graph algorithms: the isomorphism filter and Prim's MST.

pub mod isomorphism;
pub mod mst;

pub use isomorphism::{degree_signature, is_isomorphic, DegreeSignature};
pub use mst::{prim, prim_from_first, MinimumSpanningTree};
