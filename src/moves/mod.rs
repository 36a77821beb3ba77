//! Move annotations: the textual grammar clients submit moves in.

pub mod annotation;

pub use annotation::{Move, Targets};
