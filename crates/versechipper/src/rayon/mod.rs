//! # Rayon Utilities
//!
//! [`rayon`] powered wrappers for parallel sample encoding.

mod rayon_encoder;

pub use rayon_encoder::ParallelRayonEncoder;
