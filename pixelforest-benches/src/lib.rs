//! Benchmark support crate for pixelforest.
//!
//! Provides seeded synthetic images, their pixel graphs, and the parameter
//! types used by the Criterion benchmarks for the three stages: Kruskal's
//! spanning forest, the minimum arborescence, and threshold segmentation.

pub mod error;
pub mod params;
pub mod source;
