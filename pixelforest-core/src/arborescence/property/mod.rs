//! Property-based tests for the minimum arborescence solver.
//!
//! Small digraphs are checked against an exhaustive search over parent
//! assignments. Larger seeded digraphs are checked structurally and against
//! the weight of an arborescence planted by the generator.

mod oracle;
mod strategies;
