//! Property-based tests for the Kruskal spanning forest.
//!
//! Checks structural invariants (acyclicity, component preservation, edge
//! count), minimality against independent oracles, and run-to-run
//! determinism on tie-heavy inputs.

mod oracle;
mod strategies;
