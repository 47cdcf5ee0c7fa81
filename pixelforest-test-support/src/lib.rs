//! Shared test utilities for the pixelforest workspace.
//!
//! [`RecordingLayer`](crate::tracing::RecordingLayer) captures spans and
//! events so suites can assert instrumentation, and
//! [`ci::property_test_profile`] lets CI scale property suites through
//! environment variables.

pub mod ci;
pub mod tracing;
