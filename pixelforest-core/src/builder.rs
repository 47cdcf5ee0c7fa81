//! Builder utilities for configuring a [`Segmenter`].
//!
//! Exposes the spanning-strategy selection surface and the validation applied
//! before a [`Segmenter`] is constructed.

use crate::{Result, error::GraphError, segmenter::Segmenter};

/// Threshold used when none is configured.
pub const DEFAULT_THRESHOLD: f64 = 0.015;

/// Selects the spanning structure a [`Segmenter`] cuts into segments.
///
/// Both strategies are supported entry points. The forest ignores edge
/// direction; the arborescence honours it and only spans the vertices its
/// root can reach, leaving the rest as single-pixel segments.
///
/// # Examples
/// ```
/// use pixelforest_core::SpanningStrategy;
///
/// assert_eq!(SpanningStrategy::default(), SpanningStrategy::MinimumSpanningForest);
/// let rooted = SpanningStrategy::Arborescence { root: 0 };
/// assert!(matches!(rooted, SpanningStrategy::Arborescence { root: 0 }));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpanningStrategy {
    /// Kruskal's minimum spanning forest.
    #[default]
    MinimumSpanningForest,
    /// Chu-Liu/Edmonds minimum arborescence rooted at `root`.
    Arborescence {
        /// Vertex the arborescence grows from.
        root: usize,
    },
}

/// Configures and constructs [`Segmenter`] instances.
///
/// # Examples
/// ```
/// use pixelforest_core::{SegmenterBuilder, SpanningStrategy};
///
/// let segmenter = SegmenterBuilder::new()
///     .with_threshold(0.1)
///     .with_strategy(SpanningStrategy::Arborescence { root: 0 })
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(segmenter.threshold(), 0.1);
/// assert_eq!(segmenter.strategy(), SpanningStrategy::Arborescence { root: 0 });
/// ```
#[derive(Debug, Clone)]
pub struct SegmenterBuilder {
    threshold: f64,
    strategy: SpanningStrategy,
}

impl Default for SegmenterBuilder {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            strategy: SpanningStrategy::default(),
        }
    }
}

impl SegmenterBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use pixelforest_core::{SegmenterBuilder, SpanningStrategy};
    ///
    /// let builder = SegmenterBuilder::new();
    /// assert_eq!(builder.threshold(), 0.015);
    /// assert_eq!(builder.strategy(), SpanningStrategy::MinimumSpanningForest);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the cut threshold. Edges heavier than it separate segments.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Returns the configured threshold.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Sets the spanning structure to segment.
    #[must_use]
    pub fn with_strategy(mut self, strategy: SpanningStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the configured spanning strategy.
    #[must_use]
    pub fn strategy(&self) -> SpanningStrategy {
        self.strategy
    }

    /// Validates the configuration and constructs a [`Segmenter`].
    ///
    /// The arborescence root is checked against each graph at run time,
    /// since the builder does not know the grid yet.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidThreshold`] when the threshold is NaN.
    ///
    /// # Examples
    /// ```
    /// use pixelforest_core::{GraphError, SegmenterBuilder};
    ///
    /// let err = SegmenterBuilder::new().with_threshold(f64::NAN).build().unwrap_err();
    /// assert_eq!(err, GraphError::InvalidThreshold);
    /// ```
    pub fn build(self) -> Result<Segmenter> {
        if self.threshold.is_nan() {
            return Err(GraphError::InvalidThreshold);
        }
        Ok(Segmenter::new(self.threshold, self.strategy))
    }
}
