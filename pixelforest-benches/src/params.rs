//! Benchmark parameter types.

use std::fmt;

/// Parameters for a benchmark over a square pixel grid.
#[derive(Clone, Debug)]
pub struct GridBenchParams {
    /// Side length of the grid in pixels.
    pub side: usize,
}

impl fmt::Display for GridBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.side)
    }
}

/// Parameters for a segmentation benchmark run.
#[derive(Clone, Debug)]
pub struct SegmentBenchParams {
    /// Side length of the grid in pixels.
    pub side: usize,
    /// Cut threshold handed to the segmenter.
    pub threshold: f64,
}

impl fmt::Display for SegmentBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0},t={1}", self.side, self.threshold)
    }
}
