//! Pixel grid geometry.
//!
//! Vertices are numbered row-major: the pixel at `(row, col)` is vertex
//! `row * cols + col`.

use crate::error::{GraphError, Result};

/// Dimensions of the pixel grid a graph was built over.
///
/// # Examples
/// ```
/// use pixelforest_core::GridShape;
///
/// let shape = GridShape::new(3, 4).expect("non-empty grid");
/// assert_eq!(shape.vertex_count(), 12);
/// assert_eq!(shape.vertex(1, 2), 6);
/// assert_eq!(shape.coordinate(6), (1, 2));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct GridShape {
    rows: usize,
    cols: usize,
}

impl GridShape {
    /// Creates a grid of `rows` by `cols` pixels.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGrid`] when either dimension is zero or the
    /// pixel count overflows `usize`.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        match rows.checked_mul(cols) {
            Some(count) if count > 0 => Ok(Self { rows, cols }),
            _ => Err(GraphError::EmptyGrid { rows, cols }),
        }
    }

    /// Returns the number of rows.
    #[must_use]
    #[rustfmt::skip]
    pub const fn rows(&self) -> usize { self.rows }

    /// Returns the number of columns.
    #[must_use]
    #[rustfmt::skip]
    pub const fn cols(&self) -> usize { self.cols }

    /// Returns the number of pixels, which is the graph's vertex count.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns `true` when `(row, col)` lies inside the grid.
    #[must_use]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Maps a grid coordinate to its vertex id.
    ///
    /// The coordinate is not range-checked; pair with [`Self::contains`].
    #[must_use]
    pub const fn vertex(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Maps a vertex id back to its `(row, col)` coordinate.
    #[must_use]
    pub const fn coordinate(&self, vertex: usize) -> (usize, usize) {
        (vertex / self.cols, vertex % self.cols)
    }

    /// Fails unless the grid covers exactly `vertex_count` vertices.
    pub(crate) fn ensure_covers(&self, vertex_count: usize) -> Result<()> {
        if self.vertex_count() == vertex_count {
            Ok(())
        } else {
            Err(GraphError::GridMismatch {
                rows: self.rows,
                cols: self.cols,
                vertex_count,
            })
        }
    }
}
