//! Seeded synthetic images and their pixel graphs.
//!
//! An image is a run of vertical stripes, each painted with a random base
//! colour and jittered by uniform per-pixel noise, so segmentation has real
//! boundaries to find at every size.

use pixelforest_core::{Edge, GraphError, GridShape};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// An RGB pixel with channels in `[0, 1]`.
pub type Rgb = [f64; 3];

/// Forward half of the 8-neighbourhood; each pair is emitted once.
const NEIGHBOUR_OFFSETS: [(usize, isize); 4] = [(0, 1), (1, -1), (1, 0), (1, 1)];

/// Errors raised while generating synthetic images.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SyntheticError {
    /// No stripes were requested.
    #[error("stripe count must be non-zero")]
    ZeroStripes,
    /// More stripes than columns were requested.
    #[error("stripe count {stripes} exceeds column count {cols}")]
    TooManyStripes {
        /// Requested stripe count.
        stripes: usize,
        /// Image width.
        cols: usize,
    },
    /// The noise amplitude was not a finite value in `[0, 1]`.
    #[error("noise amplitude must be finite and within [0, 1], got {noise}")]
    InvalidNoise {
        /// The rejected amplitude.
        noise: f64,
    },
    /// The grid dimensions were rejected.
    #[error(transparent)]
    Grid(#[from] GraphError),
}

/// Configuration for [`SyntheticImage::generate`].
#[derive(Clone, Debug)]
pub struct SyntheticImageConfig {
    /// Image height in pixels.
    pub rows: usize,
    /// Image width in pixels.
    pub cols: usize,
    /// Number of vertical colour stripes.
    pub stripes: usize,
    /// Maximum per-channel jitter added to every pixel.
    pub noise: f64,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// A generated image together with its grid.
#[derive(Clone, Debug, PartialEq)]
pub struct SyntheticImage {
    shape: GridShape,
    pixels: Vec<Rgb>,
}

impl SyntheticImage {
    /// Paints an image from `config`.
    ///
    /// # Errors
    /// Returns [`SyntheticError`] when the dimensions, stripe count, or noise
    /// amplitude are unusable.
    pub fn generate(config: &SyntheticImageConfig) -> Result<Self, SyntheticError> {
        let shape = GridShape::new(config.rows, config.cols)?;
        validate(config)?;

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let palette: Vec<Rgb> = (0..config.stripes)
            .map(|_| std::array::from_fn(|_| rng.gen_range(0.0..1.0)))
            .collect();
        let noise = config.noise;
        let pixels = (0..shape.vertex_count())
            .map(|vertex| {
                let (_, col) = shape.coordinate(vertex);
                let stripe = col
                    .saturating_mul(config.stripes)
                    .checked_div(config.cols)
                    .unwrap_or_default();
                let base = palette.get(stripe).copied().unwrap_or_default();
                base.map(|channel| (channel + rng.gen_range(-noise..=noise)).clamp(0.0, 1.0))
            })
            .collect();
        Ok(Self { shape, pixels })
    }

    /// Returns the image's grid.
    #[must_use]
    pub const fn shape(&self) -> GridShape {
        self.shape
    }

    /// Returns the pixels in row-major order.
    #[must_use]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Undirected 8-neighbour edges weighted by Euclidean colour distance.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(self.pixels.len().saturating_mul(4));
        for (here, colour) in self.pixels.iter().enumerate() {
            let (row, col) = self.shape.coordinate(here);
            for (d_row, d_col) in NEIGHBOUR_OFFSETS {
                let Some(next_col) = col.checked_add_signed(d_col) else {
                    continue;
                };
                let next_row = row + d_row;
                if !self.shape.contains(next_row, next_col) {
                    continue;
                }
                let there = self.shape.vertex(next_row, next_col);
                if let Some(other) = self.pixels.get(there) {
                    edges.push(Edge::new(here, there, distance(colour, other)));
                }
            }
        }
        edges
    }

    /// [`Self::edges`] in both orientations, for the directed solver.
    #[must_use]
    pub fn symmetric_edges(&self) -> Vec<Edge> {
        self.edges()
            .into_iter()
            .flat_map(|edge| [edge, Edge::new(edge.target(), edge.source(), edge.weight())])
            .collect()
    }
}

fn validate(config: &SyntheticImageConfig) -> Result<(), SyntheticError> {
    if config.stripes == 0 {
        return Err(SyntheticError::ZeroStripes);
    }
    if config.stripes > config.cols {
        return Err(SyntheticError::TooManyStripes {
            stripes: config.stripes,
            cols: config.cols,
        });
    }
    if !(0.0..=1.0).contains(&config.noise) {
        return Err(SyntheticError::InvalidNoise {
            noise: config.noise,
        });
    }
    Ok(())
}

fn distance(left: &Rgb, right: &Rgb) -> f64 {
    left.iter()
        .zip(right)
        .map(|(a, b)| (a - b).powi(2))
        .sum::<f64>()
        .sqrt()
}
