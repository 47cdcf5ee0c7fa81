use pixelforest_core::{Edge, GridShape};

/// An RGB pixel with channels in `[0, 1]`.
pub type Rgb = [f64; 3];

/// Paints every pixel with `paint(row, col)`.
pub fn image(shape: GridShape, paint: impl Fn(usize, usize) -> Rgb) -> Vec<Rgb> {
    (0..shape.vertex_count())
        .map(|vertex| {
            let (row, col) = shape.coordinate(vertex);
            paint(row, col)
        })
        .collect()
}

/// Undirected 8-neighbour edges weighted by Euclidean colour distance.
///
/// Each neighbouring pair appears once, lower vertex id first.
pub fn eight_neighbour_edges(shape: GridShape, pixels: &[Rgb]) -> Vec<Edge> {
    let mut edges = Vec::new();
    for row in 0..shape.rows() {
        for col in 0..shape.cols() {
            let here = shape.vertex(row, col);
            let neighbours = [(0, 1), (1, -1), (1, 0), (1, 1)];
            for (d_row, d_col) in neighbours {
                let next_row = row + d_row;
                let Some(next_col) = col.checked_add_signed(d_col) else {
                    continue;
                };
                if !shape.contains(next_row, next_col) {
                    continue;
                }
                let there = shape.vertex(next_row, next_col);
                edges.push(Edge::new(here, there, distance(pixels[here], pixels[there])));
            }
        }
    }
    edges
}

/// Both orientations of every edge, for the directed solver.
#[must_use]
pub fn symmetric(edges: &[Edge]) -> Vec<Edge> {
    edges
        .iter()
        .flat_map(|edge| [*edge, Edge::new(edge.target(), edge.source(), edge.weight())])
        .collect()
}

fn distance(left: Rgb, right: Rgb) -> f64 {
    left.iter()
        .zip(right)
        .map(|(a, b)| (a - b).powi(2))
        .sum::<f64>()
        .sqrt()
}
