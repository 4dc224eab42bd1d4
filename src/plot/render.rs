use crate::plot::grid::Grid;

/// Cell where two or more neighbours have the opposite sign.
pub const BOUNDARY_HEAVY: char = '8';
/// Cell where exactly one neighbour has the opposite sign.
pub const BOUNDARY: char = '*';
/// Cell on the line `x = 0`.
pub const VERTICAL_AXIS: char = '|';
/// Cell on the line `y = 0`.
pub const HORIZONTAL_AXIS: char = '-';
/// Any other cell.
pub const BLANK: char = ' ';

/// Draws the curve `value = 0` of a sampled grid as ASCII art.
///
/// Each cell is compared with its four axis neighbours; the curve passes
/// wherever the sign of the value (`value >= 0`) changes. The outermost rows
/// and columns only serve as neighbours and are not drawn. Rows are emitted
/// top to bottom, highest Y first, one line each.
///
/// This is a sign-change detector, not interpolated contouring: shallow curves
/// may come out broken or doubled.
///
/// # Example
/// ```
/// use graphcalc::{
///     parse_equation,
///     plot::{
///         grid::{GridConfig, sample_grid},
///         render::render,
///     },
/// };
///
/// let tree = parse_equation("x^2 - 0.25").unwrap();
/// let config = GridConfig { start_x: -1.0,
///                           start_y: -1.0,
///                           end_x:   1.0,
///                           end_y:   1.0,
///                           step_x:  1.0,
///                           step_y:  1.0, };
///
/// assert_eq!(render(&sample_grid(&tree.root, &config).unwrap()), "8\n");
/// ```
#[must_use]
pub fn render(grid: &Grid) -> String {
    let mut out = String::new();
    for y in interior_rows(grid) {
        out.push_str(&render_row(grid, y));
        out.push('\n');
    }
    out
}

/// Like [`render`], with each row prefixed by its Y coordinate.
#[must_use]
pub fn render_labeled(grid: &Grid) -> String {
    let mut out = String::new();
    for y in interior_rows(grid) {
        let label = grid.y_at(y).unwrap_or_default();
        out.push_str(&format!("{label:>6}: {}\n", render_row(grid, y)));
    }
    out
}

/// Interior row indices, highest first.
fn interior_rows(grid: &Grid) -> impl Iterator<Item = usize> {
    (1..grid.rows().saturating_sub(1)).rev()
}

fn render_row(grid: &Grid, y: usize) -> String {
    (1..grid.columns().saturating_sub(1)).map(|x| cell(grid, x, y)).collect()
}

/// The marker for an interior cell. Callers guarantee all four neighbours
/// exist.
fn cell(grid: &Grid, x: usize, y: usize) -> char {
    let sign = |x: usize, y: usize| grid.value(x, y).is_some_and(|v| v >= 0.0);
    let here = sign(x, y);

    let changes = [(x, y + 1), (x, y - 1), (x + 1, y), (x - 1, y)].into_iter()
                                                                  .filter(|&(nx, ny)| {
                                                                      sign(nx, ny) != here
                                                                  })
                                                                  .count();

    let on_axis = |coordinate: Option<f64>, step: f64| {
        coordinate.is_some_and(|c| c.abs() < step / 2.0)
    };

    if changes >= 2 {
        BOUNDARY_HEAVY
    } else if changes == 1 {
        BOUNDARY
    } else if on_axis(grid.x_at(x), grid.config.step_x) {
        VERTICAL_AXIS
    } else if on_axis(grid.y_at(y), grid.config.step_y) {
        HORIZONTAL_AXIS
    } else {
        BLANK
    }
}
