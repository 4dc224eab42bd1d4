use crate::{
    ast::Node,
    error::GridError,
    interpreter::evaluator::core::{Bindings, Context},
    util::num::{f64_to_usize_checked, usize_to_f64_checked},
};

pub type GridResult<T> = Result<T, GridError>;

/// The window an equation is sampled over.
///
/// Bounds are inclusive. Each axis holds `floor((end - start) / step) + 1`
/// points, so a step that does not divide the range evenly stops short of
/// `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Smallest X coordinate.
    pub start_x: f64,
    /// Smallest Y coordinate.
    pub start_y: f64,
    /// Largest X coordinate.
    pub end_x:   f64,
    /// Largest Y coordinate.
    pub end_y:   f64,
    /// Distance between neighbouring X samples.
    pub step_x:  f64,
    /// Distance between neighbouring Y samples.
    pub step_y:  f64,
}

impl Default for GridConfig {
    /// A 24 by 16 window centred on the origin.
    ///
    /// The X step is half the Y step because terminal cells are roughly twice
    /// as tall as they are wide.
    fn default() -> Self {
        Self { start_x: -12.0,
               start_y: -8.0,
               end_x:   12.0,
               end_y:   8.0,
               step_x:  0.25,
               step_y:  0.5, }
    }
}

impl GridConfig {
    /// Checks that both axes have `start < end` and a positive finite step.
    ///
    /// # Errors
    /// - [`GridError::InvalidBounds`] if an axis starts at or after its end.
    /// - [`GridError::InvalidStep`] if a step is not a positive finite number.
    /// - [`GridError::TooManyPoints`] if an axis has more points than can be
    ///   indexed.
    pub fn validate(&self) -> GridResult<()> {
        self.columns()?;
        self.rows()?;
        Ok(())
    }

    /// Number of samples along the X axis.
    ///
    /// # Errors
    /// See [`GridConfig::validate`].
    pub fn columns(&self) -> GridResult<usize> {
        self.check_bounds()?;
        step_count('x', self.start_x, self.end_x, self.step_x)
    }

    /// Number of samples along the Y axis.
    ///
    /// # Errors
    /// See [`GridConfig::validate`].
    pub fn rows(&self) -> GridResult<usize> {
        self.check_bounds()?;
        step_count('y', self.start_y, self.end_y, self.step_y)
    }

    fn check_bounds(&self) -> GridResult<()> {
        check_axis('x', self.start_x, self.end_x)?;
        check_axis('y', self.start_y, self.end_y)
    }
}

fn check_axis(axis: char, start: f64, end: f64) -> GridResult<()> {
    if start < end {
        Ok(())
    } else {
        Err(GridError::InvalidBounds { axis, start, end })
    }
}

fn step_count(axis: char, start: f64, end: f64, step: f64) -> GridResult<usize> {
    if !(step.is_finite() && step > 0.0) {
        return Err(GridError::InvalidStep { axis, step });
    }

    let steps = f64_to_usize_checked(((end - start) / step).floor(),
                                     GridError::TooManyPoints { axis })?;
    steps.checked_add(1).ok_or(GridError::TooManyPoints { axis })
}

/// The coordinates of `count` samples starting at `start`.
fn coordinates(axis: char, start: f64, step: f64, count: usize) -> GridResult<Vec<f64>> {
    (0..count).map(|i| {
                  usize_to_f64_checked(i, GridError::TooManyPoints { axis }).map(|i| i * step + start)
              })
              .collect()
}

/// Sampled values of an equation over a [`GridConfig`] window.
///
/// Values are indexed `[x][y]`, with index `0` at `start_x` / `start_y`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// The window that was sampled.
    pub config: GridConfig,
    xs:         Vec<f64>,
    ys:         Vec<f64>,
    points:     Vec<Vec<f64>>,
}

impl Grid {
    /// Number of samples along X.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.xs.len()
    }

    /// Number of samples along Y.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.ys.len()
    }

    /// X coordinate of column `x`.
    #[must_use]
    pub fn x_at(&self, x: usize) -> Option<f64> {
        self.xs.get(x).copied()
    }

    /// Y coordinate of row `y`.
    #[must_use]
    pub fn y_at(&self, y: usize) -> Option<f64> {
        self.ys.get(y).copied()
    }

    /// The sampled value at column `x`, row `y`.
    #[must_use]
    pub fn value(&self, x: usize, y: usize) -> Option<f64> {
        self.points.get(x).and_then(|column| column.get(y)).copied()
    }

    /// All sampled values, indexed `[x][y]`.
    #[must_use]
    pub fn points(&self) -> &[Vec<f64>] {
        &self.points
    }
}

impl Context {
    /// Evaluates a tree at every point of a window.
    ///
    /// Columns are sampled left to right and each column bottom to top, all
    /// with this context, so register state set at one point is visible at the
    /// next.
    ///
    /// # Errors
    /// Fails if the window is invalid; see [`GridConfig::validate`].
    pub fn sample_grid(&mut self, node: &Node, config: &GridConfig) -> GridResult<Grid> {
        let columns = config.columns()?;
        let rows = config.rows()?;
        let xs = coordinates('x', config.start_x, config.step_x, columns)?;
        let ys = coordinates('y', config.start_y, config.step_y, rows)?;

        let mut bindings = Bindings::new();
        let mut points = Vec::with_capacity(columns);
        for &x in &xs {
            bindings.insert('x', x);

            let mut column = Vec::with_capacity(rows);
            for &y in &ys {
                bindings.insert('y', y);
                column.push(self.evaluate(node, &bindings));
            }
            points.push(column);
        }

        Ok(Grid { config: *config,
                  xs,
                  ys,
                  points })
    }
}

/// Samples a tree over a window with a fresh [`Context`].
///
/// # Errors
/// Fails if the window is invalid; see [`GridConfig::validate`].
///
/// # Example
/// ```
/// use graphcalc::{
///     parse_equation,
///     plot::grid::{GridConfig, sample_grid},
/// };
///
/// let tree = parse_equation("x + y").unwrap();
/// let config = GridConfig { start_x: 0.0,
///                           start_y: 0.0,
///                           end_x:   2.0,
///                           end_y:   1.0,
///                           step_x:  1.0,
///                           step_y:  1.0, };
/// let grid = sample_grid(&tree.root, &config).unwrap();
///
/// assert_eq!(grid.columns(), 3);
/// assert_eq!(grid.rows(), 2);
/// assert_eq!(grid.value(2, 1), Some(3.0));
/// ```
pub fn sample_grid(node: &Node, config: &GridConfig) -> GridResult<Grid> {
    Context::new().sample_grid(node, config)
}
