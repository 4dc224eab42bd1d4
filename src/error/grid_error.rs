#[derive(Debug, Clone, PartialEq)]
/// Errors raised when a grid window cannot be sampled.
pub enum GridError {
    /// The start of an axis is not strictly below its end.
    InvalidBounds {
        /// `'x'` or `'y'`.
        axis:  char,
        /// The configured start.
        start: f64,
        /// The configured end.
        end:   f64,
    },
    /// A step is zero, negative or not finite.
    InvalidStep {
        /// `'x'` or `'y'`.
        axis: char,
        /// The configured step.
        step: f64,
    },
    /// The window holds more points than can be indexed.
    TooManyPoints {
        /// `'x'` or `'y'`.
        axis: char,
    },
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBounds { axis, start, end } => write!(f,
                                                               "Grid error: start{axis} ({start}) must be less than end{axis} ({end})."),
            Self::InvalidStep { axis, step } => {
                write!(f, "Grid error: step{axis} ({step}) must be a positive number.")
            },
            Self::TooManyPoints { axis } => {
                write!(f, "Grid error: Too many points along the {axis} axis.")
            },
        }
    }
}

impl std::error::Error for GridError {}
