use std::fmt;

/// A flat matrix source did not hold exactly 16 elements.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MatrixLenError {
    /// Length of the rejected sequence.
    pub len: usize,
}

impl fmt::Display for MatrixLenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "matrix must be of length 16, got {}", self.len)
    }
}

impl std::error::Error for MatrixLenError {}
