use thiserror::Error;

/// Errors produced by the library.
///
/// The default run cannot fail; these only surface with user-supplied input
/// in strict mode, or when stdout goes away.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("{a} + {b} overflows a 32-bit integer")]
    Overflow { a: i32, b: i32 },

    #[error("name is {len} characters long, at most {max} allowed")]
    NameTooLong { len: usize, max: usize },

    #[error("name contains control characters: {0:?}")]
    InvalidName(String),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DemoError>;
