//! hello-sum: add two integers and greet someone.
//!
//! The default run prints
//!
//! ```text
//! Sum: 8
//! Hello, World!
//! ```

pub mod arith;
pub mod cli;
pub mod constants;
pub mod error;
pub mod greet;
pub mod logging;
pub mod output;

pub use arith::add;
pub use error::{DemoError, Result};
pub use greet::{greet, Greeter};
