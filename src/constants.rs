//! Central constants for hello-sum
//!
//! Default operands, greeting pieces and output prefixes live here so the
//! library, the CLI and the tests agree on the exact text.

/// First operand used when none is given on the command line
pub const DEFAULT_A: i32 = 5;

/// Second operand used when none is given on the command line
pub const DEFAULT_B: i32 = 3;

/// Name greeted when none is given on the command line
pub const DEFAULT_NAME: &str = "World";

/// Text placed before the name in a greeting
pub const SALUTATION: &str = "Hello, ";

/// Text placed after the name in a greeting
pub const SUFFIX: &str = "!";

/// Prefix of the sum line in text output
pub const SUM_PREFIX: &str = "Sum: ";

/// Longest name accepted in strict mode, in characters
pub const MAX_NAME_LEN: usize = 256;

/// Environment variable holding a tracing filter directive.
///
/// Takes precedence over the `-v` flags when set.
pub const LOG_ENV_VAR: &str = "HELLO_SUM_LOG";
