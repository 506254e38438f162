/// Exact stdout of a run with no arguments
pub const DEFAULT_STDOUT: &str = "Sum: 8\nHello, World!\n";

/// Exact stdout of `--json` with default operands and name
pub const DEFAULT_JSON_STDOUT: &str = "{\"sum\":8,\"greeting\":\"Hello, World!\"}\n";
