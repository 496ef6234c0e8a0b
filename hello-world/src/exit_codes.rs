//! Stable exit codes for the hello-world binary.

/// Every section was written.
pub const OK: i32 = 0;
/// Writing to stdout failed part way through.
pub const FAILURE: i32 = 1;
