//! CLI regression tests for the `phnx` binary.

#[cfg(test)]
pub mod cli;
