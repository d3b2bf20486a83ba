//! Support library for the `spanning` binary.
//!
//! Exposes the command pipeline and logging setup so integration tests and
//! doctests can drive the CLI without spawning a subprocess.

pub mod cli;
pub mod logging;
