//! UCI (Universal Chess Interface) front end
//!
//! A line-oriented driver over the game controller: position setup, fixed-depth
//! `go`, the `Depth` and `Threads` options, and a few debugging commands.

pub mod protocol;

pub use protocol::UCI;
