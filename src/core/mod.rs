//! Host-facing vocabulary.

pub mod command;

pub use command::Command;
