//! Services layer (ports + adapters).
//!
//! - `ports`: host contracts the kernel talks to.
//! - `adapters`: local filesystem/terminal implementations of those contracts.

pub mod adapters;
pub mod host;
pub mod ports;

pub use host::HostContext;
