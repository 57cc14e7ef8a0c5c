//! Raw, dynamically loaded bindings to the Pixelink 4.0 camera API
//! (`PxLAPI40.dll` on Windows, `libPxLApi.so` on Linux).
//!
//! Nothing here links against the vendor library at build time. Call
//! [load::load] to locate the library for the host OS and resolve every
//! entry point into a [PxLApi].

mod defs;
mod error;
mod funcs;
pub mod load;

pub use defs::*;
pub use error::LoadError;
pub use funcs::*;
