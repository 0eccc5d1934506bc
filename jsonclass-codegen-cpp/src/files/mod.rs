//! Files produced by the C++ backend.

mod header;

pub use header::HeaderFile;
