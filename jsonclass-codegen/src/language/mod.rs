//! Language-specific abstractions.
//!
//! - [`NamingConvention`] - identifier sanitization and derived names
//! - [`TypeMapper`] - rendering [`TypeDescriptor`](crate::TypeDescriptor)s as type syntax

mod naming;
mod traits;

pub use naming::NamingConvention;
pub use traits::TypeMapper;
