//! Resource registry module
//!
//! Declares every resource kind the Float API exposes as one table
//! entry: URL path, identity field, required-on-create fields, and the
//! verbs the service accepts. The generic client operations are driven
//! entirely by this table.

mod registry;

pub use registry::{validate_create, ResourceKind, ResourceSpec};

#[cfg(test)]
mod tests;
