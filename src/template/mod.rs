//! Declarative resource graph handed to the provisioning engine.

pub mod graph;
pub mod naming;
pub mod resources;
pub mod value;

pub use graph::{Output, ResourceGraph, Template};
pub use value::CfnValue;
