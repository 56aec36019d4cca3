pub mod directive;
pub mod op;
pub mod optab;
