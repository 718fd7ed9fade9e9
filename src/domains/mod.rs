//! Domain modules: the tool catalog and the prompt library.

pub mod prompts;
pub mod tools;
