//! Prompts domain module.
//!
//! Prompts are reusable CRM workflow templates that can be customized with
//! arguments and handed to the calling model.
//!
//! - `definitions/` - individual prompt definitions (one file per prompt)
//! - `registry.rs` - central prompt registration
//! - `service.rs` - prompt listing and rendering
//! - `templates.rs` - template rendering engine

pub mod definitions;
mod error;
mod registry;
mod service;
pub mod templates;

pub use definitions::PromptDefinition;
pub use error::PromptError;
pub use registry::{get_all_prompts, prompt_names};
pub use service::PromptService;
pub use templates::PromptTemplate;
