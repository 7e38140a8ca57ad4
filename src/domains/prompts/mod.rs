//! Prompts domain module.
//!
//! Prompts are template messages that guide a model through multi-step SEO
//! workflows built on the server's tools.
//!
//! - `registry.rs` - central prompt registration
//! - `service.rs` - prompt listing and rendering
//! - `templates.rs` - the template type and its `{{variable}}` renderer

mod error;
mod registry;
mod service;
pub mod templates;

pub use error::PromptError;
pub use registry::get_all_prompts;
pub use service::PromptService;
pub use templates::PromptTemplate;
