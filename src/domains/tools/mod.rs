//! Tools domain: the data-driven gateway to the upstream API.
//!
//! The registry holds one [`ToolSpec`] row per endpoint, the dispatcher
//! executes any row generically, and the compilers (filters, ordering) and
//! response shaper handle the argument conventions shared by all endpoints.

pub mod catalog;
pub mod dispatch;
pub mod filters;
pub mod ordering;
pub mod registry;
pub mod response;
pub mod schema;

mod error;
mod router;

pub use catalog::Module;
pub use dispatch::ToolContext;
pub use error::ToolError;
pub use registry::{LocationMode, ToolRegistry, ToolSpec};
pub use response::ResponseMode;
pub use router::build_tool_router;
