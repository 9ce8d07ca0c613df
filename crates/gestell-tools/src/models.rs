//! These models represent the objects passed between the agent, the model
//! provider and the systems that execute tools.
//!
//! Provider wire formats (openai messages/tools) are converted into these
//! internal structs as soon as they are received, see `providers::utils`.
pub mod content;
pub mod message;
pub mod role;
pub mod tool;
