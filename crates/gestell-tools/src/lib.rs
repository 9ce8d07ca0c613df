pub mod agent;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod prompt_template;
pub mod providers;
pub mod systems;
pub mod tools;

pub use client::GestellClient;
pub use config::GestellConfig;
pub use systems::gestell::GestellSystem;
pub use tools::prompt::GestellPromptTool;
pub use tools::search::GestellSearchTool;
pub use tools::GestellTool;
