pub mod chat;
pub mod prompt;
pub mod search;
pub mod version;

use anyhow::{Context, Result};
use gestell_tools::GestellConfig;

use crate::GestellArgs;

/// Resolve the Gestell configuration from flags, then the environment
pub fn gestell_config(args: &GestellArgs) -> Result<GestellConfig> {
    GestellConfig::new(args.api_key.clone(), args.collection_id.clone())
        .context("Please set both GESTELL_API_KEY and GESTELL_COLLECTION_ID.")
}
