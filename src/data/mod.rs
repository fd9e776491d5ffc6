//! Data module - CSV loading and action token extraction

mod loader;
mod processor;

pub use loader::{ActorLoader, LoaderError};
pub use processor::{collect_tokens, split_tokens, ActionColumns, ProcessorError, TOKEN_SEPARATOR};
