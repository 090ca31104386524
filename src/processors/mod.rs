pub mod key_resolver;
pub mod pipeline;

pub use key_resolver::KeyResolver;
pub use pipeline::{LoadPipeline, LoadSummary};
