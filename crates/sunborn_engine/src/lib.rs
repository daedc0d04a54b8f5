//! Sunborn engine: allowlist loading and effect execution.
mod decode;
mod engine;
mod fetch;
mod loader;
mod types;

pub use decode::{decode_list_text, DecodeError};
pub use engine::{EngineCommander, EngineConfig, EngineHandle};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use loader::{load_allowlists, AllowlistSources};
pub use types::{
    CheckId, EngineEvent, FailureKind, FetchError, FetchOutput, ListSource, LoadError,
};
