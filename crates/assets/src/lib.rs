//! Asset plumbing for the inspector: kinds, drop payloads, metadata loaders.
//!
//! Assets are addressed by virtual paths (`//Textures/brick.png`) that the
//! `AssetLibrary` resolves against its root directory. Decoding beyond
//! metadata is the engine's job; the inspector only needs sizes, channel
//! counts and script function names.

mod kind;
mod library;
mod payload;
mod script;

pub use kind::AssetKind;
pub use library::{AssetLibrary, AssetLoader, FontInfo, SoundInfo, TextureInfo, mip_count};
pub use payload::{DragPayload, PayloadTag};
pub use script::{DEFAULT_SCRIPT, ScriptInfo, scan_script};

/// Errors from asset operations.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("asset not found: {0}")]
    NotFound(String),
    #[error("{path} is not a {kind} file")]
    WrongKind { path: String, kind: AssetKind },
    #[error("drop payload tagged {found:?}, expected {expected:?}")]
    WrongPayload { expected: PayloadTag, found: String },
    #[error("drop payload does not hold a UTF-8 path")]
    MalformedPayload,
}

pub fn crate_info() -> &'static str {
    "strata-assets v0.1.0"
}
