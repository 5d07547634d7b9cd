//! Speech output for assistant replies.
//!
//! Synthesis sits outside the conversation core: the system calls it once per reply and a
//! failure only means the reply goes out without audio.

pub mod http;
pub mod pcm;

pub use http::HttpSpeechSynthesizer;

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("Speech transport error: {0}")]
    Transport(String),

    #[error("Speech service returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Audio encoding error: {0}")]
    Encoding(String),

    #[error("Audio I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A rendered reply on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioAsset {
    pub path: PathBuf,
    /// Seconds since the Unix epoch when the file was written.
    pub generated_at: u64,
}

impl AudioAsset {
    /// Path with a `?t=` suffix so clients re-fetch a file that is rewritten in place.
    pub fn url(&self) -> String {
        format!("{}?t={}", self.path.display(), self.generated_at)
    }
}

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str) -> Result<AudioAsset, SpeechError>;
}
