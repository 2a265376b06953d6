//! Text-to-speech playback
//!
//! Playback is synchronous per request: the engine spawns the configured
//! speech program and waits for it to exit. No queue, no cancellation.

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::{Error, Result};

/// Speech playback engine
#[async_trait]
pub trait SpeechEngine: Send + Sync {
    /// Speak `text`, returning once playback has finished
    async fn speak(&self, text: &str) -> Result<()>;
}

/// Engine backed by a local speech program (espeak, say, ...)
pub struct CommandSpeechEngine {
    program: String,
}

impl CommandSpeechEngine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Engine using the platform's usual speech binary
    pub fn system_default() -> Self {
        #[cfg(target_os = "macos")]
        let program = "say";
        #[cfg(not(target_os = "macos"))]
        let program = "espeak";

        Self::new(program)
    }
}

#[async_trait]
impl SpeechEngine for CommandSpeechEngine {
    async fn speak(&self, text: &str) -> Result<()> {
        log::debug!("speaking {} chars via {}", text.len(), self.program);

        let status = Command::new(&self.program)
            .arg(text)
            .status()
            .await
            .map_err(|e| Error::Speech(format!("failed to launch {}: {e}", self.program)))?;

        if !status.success() {
            return Err(Error::Speech(format!(
                "{} exited with {status}",
                self.program
            )));
        }

        Ok(())
    }
}
