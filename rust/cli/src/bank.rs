//! The human's chip balance, kept in a small JSON file between sessions.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::CliError;
use crate::io_utils::ensure_parent_dir;

/// Balance used when nothing (or zero) is on file.
pub const DEFAULT_CHIPS: u32 = 1_000;

/// Below this a new hand is not dealt.
pub const LOW_CHIPS: u32 = 50;

/// Balance after `felt chips --reset`.
pub const RESET_CHIPS: u32 = 800;

#[derive(Debug, Serialize, Deserialize)]
struct BankFile {
    chips: u32,
}

#[derive(Debug)]
pub struct ChipBank {
    path: PathBuf,
    chips: u32,
}

impl ChipBank {
    /// Loads the balance from `path`. A missing file or a zero balance reads as
    /// [`DEFAULT_CHIPS`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CliError> {
        let path = path.as_ref().to_path_buf();
        let saved = match fs::read_to_string(&path) {
            Ok(s) => {
                let file: BankFile = serde_json::from_str(&s).map_err(|e| {
                    CliError::Config(format!("corrupt chip file {}: {}", path.display(), e))
                })?;
                file.chips
            }
            Err(e) if e.kind() == ErrorKind::NotFound => 0,
            Err(e) => return Err(e.into()),
        };
        let chips = if saved == 0 { DEFAULT_CHIPS } else { saved };
        tracing::debug!(path = %path.display(), chips, "chip balance loaded");
        Ok(Self { path, chips })
    }

    pub fn balance(&self) -> u32 {
        self.chips
    }

    pub fn set_balance(&mut self, chips: u32) {
        self.chips = chips;
    }

    pub fn is_low(&self) -> bool {
        self.chips < LOW_CHIPS
    }

    pub fn reset(&mut self) {
        self.chips = RESET_CHIPS;
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self) -> Result<(), CliError> {
        ensure_parent_dir(&self.path)?;
        let body = serde_json::to_string_pretty(&BankFile { chips: self.chips })
            .map_err(std::io::Error::other)?;
        fs::write(&self.path, body)?;
        tracing::debug!(path = %self.path.display(), chips = self.chips, "chip balance saved");
        Ok(())
    }
}
