//! File-backed token store.

use directories::ProjectDirs;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::debug;
use vebra_types::{Token, TokenEncodingError};

use crate::{Result, StoreError, TokenStore};

/// Stores the token as one base64 string in a file.
///
/// Writes are serialised within the process, so concurrent saves from
/// several requests leave the file holding one of them intact. Each save
/// replaces the file in one rename, so a load sees either the previous
/// token or the new one.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileTokenStore {
    /// Creates a store that keeps the token at `path`.
    ///
    /// Nothing is touched on disk until the first save.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the default token file location.
    ///
    /// Uses the `directories` crate to find the platform data directory:
    /// - Linux: `~/.local/share/vebra/token`
    /// - macOS: `~/Library/Application Support/vebra/token`
    /// - Windows: `C:\Users\<User>\AppData\Roaming\vebra\token`
    ///
    /// Falls back to `~/.vebra/token`.
    #[must_use]
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("", "", "vebra")
            .map_or_else(dirs_fallback, |proj_dirs| proj_dirs.data_dir().to_path_buf())
            .join("token")
    }

    /// Creates a store at [`Self::default_path`].
    #[must_use]
    pub fn with_default_path() -> Self {
        Self::new(Self::default_path())
    }

    /// Returns the token file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        self.path.with_extension("tmp")
    }

    fn ensure_parent(&self) -> Result<()> {
        let Some(parent) = self.path.parent() else {
            return Err(StoreError::NoDataDir);
        };
        if parent.as_os_str().is_empty() || parent.exists() {
            return Ok(());
        }
        fs::create_dir_all(parent).map_err(|e| StoreError::CreateDir {
            path: parent.to_path_buf(),
            source: e,
        })
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Token> {
        let encoded = match fs::read_to_string(&self.path) {
            Ok(encoded) => encoded,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(StoreError::NoToken),
            Err(e) => {
                return Err(StoreError::ReadFile {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        match Token::from_encoded(&encoded) {
            Ok(token) => Ok(token),
            Err(TokenEncodingError::Empty) => Err(StoreError::NoToken),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, token: &Token) -> Result<()> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.ensure_parent()?;

        // Readers never see a truncated file: write aside, then swap in.
        let staged = self.staging_path();
        fs::write(&staged, token.encoded()).map_err(|e| StoreError::WriteFile {
            path: staged.clone(),
            source: e,
        })?;
        if let Err(e) = fs::rename(&staged, &self.path) {
            let _ = fs::remove_file(&staged);
            return Err(StoreError::WriteFile {
                path: self.path.clone(),
                source: e,
            });
        }
        debug!(path = %self.path.display(), "Saved token");
        Ok(())
    }
}

fn dirs_fallback() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".vebra")
}
