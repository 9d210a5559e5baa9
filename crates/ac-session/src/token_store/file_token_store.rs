use crate::token_store::{TokenStore, TokenStoreError, TokenStoreResult};

use ac_core::TokenPair;

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

/// Tokens persisted as a small JSON document:
/// `{ "access_token": "...", "refresh_token": "..." }`.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "session.json".into());
        name.push(format!(".tmp.{}", std::process::id()));
        self.path.with_file_name(name)
    }

    #[cfg(unix)]
    fn restrict_permissions(file: &fs::File, path: &Path) -> TokenStoreResult<()> {
        use std::os::unix::fs::PermissionsExt;

        file.set_permissions(fs::Permissions::from_mode(0o600))
            .map_err(|e| TokenStoreError::file_write(path.to_path_buf(), e))
    }

    #[cfg(not(unix))]
    fn restrict_permissions(_file: &fs::File, _path: &Path) -> TokenStoreResult<()> {
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> TokenStoreResult<Option<TokenPair>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No token file at {:?}", self.path);
                return Ok(None);
            }
            Err(e) => return Err(TokenStoreError::file_read(self.path.clone(), e)),
        };

        let tokens: TokenPair = serde_json::from_str(&contents)
            .map_err(|e| TokenStoreError::corrupted(self.path.clone(), e.to_string()))?;

        if tokens.access_token.is_empty() {
            return Err(TokenStoreError::corrupted(
                self.path.clone(),
                "access_token is empty",
            ));
        }

        Ok(Some(tokens))
    }

    /// Write via temp file + fsync + rename so a crash never leaves half a token file.
    fn save(&self, tokens: &TokenPair) -> TokenStoreResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .map_err(|e| TokenStoreError::dir_creation(parent.to_path_buf(), e))?;
        }

        let temp_path = self.temp_path();
        let json = serde_json::to_string_pretty(tokens)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| TokenStoreError::file_write(temp_path.clone(), e))?;

            Self::restrict_permissions(&file, &temp_path)?;

            file.write_all(json.as_bytes())
                .map_err(|e| TokenStoreError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| TokenStoreError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            TokenStoreError::atomic_rename(temp_path, self.path.clone(), e)
        })?;

        info!("Saved credential tokens to {:?}", self.path);
        Ok(())
    }

    fn clear(&self) -> TokenStoreResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Removed credential tokens at {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(TokenStoreError::file_remove(self.path.clone(), e)),
        }
    }
}
