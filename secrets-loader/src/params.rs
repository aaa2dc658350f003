//! Process-wide loader parameters.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::SecretsResult;
use crate::loader::{Secrets, load_secrets_from};

/// Path of the secrets file used by [`load_secrets`](crate::load_secrets).
///
/// Despite the name the file holds a JSON object, not dotenv syntax.
pub const DEFAULT_SECRETS_PATH: &str = ".env";

/// Parameters used by [`load_secrets`](crate::load_secrets).
pub const PARAMS: Params = Params { secrets_path: None };

/// Where the secrets file lives.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Params {
    // `None` resolves to `DEFAULT_SECRETS_PATH`.
    secrets_path: Option<PathBuf>,
}

impl Params {
    /// Creates parameters pointing at `secrets_path`.
    #[must_use]
    pub fn new(secrets_path: impl Into<PathBuf>) -> Self {
        Self {
            secrets_path: Some(secrets_path.into()),
        }
    }

    /// Returns the path of the secrets file.
    #[must_use]
    pub fn secrets_path(&self) -> &Path {
        self.secrets_path
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_SECRETS_PATH))
    }

    /// Reads and parses the secrets file at [`Self::secrets_path`].
    ///
    /// # Errors
    ///
    /// See [`load_secrets_from`](crate::load_secrets_from).
    pub fn load_secrets(&self) -> SecretsResult<Secrets> {
        load_secrets_from(self.secrets_path())
    }
}

impl Default for Params {
    fn default() -> Self {
        PARAMS
    }
}

impl PartialEq for Params {
    fn eq(&self, other: &Self) -> bool {
        self.secrets_path() == other.secrets_path()
    }
}

impl Eq for Params {}
