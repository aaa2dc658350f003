//! Reads and parses the secrets file.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::{PARAMS, SecretsResult};

/// Secret names mapped to their values, e.g. `CLIENT_ID` and `CLIENT_SECRET`.
pub type Secrets = HashMap<String, String>;

/// Loads the secrets file named by [`PARAMS`].
///
/// The file is re-read on every call; nothing is cached.
///
/// # Errors
///
/// Returns [`SecretsError::Io`](crate::SecretsError::Io) when the file is
/// missing or unreadable and [`SecretsError::Parse`](crate::SecretsError::Parse)
/// when it is not a JSON object of strings.
pub fn load_secrets() -> SecretsResult<Secrets> {
    PARAMS.load_secrets()
}

/// Loads a secrets file from an explicit path.
///
/// # Errors
///
/// Same as [`load_secrets`].
pub fn load_secrets_from(path: impl AsRef<Path>) -> SecretsResult<Secrets> {
    let path = path.as_ref();
    // The handle is closed before parsing starts.
    let contents = fs::read_to_string(path)?;
    let secrets: Secrets = serde_json::from_str(&contents)?;

    debug!(path = %path.display(), keys = secrets.len(), "loaded secrets");
    Ok(secrets)
}
