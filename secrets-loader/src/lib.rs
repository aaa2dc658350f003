//! Loads client credentials from a JSON secrets file.
//!
//! The secrets file is a flat JSON object of string values, typically a client
//! identifier and a client secret. Its location comes from the process-wide
//! [`PARAMS`] constant and every call re-reads the file from disk.
//!
//! ```no_run
//! let secrets = secrets_loader::load_secrets()?;
//! let client_id = secrets.get("CLIENT_ID");
//! # Ok::<(), secrets_loader::SecretsError>(())
//! ```

#![warn(missing_docs, clippy::pedantic)]

mod error;
mod loader;
mod params;

/// Error type and result alias for secrets loading.
pub use error::{SecretsError, SecretsResult};
/// Loader entry points and the loaded mapping type.
pub use loader::{Secrets, load_secrets, load_secrets_from};
/// Process-wide loader parameters.
pub use params::{DEFAULT_SECRETS_PATH, PARAMS, Params};
