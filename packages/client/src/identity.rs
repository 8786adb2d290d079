//! Persistent sender identity.
//!
//! The relay has no accounts; a client is whoever its `sender` string
//! says it is. The generated name is persisted so the same identity is
//! reused across restarts, which also keeps echo suppression working
//! after a reconnect.

use std::fs;
use std::io;
use std::path::Path;

use uuid::Uuid;

/// Load the sender identity from `path`, generating and persisting a new
/// one on first run.
///
/// Generated identities look like `User-3f9a1c`.
pub fn load_or_create(path: &Path) -> io::Result<String> {
    if let Ok(existing) = fs::read_to_string(path) {
        let existing = existing.trim();
        if !existing.is_empty() {
            return Ok(existing.to_string());
        }
    }

    let identity = generate();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, &identity)?;
    tracing::info!("Generated new sender identity '{}'", identity);

    Ok(identity)
}

fn generate() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("User-{}", &id[..6])
}
