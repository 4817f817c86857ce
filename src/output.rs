use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use crate::errors::ChefError;
use crate::models::ChannelNode;

/// Writes the channel tree as pretty JSON to `path`, or to stdout when `None`.
///
/// File output goes through a temp file in the target directory, so an
/// interrupted run never leaves a truncated tree behind.
pub fn write_channel(channel: &ChannelNode, path: Option<&Path>) -> Result<(), ChefError> {
    let json = serde_json::to_string_pretty(channel)?;

    let Some(path) = path else {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(json.as_bytes())?;
        stdout.write_all(b"\n")?;
        return Ok(());
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;
    file.persist(path).map_err(|e| e.error)?;

    tracing::info!(path = %path.display(), "Wrote channel tree");
    Ok(())
}
