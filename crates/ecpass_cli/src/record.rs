//! Password record file output.
//!
//! The record holds both passwords, so it is created owner-read/write only
//! on Unix and its permissions are reset if the file already existed.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use tracing::info;

/// Permission bits applied to record files on Unix.
pub const RECORD_MODE: u32 = 0o600;

/// Format the two-line password record.
///
/// # Examples
/// ```
/// use ecpass_cli::record::format_record;
///
/// assert_eq!(
///     format_record("abc", "]!?"),
///     "Memorable password: abc\nStrong password: ]!?\n"
/// );
/// ```
pub fn format_record(memorable: &str, strong: &str) -> String {
    format!(
        "Memorable password: {}\nStrong password: {}\n",
        memorable, strong
    )
}

/// Write the record to `path`, truncating any previous content.
pub fn write_record(path: &Path, memorable: &str, strong: &str) -> std::io::Result<()> {
    let mut file = open_private(path)?;
    file.write_all(format_record(memorable, strong).as_bytes())?;
    file.flush()?;
    info!(path = %path.display(), "password record saved");
    Ok(())
}

#[cfg(unix)]
fn open_private(path: &Path) -> std::io::Result<File> {
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(RECORD_MODE)
        .open(path)?;
    // mode() only applies on creation
    file.set_permissions(std::fs::Permissions::from_mode(RECORD_MODE))?;
    Ok(file)
}

#[cfg(not(unix))]
fn open_private(path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}
