//! Plain-text domain list export.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::debug;
use tempfile::{Builder, NamedTempFile};

use crate::error_handling::ExtractionError;
use crate::extract::DomainSet;

/// Writes the domains to `output`, one per line, sorted ascending.
///
/// The list is written to a temporary file next to `output` and renamed over
/// it once complete, so a failed run never leaves a truncated file behind and
/// an existing file is only replaced on success. A replaced file keeps its
/// permissions; a new one gets the usual umask-filtered defaults.
///
/// # Errors
///
/// Returns `ExtractionError::OutputWrite` if the temporary file cannot be
/// created, written or persisted (missing directory, permissions, disk full,
/// `output` being a directory).
pub fn write_domains(domains: &DomainSet, output: &Path) -> Result<(), ExtractionError> {
    let write_err = |source: io::Error| ExtractionError::OutputWrite {
        path: output.to_path_buf(),
        source,
    };

    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = temp_file_in(dir).map_err(write_err)?;

    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        for domain in domains.iter() {
            writeln!(writer, "{domain}").map_err(write_err)?;
        }
        writer.flush().map_err(write_err)?;
    }
    tmp.as_file().sync_all().map_err(write_err)?;

    if let Ok(meta) = fs::metadata(output) {
        if meta.is_file() {
            tmp.as_file()
                .set_permissions(meta.permissions())
                .map_err(write_err)?;
        }
    }
    tmp.persist(output).map_err(|e| write_err(e.error))?;
    debug!("Wrote {} domains to {}", domains.len(), output.display());
    Ok(())
}

/// Creates the staging file with the permissions a plain `File::create` would
/// get, rather than the owner-only default of `NamedTempFile`.
fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(".domains").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}
