use std::path::{Path, PathBuf};

use crate::error::ExportError;

/// `Prescription_<patient>.<ext>`, whitespace runs in the name collapsed to
/// `_`. A blank name becomes `Patient`.
pub fn export_file_name(patient_name: &str, extension: &str) -> String {
    let words: Vec<&str> = patient_name.split_whitespace().collect();
    let name = if words.is_empty() {
        "Patient".to_string()
    } else {
        words.join("_").replace(['/', '\\'], "_")
    };
    format!("Prescription_{name}.{extension}")
}

/// Write `bytes` to `dir/file_name` via a temp file and rename, so a failed
/// export never leaves a partial file behind.
pub fn write_export(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf, ExportError> {
    if file_name.is_empty() || file_name.contains(['/', '\\']) || file_name.starts_with('.') {
        return Err(ExportError::InvalidFileName(file_name.to_string()));
    }
    std::fs::create_dir_all(dir)?;

    let path = dir.join(file_name);
    let tmp_path = dir.join(format!(".{file_name}.tmp"));
    let written = std::fs::write(&tmp_path, bytes).and_then(|()| std::fs::rename(&tmp_path, &path));
    if let Err(e) = written {
        let _ = std::fs::remove_file(&tmp_path);
        tracing::warn!(path = %path.display(), error = %e, "export failed");
        return Err(e.into());
    }

    tracing::info!(path = %path.display(), bytes = bytes.len(), "export written");
    Ok(path)
}
