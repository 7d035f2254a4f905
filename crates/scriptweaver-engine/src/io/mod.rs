//! Input acquisition and output persistence.

use std::fs;
use std::path::{Path, PathBuf};

use encoding_rs::{EUC_JP, Encoding, SHIFT_JIS, UTF_8};

/// Word-processor text extraction is not compiled into this build.
pub const DOCX_AVAILABLE: bool = false;

const UTF8_BOM: char = '\u{feff}';

/// Tried in order; the first that decodes without errors wins. `SHIFT_JIS`
/// is the Windows-31J (cp932) superset.
pub fn source_encodings() -> [&'static Encoding; 3] {
    [UTF_8, SHIFT_JIS, EUC_JP]
}

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(String),
    #[error("No backend available for {0} files")]
    BackendUnavailable(SourceFormat),
    #[error("File is not in a supported text encoding: {0}")]
    InvalidEncoding(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    PlainText,
    Docx,
}

impl SourceFormat {
    pub fn extension(self) -> &'static str {
        match self {
            SourceFormat::PlainText => "txt",
            SourceFormat::Docx => "docx",
        }
    }

    pub fn is_available(self) -> bool {
        match self {
            SourceFormat::PlainText => true,
            SourceFormat::Docx => DOCX_AVAILABLE,
        }
    }

    /// Format from the path's extension, case-insensitively.
    pub fn from_path(path: &Path) -> Result<Self, IoError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "txt" => Ok(SourceFormat::PlainText),
            "docx" => Ok(SourceFormat::Docx),
            _ => Err(IoError::UnsupportedFormat(ext)),
        }
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, ".{}", self.extension())
    }
}

/// Extensions this build can read, without the dot.
pub fn supported_extensions() -> Vec<&'static str> {
    [SourceFormat::PlainText, SourceFormat::Docx]
        .into_iter()
        .filter(|f| f.is_available())
        .map(SourceFormat::extension)
        .collect()
}

pub fn is_supported(path: &Path) -> bool {
    SourceFormat::from_path(path).is_ok_and(SourceFormat::is_available)
}

/// Read a scenario file as one string with a leading BOM removed
pub fn read_source(path: &Path) -> Result<String, IoError> {
    let format = SourceFormat::from_path(path)?;
    if !format.is_available() {
        return Err(IoError::BackendUnavailable(format));
    }
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }

    let bytes = fs::read(path)?;
    let text = decode(&bytes).ok_or_else(|| IoError::InvalidEncoding(path.to_path_buf()))?;
    Ok(match text.strip_prefix(UTF8_BOM) {
        Some(rest) => rest.to_string(),
        None => text,
    })
}

fn decode(bytes: &[u8]) -> Option<String> {
    source_encodings().into_iter().find_map(|encoding| {
        let text = encoding.decode_without_bom_handling_and_without_replacement(bytes)?;
        if encoding != UTF_8 {
            log::debug!("decoded input as {}", encoding.name());
        }
        Some(text.into_owned())
    })
}

/// Write rendered output, creating parent directories as needed
pub fn write_output(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
