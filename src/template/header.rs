//! The autogenerated-file header written at the top of every output.

use crate::constants::{AUTOGENERATION_MESSAGE, COMMENT_MARKERS};
use crate::error::{Error, Result};
use crate::ext::PathExt;
use std::io::Write;
use std::path::Path;

/// Returns the comment marker for the extension of `path`.
pub fn comment_marker(path: &Path) -> Result<&'static str> {
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or_default();
    COMMENT_MARKERS
        .iter()
        .find(|(_, extensions)| extensions.contains(&extension))
        .map(|(marker, _)| *marker)
        .ok_or_else(|| Error::UnknownExtensionError { extension: path.dotted_extension() })
}

/// The header line, followed by an empty line.
pub fn header(marker: &str) -> String {
    format!("{marker} {AUTOGENERATION_MESSAGE}\n\n")
}

pub fn write_header<W: Write>(writer: &mut W, marker: &str) -> std::io::Result<()> {
    writer.write_all(header(marker).as_bytes())
}
