//! The txtar archive text format
//!
//! An archive is an optional comment followed by a sequence of files, each
//! introduced by a header line of the exact shape `-- name --`:
//!
//! ```text
//! -- hello.txt --
//! Hello, World!
//! -- src/main.rs --
//! fn main() {}
//! ```
//!
//! Serialization appends a newline to content that does not end in one, so
//! the next header always starts at the beginning of a line. Content is not
//! escaped: a content line that itself looks like a header will be read
//! back as a boundary. That ambiguity is part of the format and is kept for
//! compatibility with archives produced by other tools.

use crate::error::{PackError, Result};
use crate::types::{Archive, Entry};

const MARKER_PREFIX: &[u8] = b"-- ";
const MARKER_SUFFIX: &[u8] = b" --";

/// Serialize an archive into txtar bytes
///
/// The comment is emitted verbatim, then each entry as a header line
/// followed by its content. Pure in-memory transform; never fails.
pub fn format(archive: &Archive) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&archive.comment);
    for entry in &archive.entries {
        out.extend_from_slice(MARKER_PREFIX);
        out.extend_from_slice(entry.name.as_bytes());
        out.extend_from_slice(MARKER_SUFFIX);
        out.push(b'\n');
        out.extend_from_slice(&entry.content);
        if !entry.content.is_empty() && !entry.content.ends_with(b"\n") {
            out.push(b'\n');
        }
    }
    out
}

/// Parse txtar bytes back into an archive
///
/// Everything before the first header line is the comment; each header
/// opens an entry whose content runs up to the next header or end of
/// input. An archive with no header at all is valid. The final line may
/// omit its trailing newline. Content already ending in a newline round
/// trips byte-exactly through [`format`].
pub fn parse(data: &[u8]) -> Result<Archive> {
    let mut archive = Archive::default();
    let mut open: Option<String> = None;
    let mut region_start = 0;
    let mut offset = 0;

    for line in data.split_inclusive(|&b| b == b'\n') {
        let line_start = offset;
        offset += line.len();

        let raw = match header_name(line) {
            Some(raw) => raw,
            None => continue,
        };
        let name = std::str::from_utf8(raw).map_err(|_| {
            PackError::Format(format!("header name at byte {line_start} is not valid UTF-8"))
        })?;
        if name.is_empty() {
            return Err(PackError::Format(format!(
                "header with empty name at byte {line_start}"
            )));
        }

        let region = data[region_start..line_start].to_vec();
        match open.take() {
            None => archive.comment = region,
            Some(done) => archive.entries.push(Entry {
                name: done,
                content: region,
            }),
        }
        open = Some(name.to_string());
        region_start = offset;
    }

    let region = data[region_start..].to_vec();
    match open {
        None => archive.comment = region,
        Some(done) => archive.entries.push(Entry {
            name: done,
            content: region,
        }),
    }
    Ok(archive)
}

/// The bytes between the header affixes, or `None` if `line` is content
///
/// The trailing newline is optional so a header on the last line of input
/// is still recognized. The affixes must not overlap, so the shortest line
/// taken as a header is the six-byte (empty-name) `--  --`.
fn header_name(line: &[u8]) -> Option<&[u8]> {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    if line.len() < MARKER_PREFIX.len() + MARKER_SUFFIX.len() {
        return None;
    }
    if !line.starts_with(MARKER_PREFIX) || !line.ends_with(MARKER_SUFFIX) {
        return None;
    }
    Some(&line[MARKER_PREFIX.len()..line.len() - MARKER_SUFFIX.len()])
}
