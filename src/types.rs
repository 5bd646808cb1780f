/*!
 * Core types for the archive data model
 */

/// One named file's content as captured into an archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Archive-relative path, forward-slash separated
    pub name: String,
    /// Raw file content
    pub content: Vec<u8>,
}

/// An ordered collection of named file contents with an optional preamble
///
/// The comment holds whatever bytes precede the first header line; empty
/// means there is none. Entries keep the order they were collected in, and
/// duplicate names are preserved as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Archive {
    /// Preamble bytes before the first entry header
    pub comment: Vec<u8>,
    /// Archived files in collection order
    pub entries: Vec<Entry>,
}
