//! Document type registry: display ids, highlighter ids, MIME types and
//! filename detection rules.

/// Ordered table backing every lookup.
pub mod table;

pub use table::TYPE_TABLE;

/// MIME sent when a document type cannot be resolved.
pub const DEFAULT_MIME: &str = "text/plain";

/// Highlighter used when no entry matches a document.
pub const DEFAULT_HIGHLIGHTER: &str = "text";

/// Display id assigned to new documents whose name matches nothing.
pub const DEFAULT_DISPLAY_ID: &str = "Text";

/// Filename rule used to auto-detect a document type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection {
    /// Name ends with `.` followed by one of these extensions (case-sensitive).
    Extensions(&'static [&'static str]),
    /// Name ends with this fixed file name, e.g. `Dockerfile`.
    NameSuffix(&'static str),
}

impl Detection {
    /// Return `true` when `file_name` satisfies this rule.
    pub fn matches(&self, file_name: &str) -> bool {
        match self {
            Detection::Extensions(extensions) => extensions.iter().any(|extension| {
                file_name
                    .strip_suffix(extension)
                    .map(|stem| stem.ends_with('.'))
                    .unwrap_or(false)
            }),
            Detection::NameSuffix(name) => file_name.ends_with(name),
        }
    }
}

/// One known document type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeEntry {
    /// Unique, human-facing key (`"C++"`, `"Batch File"`).
    pub display_id: &'static str,
    /// Grammar key passed to the syntax highlighter.
    pub highlighter_id: &'static str,
    pub detection: Detection,
    /// MIME used on upload. Not unique across entries.
    pub mime: &'static str,
}

/// Anything that carries a declared type and a file name.
///
/// For stored documents the declared type is a MIME string; for documents
/// still being authored it is whatever the user picked.
pub trait Classifiable {
    fn declared_type(&self) -> &str;
    fn file_name(&self) -> &str;
}

/// Find an entry by its exact, case-sensitive display id.
pub fn lookup_by_display_id(display_id: &str) -> Option<&'static TypeEntry> {
    TYPE_TABLE
        .iter()
        .find(|entry| entry.display_id == display_id)
}

/// Find the first entry whose MIME equals `mime` exactly.
pub fn lookup_by_mime(mime: &str) -> Option<&'static TypeEntry> {
    TYPE_TABLE.iter().find(|entry| entry.mime == mime)
}

/// Find the first entry whose detection rule matches `file_name`.
///
/// # Returns
/// The earliest matching entry in table order, or `None`.
pub fn lookup_by_filename(file_name: &str) -> Option<&'static TypeEntry> {
    TYPE_TABLE
        .iter()
        .find(|entry| entry.detection.matches(file_name))
}

/// Resolve a document's type, trusting its declared MIME over its name.
///
/// An exact MIME match is returned first so that a type chosen explicitly
/// by the user is never re-derived from the file name. Only when no entry
/// carries the declared MIME does the file name decide.
pub fn lookup_by_document<D: Classifiable + ?Sized>(document: &D) -> Option<&'static TypeEntry> {
    lookup_by_mime(document.declared_type()).or_else(|| lookup_by_filename(document.file_name()))
}

/// MIME to send for a document whose type is `type_name`.
///
/// `type_name` is normally a display id. A value that is already the MIME of
/// a known entry passes through unchanged; anything else falls back to
/// [`DEFAULT_MIME`].
pub fn resolve_mime_for_upload(type_name: &str) -> &'static str {
    lookup_by_display_id(type_name)
        .or_else(|| lookup_by_mime(type_name))
        .map(|entry| entry.mime)
        .unwrap_or(DEFAULT_MIME)
}

/// Display id whose detection rule matches `file_name`.
pub fn display_id_for_filename(file_name: &str) -> Option<&'static str> {
    lookup_by_filename(file_name).map(|entry| entry.display_id)
}

/// Display id for a document, requiring MIME and name to agree.
///
/// Several entries share a MIME (`C` and `C++` both use `text/x-c`), so a MIME
/// hit only counts when the entry's rule also matches the name. Otherwise the
/// name alone decides.
pub fn display_id_for_document<D: Classifiable + ?Sized>(document: &D) -> Option<&'static str> {
    let declared = document.declared_type();
    let file_name = document.file_name();
    TYPE_TABLE
        .iter()
        .find(|entry| entry.mime == declared && entry.detection.matches(file_name))
        .map(|entry| entry.display_id)
        .or_else(|| display_id_for_filename(file_name))
}

/// Highlighter id for rendering a document.
pub fn highlighter_for<D: Classifiable + ?Sized>(document: &D) -> &'static str {
    lookup_by_document(document)
        .map(|entry| entry.highlighter_id)
        .unwrap_or(DEFAULT_HIGHLIGHTER)
}

/// All display ids, either in table order or sorted for pickers.
pub fn list_display_ids(sorted: bool) -> Vec<&'static str> {
    let mut ids: Vec<&'static str> = TYPE_TABLE.iter().map(|entry| entry.display_id).collect();
    if sorted {
        ids.sort_unstable();
    }
    ids
}
