//! Entry collection: the ordered list of diary entries and the operations
//! that grow, shrink and replace it.
//!
//! `EntryCollector` owns an `EntryList` together with the `EntryStore` it is
//! persisted to. Every mutation saves the new list synchronously; a failed
//! save is logged and otherwise ignored, so the in-memory list stays the
//! source of truth for the current invocation.

pub mod samples;

use crate::constants::{ACCEPTED_ENTRY_EXTENSIONS, BULK_SEPARATORS};
use crate::errors::{AppResult, EntryError};
use crate::store::EntryStore;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

pub use samples::SAMPLE_ENTRIES;

/// Ordered sequence of entries. Insertion order is the only order; duplicates
/// are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryList(Vec<String>);

impl EntryList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in demo entries.
    pub fn samples() -> Self {
        SAMPLE_ENTRIES.iter().map(|s| s.to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for EntryList {
    fn from(entries: Vec<String>) -> Self {
        Self(entries)
    }
}

impl FromIterator<String> for EntryList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a EntryList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Splits pasted text into entries.
///
/// The separators are tried in fixed precedence order and the first one
/// present in `text` is used for the whole split, even if a later separator
/// would produce more segments. Fragments are trimmed and empty ones dropped.
/// Without any separator the trimmed input is a single entry. Whitespace-only
/// input yields nothing.
///
/// ```
/// use diary_insights::entries::parse_bulk;
///
/// let entries = parse_bulk("Monday was long.\n---\nTuesday was better.");
/// assert_eq!(entries, vec!["Monday was long.", "Tuesday was better."]);
/// ```
pub fn parse_bulk(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    match BULK_SEPARATORS.iter().find(|sep| text.contains(**sep)) {
        Some(separator) => {
            debug!("Splitting bulk text on separator {:?}", separator);
            text.split(separator)
                .map(str::trim)
                .filter(|fragment| !fragment.is_empty())
                .map(str::to_string)
                .collect()
        }
        None => vec![text.trim().to_string()],
    }
}

/// Returns true if `path` has one of the accepted entry file extensions.
pub fn is_accepted_entry_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            ACCEPTED_ENTRY_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
        .unwrap_or(false)
}

/// The entry list bound to the store it is persisted in.
#[derive(Debug)]
pub struct EntryCollector<S: EntryStore> {
    entries: EntryList,
    store: S,
}

impl<S: EntryStore> EntryCollector<S> {
    /// Opens the collector with whatever the store holds.
    ///
    /// A missing slot starts empty. An unreadable or corrupt slot is also
    /// treated as empty; the next mutation overwrites it.
    pub fn open(store: S) -> Self {
        let entries = match store.load() {
            Ok(Some(entries)) => entries,
            Ok(None) => EntryList::new(),
            Err(e) => {
                warn!("Discarding unreadable entry store: {}", e);
                EntryList::new()
            }
        };
        Self { entries, store }
    }

    pub fn entries(&self) -> &EntryList {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Appends one trimmed entry. Returns false, without touching the list,
    /// when the text is blank.
    pub fn add_single(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            debug!("Ignoring blank entry");
            return false;
        }

        self.entries.0.push(trimmed.to_string());
        info!("Added entry #{}", self.entries.len());
        self.persist();
        true
    }

    /// Appends every entry `parse_bulk` finds in `text`. Returns the number added.
    pub fn add_bulk(&mut self, text: &str) -> usize {
        let parsed = parse_bulk(text);
        let added = parsed.len();
        if added == 0 {
            return 0;
        }

        self.entries.0.extend(parsed);
        info!("Added {} entries from bulk text", added);
        self.persist();
        added
    }

    /// Appends the verbatim content of each file, one entry per file, in the
    /// given order.
    ///
    /// All files are read before the list changes, so any failure leaves the
    /// list as it was.
    ///
    /// # Errors
    ///
    /// - `EntryError::UnsupportedFile` for anything but `.txt` / `.md`
    /// - `AppError::Io` if a file cannot be read as UTF-8 text
    pub fn add_from_files<P: AsRef<Path>>(&mut self, paths: &[P]) -> AppResult<usize> {
        let mut contents = Vec::with_capacity(paths.len());
        for path in paths {
            let path = path.as_ref();
            if !is_accepted_entry_file(path) {
                return Err(EntryError::UnsupportedFile {
                    path: path.to_path_buf(),
                }
                .into());
            }
            contents.push(fs::read_to_string(path)?);
        }

        let added = contents.len();
        if added > 0 {
            self.entries.0.extend(contents);
            info!("Added {} entries from files", added);
            self.persist();
        }
        Ok(added)
    }

    /// Removes and returns the entry at `index`.
    ///
    /// # Errors
    ///
    /// `EntryError::IndexOutOfRange` if `index >= len`; the list is unchanged.
    pub fn remove(&mut self, index: usize) -> Result<String, EntryError> {
        let len = self.entries.len();
        if index >= len {
            return Err(EntryError::IndexOutOfRange { index, len });
        }

        let removed = self.entries.0.remove(index);
        info!("Removed entry at index {}", index);
        self.persist();
        Ok(removed)
    }

    /// Empties the list.
    pub fn clear(&mut self) {
        self.entries = EntryList::new();
        info!("Cleared all entries");
        self.persist();
    }

    /// Replaces the list with the built-in sample entries.
    pub fn load_demo(&mut self) {
        self.entries = EntryList::samples();
        info!("Loaded {} demo entries", self.entries.len());
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.entries) {
            warn!("Failed to persist entry list: {}", e);
        }
    }
}

#[cfg(test)]
mod tests;
