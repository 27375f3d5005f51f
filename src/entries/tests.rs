use super::*;
use crate::errors::{AppError, StorageError};
use crate::store::{FileStore, MemoryStore};
use std::fs;
use std::io;
use std::path::PathBuf;
use tempfile::tempdir;

/// A store whose writes always fail.
struct BrokenStore;

impl EntryStore for BrokenStore {
    fn load(&self) -> AppResult<Option<EntryList>> {
        Ok(None)
    }

    fn save(&self, _entries: &EntryList) -> AppResult<()> {
        Err(StorageError::Persist {
            path: PathBuf::from("/nowhere/diary-entries.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        }
        .into())
    }
}

fn collector_with(items: &[&str]) -> EntryCollector<MemoryStore> {
    let list: EntryList = items.iter().map(|s| s.to_string()).collect();
    EntryCollector::open(MemoryStore::with_entries(list))
}

#[test]
fn test_parse_bulk_prefers_first_separator_in_precedence_order() {
    // Contains both "\n\n---\n\n" and "\n\n\n"; the former wins even though
    // splitting on "\n\n\n" would give more pieces.
    let text = "one\n\n\ntwo\n\n---\n\nthree";
    assert_eq!(parse_bulk(text), vec!["one\n\n\ntwo", "three"]);
}

#[test]
fn test_parse_bulk_single_dash_separator() {
    let text = "Monday\n---\nTuesday\n---\nWednesday";
    assert_eq!(parse_bulk(text), vec!["Monday", "Tuesday", "Wednesday"]);
}

#[test]
fn test_parse_bulk_blank_line_separator() {
    let text = "first entry\n\n\nsecond entry\n\n\n\n\nthird entry";
    assert_eq!(
        parse_bulk(text),
        vec!["first entry", "second entry", "third entry"]
    );
}

#[test]
fn test_parse_bulk_equals_separator() {
    let text = "  alpha ====beta====  ==== gamma";
    assert_eq!(parse_bulk(text), vec!["alpha", "beta", "gamma"]);
}

#[test]
fn test_parse_bulk_drops_empty_fragments() {
    let text = "\n---\n\n---\nonly one\n---\n   \n---\n";
    assert_eq!(parse_bulk(text), vec!["only one"]);
}

#[test]
fn test_parse_bulk_without_separator_is_one_trimmed_entry() {
    let text = "  Just a single thought.\nWith two lines.  \n";
    assert_eq!(
        parse_bulk(text),
        vec!["Just a single thought.\nWith two lines."]
    );
}

#[test]
fn test_parse_bulk_blank_input_yields_nothing() {
    assert!(parse_bulk("").is_empty());
    assert!(parse_bulk("   \n\t ").is_empty());
}

#[test]
fn test_accepted_entry_files() {
    assert!(is_accepted_entry_file(Path::new("/tmp/day.txt")));
    assert!(is_accepted_entry_file(Path::new("/tmp/day.MD")));
    assert!(!is_accepted_entry_file(Path::new("/tmp/day.pdf")));
    assert!(!is_accepted_entry_file(Path::new("/tmp/README")));
}

#[test]
fn test_add_single_trims_and_persists() {
    let store = MemoryStore::new();
    let mut collector = EntryCollector::open(&store);

    assert!(collector.add_single("  Slept well.  \n"));
    assert_eq!(collector.entries().as_slice(), ["Slept well."]);
    assert_eq!(store.snapshot().unwrap().as_slice(), ["Slept well."]);
}

#[test]
fn test_add_single_rejects_blank_text() {
    let store = MemoryStore::new();
    let mut collector = EntryCollector::open(&store);

    assert!(!collector.add_single(" \n\t"));
    assert!(collector.is_empty());
    assert!(store.snapshot().is_none(), "blank input must not persist");
}

#[test]
fn test_add_single_allows_duplicates() {
    let mut collector = collector_with(&["same"]);
    assert!(collector.add_single("same"));
    assert_eq!(collector.entries().as_slice(), ["same", "same"]);
}

#[test]
fn test_add_bulk_appends_after_existing() {
    let mut collector = collector_with(&["existing"]);
    let added = collector.add_bulk("new one\n---\nnew two");

    assert_eq!(added, 2);
    assert_eq!(
        collector.entries().as_slice(),
        ["existing", "new one", "new two"]
    );
}

#[test]
fn test_add_from_files_reads_verbatim_in_order() {
    let temp_dir = tempdir().unwrap();
    let first = temp_dir.path().join("first.txt");
    let second = temp_dir.path().join("second.md");
    fs::write(&first, "  padded text\n").unwrap();
    fs::write(&second, "# Heading\n\nBody").unwrap();

    let mut collector = collector_with(&["earlier"]);
    let added = collector.add_from_files(&[&first, &second]).unwrap();

    assert_eq!(added, 2);
    assert_eq!(
        collector.entries().as_slice(),
        ["earlier", "  padded text\n", "# Heading\n\nBody"]
    );
}

#[test]
fn test_add_from_files_is_all_or_nothing() {
    let temp_dir = tempdir().unwrap();
    let good = temp_dir.path().join("good.txt");
    let missing = temp_dir.path().join("missing.txt");
    fs::write(&good, "fine").unwrap();

    let mut collector = collector_with(&[]);
    let result = collector.add_from_files(&[&good, &missing]);

    assert!(matches!(result, Err(AppError::Io(_))));
    assert!(collector.is_empty());
}

#[test]
fn test_add_from_files_rejects_other_extensions() {
    let temp_dir = tempdir().unwrap();
    let image = temp_dir.path().join("photo.png");
    fs::write(&image, "not really a png").unwrap();

    let mut collector = collector_with(&[]);
    let result = collector.add_from_files(&[&image]);

    assert!(matches!(
        result,
        Err(AppError::Entry(EntryError::UnsupportedFile { .. }))
    ));
}

#[test]
fn test_remove_keeps_relative_order() {
    let mut collector = collector_with(&["a", "b", "c", "d"]);

    let removed = collector.remove(1).unwrap();

    assert_eq!(removed, "b");
    assert_eq!(collector.entries().as_slice(), ["a", "c", "d"]);
}

#[test]
fn test_remove_each_position() {
    let original = ["a", "b", "c"];
    for i in 0..original.len() {
        let mut collector = collector_with(&original);
        collector.remove(i).unwrap();

        let expected: Vec<&str> = original
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, s)| *s)
            .collect();
        assert_eq!(collector.len(), original.len() - 1);
        assert_eq!(collector.entries().as_slice(), expected.as_slice());
    }
}

#[test]
fn test_remove_out_of_range_is_an_error() {
    let store = MemoryStore::with_entries(EntryList::from(vec!["only".to_string()]));
    let mut collector = EntryCollector::open(&store);

    let err = collector.remove(1).unwrap_err();

    assert!(matches!(err, EntryError::IndexOutOfRange { index: 1, len: 1 }));
    assert_eq!(collector.entries().as_slice(), ["only"]);
}

#[test]
fn test_clear_and_load_demo_replace_wholesale() {
    let store = MemoryStore::new();
    let mut collector = EntryCollector::open(&store);
    collector.add_single("mine");

    collector.load_demo();
    assert_eq!(collector.len(), 10);
    assert_eq!(collector.entries().as_slice()[0], SAMPLE_ENTRIES[0]);
    assert_eq!(store.snapshot().unwrap().len(), 10);

    collector.clear();
    assert!(collector.is_empty());
    assert!(store.snapshot().unwrap().is_empty());
}

#[test]
fn test_collector_survives_reopen() {
    let temp_dir = tempdir().unwrap();
    {
        let mut collector = EntryCollector::open(FileStore::new(temp_dir.path()));
        collector.add_single("persisted");
        collector.add_bulk("x\n---\ny");
    }

    let reopened = EntryCollector::open(FileStore::new(temp_dir.path()));
    assert_eq!(reopened.entries().as_slice(), ["persisted", "x", "y"]);
}

#[test]
fn test_corrupt_store_resets_to_empty() {
    let temp_dir = tempdir().unwrap();
    let store = FileStore::new(temp_dir.path());
    fs::write(store.path(), "[\"unterminated").unwrap();

    let mut collector = EntryCollector::open(store);
    assert!(collector.is_empty());

    collector.add_single("fresh start");
    let reopened = EntryCollector::open(FileStore::new(temp_dir.path()));
    assert_eq!(reopened.entries().as_slice(), ["fresh start"]);
}

#[test]
fn test_failed_save_keeps_in_memory_list() {
    let mut collector = EntryCollector::open(BrokenStore);

    assert!(collector.add_single("kept anyway"));
    assert_eq!(collector.entries().as_slice(), ["kept anyway"]);
}
