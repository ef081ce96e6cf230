//! File persistence for snapshots.
//!
//! Two formats are supported: the tagged JSON document written through a
//! [`SnapshotRegistry`], and a compact bincode encoding of the raw
//! [`Memento`]. Both go through [`Originator::restore`] on load, so the
//! same null and wrong-type checks apply.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::DocumentFormat;
use crate::error::PersistError;
use crate::memento::{Memento, Originator};
use crate::snapshot::SnapshotRegistry;

/// Timestamp format used in autosave file names.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

/// Read a whole text file.
pub fn read_text_file(path: impl AsRef<Path>) -> Result<String, PersistError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| {
        tracing::warn!(path = %path.display(), %source, "read failed");
        PersistError::Io {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Write a whole text file, replacing any existing contents.
pub fn write_text_file(path: impl AsRef<Path>, contents: &str) -> Result<(), PersistError> {
    write_bytes(path.as_ref(), contents.as_bytes())
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<(), PersistError> {
    fs::write(path, bytes).map_err(|source| {
        tracing::warn!(path = %path.display(), %source, "write failed");
        PersistError::Io {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Save a value as a tagged document.
pub fn save_document<T: Originator>(
    registry: &SnapshotRegistry,
    value: &T,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), PersistError> {
    let path = path.as_ref();
    let text = registry.to_string(value, pretty)?;
    write_text_file(path, &text)?;
    tracing::info!(path = %path.display(), bytes = text.len(), "saved document");
    Ok(())
}

/// Load a value from a tagged document.
pub fn load_document<T: Originator>(
    registry: &SnapshotRegistry,
    path: impl AsRef<Path>,
) -> Result<T, PersistError> {
    let path = path.as_ref();
    let text = read_text_file(path)?;
    let value = registry.from_str(&text)?;
    tracing::info!(path = %path.display(), "loaded document");
    Ok(value)
}

/// Save a value's memento in bincode.
pub fn save_binary<T: Originator>(value: &T, path: impl AsRef<Path>) -> Result<(), PersistError> {
    let path = path.as_ref();
    let bytes = bincode::serialize(&value.snapshot())?;
    write_bytes(path, &bytes)?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "saved binary snapshot");
    Ok(())
}

/// Load a value from a bincode memento.
pub fn load_binary<T: Originator>(path: impl AsRef<Path>) -> Result<T, PersistError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let memento: Memento = bincode::deserialize(&bytes).map_err(|err| {
        tracing::warn!(path = %path.display(), %err, "corrupt binary snapshot");
        err
    })?;
    let value = T::restore(Some(&memento))?;
    tracing::info!(path = %path.display(), kind = %memento.kind(), "loaded binary snapshot");
    Ok(value)
}

/// Save in the given format.
pub fn save<T: Originator>(
    registry: &SnapshotRegistry,
    value: &T,
    path: impl AsRef<Path>,
    format: DocumentFormat,
    pretty: bool,
) -> Result<(), PersistError> {
    match format {
        DocumentFormat::Tagged => save_document(registry, value, path, pretty),
        DocumentFormat::Binary => save_binary(value, path),
    }
}

/// Load in the given format.
pub fn load<T: Originator>(
    registry: &SnapshotRegistry,
    path: impl AsRef<Path>,
    format: DocumentFormat,
) -> Result<T, PersistError> {
    match format {
        DocumentFormat::Tagged => load_document(registry, path),
        DocumentFormat::Binary => load_binary(path),
    }
}

/// Current local time as `yyyy-MM-dd-HH-mm-ss`.
#[must_use]
pub fn now_str() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Path for a new autosave: `<dir>/<prefix>-<timestamp>.<ext>`.
#[must_use]
pub fn autosave_path(dir: impl AsRef<Path>, prefix: &str, format: DocumentFormat) -> PathBuf {
    dir.as_ref()
        .join(format!("{prefix}-{}.{}", now_str(), format.extension()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{FilledCard, Function, PlaceholderCard};
    use crate::error::{DecodeError, RestoreError};
    use crate::map::ApplicationState;
    use crate::memento::MementoKind;

    fn state() -> ApplicationState {
        let functions = [
            Function::new(1, "Absentation"),
            Function::new(2, "Interdiction"),
            Function::new(3, "Violation"),
        ];
        let mut state = ApplicationState::from_functions("Tale", &functions);
        state.place_from_deck("Interdiction", 1).unwrap();
        state
    }

    #[test]
    fn test_text_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        write_text_file(&path, "once upon a time").unwrap();
        assert_eq!(read_text_file(&path).unwrap(), "once upon a time");
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        let err = read_text_file(&path).unwrap_err();
        match err {
            PersistError::Io { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn test_document_save_load() {
        let registry = SnapshotRegistry::standard();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.json");

        let original = state();
        save_document(&registry, &original, &path, true).unwrap();
        let loaded: ApplicationState = load_document(&registry, &path).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_binary_save_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.bin");

        let original = state();
        save_binary(&original, &path).unwrap();
        let loaded: ApplicationState = load_binary(&path).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_binary_wrong_kind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("card.bin");
        save_binary(&FilledCard::new(Function::new(1, "Absentation")), &path).unwrap();

        let err = load_binary::<PlaceholderCard>(&path).unwrap_err();
        assert!(matches!(
            err,
            PersistError::Decode(DecodeError::Restore(RestoreError::WrongType {
                expected: MementoKind::PlaceholderCard,
                found: MementoKind::FilledCard,
            }))
        ));
    }

    #[test]
    fn test_corrupt_binary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("junk.bin");
        fs::write(&path, [0xff, 0xff, 0xff, 0xff, 0xff]).unwrap();
        assert!(matches!(
            load_binary::<ApplicationState>(&path),
            Err(PersistError::Binary(_))
        ));
    }

    #[test]
    fn test_corrupt_document() {
        let registry = SnapshotRegistry::standard();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("junk.json");
        write_text_file(&path, "<xml/>").unwrap();
        assert!(matches!(
            load_document::<ApplicationState>(&registry, &path),
            Err(PersistError::Decode(DecodeError::Malformed(_)))
        ));
    }

    #[test]
    fn test_autosave_path_shape() {
        let path = autosave_path("/tmp/maps", "storymap", DocumentFormat::Tagged);
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("storymap-"));
        assert!(name.ends_with(".json"));
        // storymap- + yyyy-MM-dd-HH-mm-ss + .json
        assert_eq!(name.len(), "storymap-".len() + 19 + ".json".len());
        assert_eq!(path.parent().unwrap(), Path::new("/tmp/maps"));
    }

    #[test]
    fn test_now_str_format() {
        let now = now_str();
        assert_eq!(now.len(), 19);
        assert_eq!(now.matches('-').count(), 5);
        assert!(chrono::NaiveDateTime::parse_from_str(&now, TIMESTAMP_FORMAT).is_ok());
    }
}
