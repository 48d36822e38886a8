use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tag_reader_error::ReaderResult;
use tag_reader_sdk::{extract_snapshot, HostIntent, IntentSnapshot, IntentSource, RawIntent};
use tracing::{debug, warn};

/// Intent source backed by a JSON file standing in for the host activity.
///
/// The file is read on every call. A missing, empty or `null` file means
/// the host has no current intent.
#[derive(Debug, Clone)]
pub struct FileIntentSource {
    path: PathBuf,
}

impl FileIntentSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> ReaderResult<Option<RawIntent>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No intent file");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };
        if content.trim().is_empty() {
            return Ok(None);
        }
        Ok(serde_json::from_str::<Option<RawIntent>>(&content)?)
    }
}

impl IntentSource for FileIntentSource {
    fn read_snapshot(&self) -> IntentSnapshot {
        match self.load() {
            Ok(intent) => extract_snapshot(intent.as_ref().map(|i| i as &dyn HostIntent)),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "Unreadable intent file, treating as absent");
                IntentSnapshot::absent()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tag_reader_sdk::{IntentAction, ACTION_TAG_DISCOVERED};

    #[test]
    fn missing_file_is_absent_intent() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileIntentSource::new(dir.path().join("intent.json"));
        assert_eq!(source.load().unwrap(), None);
        assert_eq!(source.read_snapshot(), IntentSnapshot::absent());
    }

    #[test]
    fn empty_and_null_files_are_absent_intent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("intent.json");
        let source = FileIntentSource::new(&path);

        fs::write(&path, "  \n").unwrap();
        assert_eq!(source.read_snapshot(), IntentSnapshot::absent());

        fs::write(&path, "null").unwrap();
        assert_eq!(source.read_snapshot(), IntentSnapshot::absent());
    }

    #[test]
    fn file_is_reread_on_every_call() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("intent.json");
        let source = FileIntentSource::new(&path);

        fs::write(
            &path,
            format!(r#"{{"action":"{ACTION_TAG_DISCOVERED}","tagId":[4,163]}}"#),
        )
        .unwrap();
        let snapshot = source.read_snapshot();
        assert_eq!(snapshot.action, Some(IntentAction::TagDiscovered));
        assert_eq!(
            snapshot.tag_identifier.map(|id| id.to_hex()),
            Some("04A3".to_string())
        );

        fs::write(&path, r#"{"action":"android.intent.action.MAIN"}"#).unwrap();
        let snapshot = source.read_snapshot();
        assert!(!snapshot.has_tag_extra);
        assert_eq!(
            snapshot.action,
            Some(IntentAction::Other("android.intent.action.MAIN".into()))
        );
    }

    #[test]
    fn malformed_file_errors_on_load_but_reads_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("intent.json");
        fs::write(&path, "{not json").unwrap();
        let source = FileIntentSource::new(&path);
        assert!(source.load().is_err());
        assert_eq!(source.read_snapshot(), IntentSnapshot::absent());
    }
}
