//! Static note table and activation planning
//!
//! The note table is the whole data model: an ordered, immutable mapping
//! from a single-character chord identifier to the audio clip that plays it.
//! Activation planning resolves an identifier to an on-disk clip path before
//! the audio subsystem is touched, so the decision logic stays testable
//! without an output device.

use std::fmt;
use std::path::{Path, PathBuf};

/// The five chords of the board, in presentation order.
const DEFAULT_NOTES: &[(char, &str)] = &[
    ('A', "a_major.wav"),
    ('C', "c_major.wav"),
    ('D', "d_major.wav"),
    ('E', "e_major.wav"),
    ('G', "g_major.wav"),
];

/// Ordered, immutable mapping from note identifier to audio filename.
///
/// Defined at process start and never mutated; declaration order is the
/// order buttons appear on screen.
#[derive(Debug, Clone)]
pub struct NoteTable {
    entries: &'static [(char, &'static str)],
}

impl Default for NoteTable {
    fn default() -> Self {
        Self {
            entries: DEFAULT_NOTES,
        }
    }
}

impl NoteTable {
    /// Note identifiers in presentation order
    pub fn ids(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }

    /// Number of notes on the board
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Audio filename for a note identifier
    pub fn filename(&self, id: char) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(note, _)| *note == id)
            .map(|(_, file)| *file)
    }

    /// Case-fold a raw keyboard character to a bound note identifier
    pub fn note_for_key(&self, c: char) -> Option<char> {
        let folded = c.to_ascii_uppercase();
        self.ids().find(|id| *id == folded)
    }

    /// Join a note's filename with the sound directory
    pub fn resolve(&self, id: char, sound_dir: &Path) -> Option<PathBuf> {
        self.filename(id).map(|file| sound_dir.join(file))
    }
}

/// Errors surfaced to the user when an activation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivationError {
    /// The resolved clip path does not exist on disk
    MissingFile(PathBuf),
    /// The audio subsystem rejected the clip or is unavailable
    Playback(String),
}

impl fmt::Display for ActivationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivationError::MissingFile(path) => {
                write!(f, "Sound file '{}' not found.", path.display())
            }
            ActivationError::Playback(e) => write!(f, "Error playing sound: {}", e),
        }
    }
}

impl std::error::Error for ActivationError {}

/// What a note activation should do, decided before touching audio output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Play the clip at this path
    Play(PathBuf),
    /// Surface this error to the user; no playback request is made
    Fail(ActivationError),
}

/// Plan the activation of a note.
///
/// Returns `None` for identifiers not in the table (unbound input is
/// ignored, not an error). A bound note either resolves to an existing
/// file or fails with the offending path; a missing file is never
/// silently skipped.
pub fn plan(table: &NoteTable, sound_dir: &Path, note: char) -> Option<Activation> {
    let path = table.resolve(note, sound_dir)?;
    if path.exists() {
        Some(Activation::Play(path))
    } else {
        Some(Activation::Fail(ActivationError::MissingFile(path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// Temp directory unique to one test, cleaned up on drop
    struct SoundDir(PathBuf);

    impl SoundDir {
        fn new(tag: &str) -> Self {
            let dir = std::env::temp_dir().join(format!("chordboard-test-{}", tag));
            fs::create_dir_all(&dir).unwrap();
            Self(dir)
        }

        fn touch(&self, name: &str) {
            fs::write(self.0.join(name), b"").unwrap();
        }

        fn path(&self) -> &Path {
            &self.0
        }
    }

    impl Drop for SoundDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn table_order_matches_declaration() {
        let table = NoteTable::default();
        let ids: Vec<char> = table.ids().collect();
        assert_eq!(ids, vec!['A', 'C', 'D', 'E', 'G']);
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn filename_lookup() {
        let table = NoteTable::default();
        assert_eq!(table.filename('A'), Some("a_major.wav"));
        assert_eq!(table.filename('G'), Some("g_major.wav"));
        assert_eq!(table.filename('B'), None);
    }

    #[test]
    fn key_folding_is_case_insensitive() {
        let table = NoteTable::default();
        assert_eq!(table.note_for_key('a'), Some('A'));
        assert_eq!(table.note_for_key('A'), Some('A'));
        assert_eq!(table.note_for_key('g'), Some('G'));
    }

    #[test]
    fn unbound_keys_match_nothing() {
        let table = NoteTable::default();
        assert_eq!(table.note_for_key('b'), None);
        assert_eq!(table.note_for_key('z'), None);
        assert_eq!(table.note_for_key('1'), None);
        assert_eq!(table.note_for_key(' '), None);
    }

    #[test]
    fn resolve_joins_sound_dir() {
        let table = NoteTable::default();
        let path = table.resolve('C', Path::new("/tmp/sounds")).unwrap();
        assert_eq!(path, Path::new("/tmp/sounds").join("c_major.wav"));
    }

    #[test]
    fn plan_plays_existing_file() {
        let dir = SoundDir::new("plan-existing");
        dir.touch("e_major.wav");

        let table = NoteTable::default();
        let plan = plan(&table, dir.path(), 'E').unwrap();
        assert_eq!(plan, Activation::Play(dir.path().join("e_major.wav")));
    }

    #[test]
    fn plan_fails_with_offending_path_when_file_missing() {
        let dir = SoundDir::new("plan-missing");

        let table = NoteTable::default();
        let plan = plan(&table, dir.path(), 'D').unwrap();
        let expected = dir.path().join("d_major.wav");
        assert_eq!(
            plan,
            Activation::Fail(ActivationError::MissingFile(expected.clone()))
        );

        // The dialog text must name the missing path
        if let Activation::Fail(error) = plan {
            assert!(error.to_string().contains(&expected.display().to_string()));
        }
    }

    #[test]
    fn plan_ignores_unbound_note() {
        let dir = SoundDir::new("plan-unbound");
        let table = NoteTable::default();
        assert_eq!(plan(&table, dir.path(), 'B'), None);
    }

    #[test]
    fn repeated_plans_are_independent() {
        let dir = SoundDir::new("plan-repeat");
        dir.touch("a_major.wav");

        let table = NoteTable::default();
        let first = plan(&table, dir.path(), 'A').unwrap();
        let second = plan(&table, dir.path(), 'A').unwrap();
        assert_eq!(first, second);
        assert!(matches!(first, Activation::Play(_)));
    }
}
