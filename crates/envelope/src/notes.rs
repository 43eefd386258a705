use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteKind {
    Info,
    Warning,
    Error,
    Success,
    /// Plain application message with no severity attached.
    Application,
}

/// A single severity-tagged message held by a [`MessageLog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub kind: NoteKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub prefix: String,
}

impl Note {
    pub fn new(kind: NoteKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            prefix: String::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoteKind::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoteKind::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoteKind::Error, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoteKind::Success, message)
    }

    pub fn application(message: impl Into<String>) -> Self {
        Self::new(NoteKind::Application, message)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.message)
    }
}

/// Ordered store of notes.
///
/// Notes added through [`MessageLog::add`] pick up the log's current prefix;
/// notes brought in with [`MessageLog::append`] keep whatever prefix they
/// were created with, so merged notes still show where they came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageLog {
    pub prefix: String,
    notes: Vec<Note>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            notes: Vec::new(),
        }
    }

    pub fn add(&mut self, kind: NoteKind, message: impl Into<String>) -> &Note {
        let note = Note::new(kind, message).with_prefix(self.prefix.clone());
        self.append(note)
    }

    pub fn append(&mut self, note: Note) -> &Note {
        self.notes.push(note);
        &self.notes[self.notes.len() - 1]
    }

    pub fn add_info(&mut self, message: impl Into<String>) -> &Note {
        self.add(NoteKind::Info, message)
    }

    pub fn add_warning(&mut self, message: impl Into<String>) -> &Note {
        self.add(NoteKind::Warning, message)
    }

    pub fn add_error(&mut self, message: impl Into<String>) -> &Note {
        self.add(NoteKind::Error, message)
    }

    pub fn add_success(&mut self, message: impl Into<String>) -> &Note {
        self.add(NoteKind::Success, message)
    }

    pub fn add_app_msg(&mut self, message: impl Into<String>) -> &Note {
        self.add(NoteKind::Application, message)
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn count_of(&self, kind: NoteKind) -> usize {
        self.notes.iter().filter(|n| n.kind == kind).count()
    }

    /// Each note in its display form, in insertion order.
    pub fn rendered(&self) -> Vec<String> {
        self.notes.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for MessageLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, note) in self.notes.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{note}")?;
        }
        Ok(())
    }
}
