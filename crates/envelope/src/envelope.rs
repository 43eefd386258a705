use crate::notes::{MessageLog, Note, NoteKind};
use crate::status::Status;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// Line terminator used by [`ResultEnvelope::messages_to_string`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn native() -> Self {
        if cfg!(windows) {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

impl Default for LineEnding {
    fn default() -> Self {
        Self::native()
    }
}

/// Outcome of a business-logic call: a status, the messages gathered along
/// the way and some correlation metadata.
///
/// `messages` is always the rendered form of the internal [`MessageLog`];
/// every mutator re-renders it, so it is only exposed read-only. An envelope
/// read off the wire gets its messages back as application notes, so it can
/// keep accumulating like a live one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "WireEnvelope")]
pub struct ResultEnvelope {
    pub(crate) messages: Vec<String>,
    pub status: Status,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub(crate) operation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) focus_control: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub(crate) prefix: String,

    #[serde(skip)]
    pub(crate) log: MessageLog,
    #[serde(skip)]
    pub(crate) event_verb: String,
    #[serde(skip)]
    pub(crate) line_ending: LineEnding,
    #[serde(skip)]
    pub(crate) use_operation_in_message: bool,
    #[serde(skip)]
    pub(crate) initial_focus: String,
}

impl Default for ResultEnvelope {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<ResultEnvelope> for ResultEnvelope {
    fn as_ref(&self) -> &ResultEnvelope {
        self
    }
}

impl ResultEnvelope {
    /// An envelope with every option at its default: `EXCEPTION`, no
    /// messages, no operation.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn set_status(&mut self, status: Status) -> &mut Self {
        self.status = status;
        self
    }

    /// Sets the final status and hands the envelope back, for
    /// `return envelope.finish(Status::Ok)`.
    pub fn finish(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }

    /// True when the status is `EXCEPTION`.
    pub fn is_error(&self) -> bool {
        self.status == Status::Exception
    }

    pub fn is_valid(&self) -> bool {
        self.status == Status::Valid
    }

    pub fn is_invalid(&self) -> bool {
        self.status == Status::Invalid
    }

    pub fn is_yes(&self) -> bool {
        self.status == Status::Yes
    }

    pub fn is_no(&self) -> bool {
        self.status == Status::No
    }

    pub fn add_info(&mut self, message: impl Into<String>) -> &mut Self {
        self.push(NoteKind::Info, message.into(), true)
    }

    pub fn add_warning(&mut self, message: impl Into<String>) -> &mut Self {
        self.push(NoteKind::Warning, message.into(), true)
    }

    pub fn add_error(&mut self, message: impl Into<String>) -> &mut Self {
        self.push(NoteKind::Error, message.into(), true)
    }

    pub fn add_success(&mut self, message: impl Into<String>) -> &mut Self {
        self.push(NoteKind::Success, message.into(), true)
    }

    /// Adds an application message. Never carries the operation name.
    pub fn add_raw_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.push(NoteKind::Application, message.into(), false)
    }

    /// Adds the display form of `err` as an error message.
    pub fn add_err(&mut self, err: impl fmt::Display) -> &mut Self {
        self.add_error(err.to_string())
    }

    /// Adds `err` when there is one, otherwise `alt_message` as an error
    /// message. Does nothing when both are absent.
    pub fn add_err_with_alt<E: fmt::Display>(
        &mut self,
        err: Option<E>,
        alt_message: impl Into<String>,
    ) -> &mut Self {
        if let Some(err) = err {
            return self.add_err(err);
        }
        let alt_message = alt_message.into();
        if alt_message.is_empty() {
            return self;
        }
        self.add_error(alt_message)
    }

    /// Copies every note of `other` into this envelope.
    pub fn merge(&mut self, other: impl AsRef<ResultEnvelope>) -> &mut Self {
        self.copy_notes(other.as_ref());
        self.refresh_messages();
        self
    }

    /// Copies the notes of `other` when it is neither `OK` nor `VALID`.
    /// Otherwise adds `alt_message` as a single error note, without the
    /// operation name. An empty `alt_message` leaves this envelope as is.
    pub fn merge_with_alt(
        &mut self,
        other: impl AsRef<ResultEnvelope>,
        alt_message: impl Into<String>,
    ) -> &mut Self {
        let other = other.as_ref();
        if !(other.is_ok() || other.is_valid()) {
            return self.merge(other);
        }
        let alt_message = alt_message.into();
        if alt_message.is_empty() {
            return self;
        }
        let note = Note::error(alt_message).with_prefix(self.log.prefix.clone());
        self.log.append(note);
        self.refresh_messages();
        self
    }

    pub fn append_err(
        &mut self,
        other: impl AsRef<ResultEnvelope>,
        err: impl fmt::Display,
    ) -> &mut Self {
        self.copy_notes(other.as_ref());
        self.add_err(err)
    }

    pub fn append_error(
        &mut self,
        other: impl AsRef<ResultEnvelope>,
        message: impl Into<String>,
    ) -> &mut Self {
        self.copy_notes(other.as_ref());
        self.add_error(message)
    }

    pub fn append_info(
        &mut self,
        other: impl AsRef<ResultEnvelope>,
        message: impl Into<String>,
    ) -> &mut Self {
        self.copy_notes(other.as_ref());
        self.add_info(message)
    }

    pub fn append_warning(
        &mut self,
        other: impl AsRef<ResultEnvelope>,
        message: impl Into<String>,
    ) -> &mut Self {
        self.copy_notes(other.as_ref());
        self.add_warning(message)
    }

    /// Reports how many rows a statement touched.
    pub fn rows_affected_info(&mut self, rows: u64) -> &mut Self {
        if rows != 0 {
            self.add_info(format!("{rows} rows affected"))
        } else {
            self.add_info("No rows affected")
        }
    }

    /// Sets the control to focus when an issue is encountered.
    ///
    /// With `append_only` the id is joined to the initial control as
    /// `initial_id`, leaving the initial control untouched so that
    /// [`reset_focus_control`](Self::reset_focus_control) can go back to it.
    /// Without it, `id` becomes both the current and the initial control.
    pub fn set_focus_control(&mut self, id: impl Into<String>, append_only: bool) -> &mut Self {
        let id = id.into();
        if append_only {
            self.focus_control = Some(format!("{}_{}", self.initial_focus, id));
            return self;
        }
        self.focus_control = non_empty(&id);
        self.initial_focus = id;
        self
    }

    pub fn reset_focus_control(&mut self) -> &mut Self {
        self.focus_control = non_empty(&self.initial_focus);
        self
    }

    pub fn focus_control(&self) -> Option<&str> {
        self.focus_control.as_deref()
    }

    pub fn initial_focus_control(&self) -> &str {
        &self.initial_focus
    }

    /// Past tense of the event verb, `"unknown"` when there is none.
    ///
    /// Appends `d` to verbs ending in `e` and `ed` to everything else, so
    /// irregular verbs come out wrong (`run` gives `runned`). Consumers key
    /// on these labels, keep it that way.
    pub fn event_id(&self) -> String {
        let verb = &self.event_verb;
        if verb.is_empty() {
            return "unknown".to_string();
        }
        if verb.ends_with('e') {
            format!("{verb}d")
        } else {
            format!("{verb}ed")
        }
    }

    pub fn set_event_verb(&mut self, verb: impl Into<String>) -> &mut Self {
        self.event_verb = verb.into();
        self
    }

    pub fn event_verb(&self) -> &str {
        &self.event_verb
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// All messages as one string, one per line.
    ///
    /// Uses the cached messages when there are any, which covers envelopes
    /// deserialized from a payload; otherwise renders the log directly.
    pub fn messages_to_string(&self) -> String {
        if !self.messages.is_empty() {
            return self.messages.join(self.line_ending.as_str());
        }
        self.log.to_string()
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Sets the prefix rendered in front of every message added from now on.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        let prefix = prefix.into();
        self.log.prefix = prefix.clone();
        self.prefix = prefix;
        self
    }

    pub fn uses_operation_in_message(&self) -> bool {
        self.use_operation_in_message
    }

    pub fn set_task_id(&mut self, task_id: impl Into<String>) -> &mut Self {
        self.task_id = Some(task_id.into());
        self
    }

    pub fn set_worker_id(&mut self, worker_id: impl Into<String>) -> &mut Self {
        self.worker_id = Some(worker_id.into());
        self
    }

    pub fn set_pagination(&mut self, page: u64, page_count: u64, page_size: u64) -> &mut Self {
        self.page = Some(page);
        self.page_count = Some(page_count);
        self.page_size = Some(page_size);
        self
    }

    pub fn set_tag(&mut self, tag: impl Into<serde_json::Value>) -> &mut Self {
        self.tag = Some(tag.into());
        self
    }

    pub(crate) fn with_operation(&self, message: String) -> String {
        if self.use_operation_in_message && !self.operation.is_empty() {
            format!(" {}: {}", self.operation, message)
        } else {
            message
        }
    }

    pub(crate) fn refresh_messages(&mut self) {
        self.messages = self.log.rendered();
    }

    fn push(&mut self, kind: NoteKind, message: String, tag_operation: bool) -> &mut Self {
        let message = if tag_operation {
            self.with_operation(message)
        } else {
            message
        };
        let note = self.log.add(kind, message);
        trace!(kind = ?note.kind, message = %note, "note added");
        self.refresh_messages();
        self
    }

    fn copy_notes(&mut self, other: &ResultEnvelope) {
        for note in other.log.notes() {
            self.log.append(note.clone());
        }
        debug!(
            copied = other.log.len(),
            from = %other.operation,
            into = %self.operation,
            "merged notes"
        );
    }
}

/// Serialized form of [`ResultEnvelope`].
#[derive(Deserialize)]
struct WireEnvelope {
    #[serde(default)]
    messages: Vec<String>,
    status: Status,
    #[serde(default)]
    operation: String,
    #[serde(default)]
    task_id: Option<String>,
    #[serde(default)]
    worker_id: Option<String>,
    #[serde(default)]
    focus_control: Option<String>,
    #[serde(default)]
    page: Option<u64>,
    #[serde(default)]
    page_count: Option<u64>,
    #[serde(default)]
    page_size: Option<u64>,
    #[serde(default)]
    tag: Option<serde_json::Value>,
    #[serde(default)]
    prefix: String,
}

impl From<WireEnvelope> for ResultEnvelope {
    fn from(wire: WireEnvelope) -> Self {
        // messages are already rendered, so the notes carry no prefix of their own
        let mut log = MessageLog::with_prefix(wire.prefix.clone());
        for message in wire.messages {
            log.append(Note::application(message));
        }
        let mut envelope = ResultEnvelope {
            messages: Vec::new(),
            status: wire.status,
            event_verb: wire.operation.clone(),
            operation: wire.operation,
            task_id: wire.task_id,
            worker_id: wire.worker_id,
            initial_focus: wire.focus_control.clone().unwrap_or_default(),
            focus_control: wire.focus_control,
            page: wire.page,
            page_count: wire.page_count,
            page_size: wire.page_size,
            tag: wire.tag,
            prefix: wire.prefix,
            log,
            line_ending: LineEnding::native(),
            use_operation_in_message: false,
        };
        envelope.refresh_messages();
        envelope
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
