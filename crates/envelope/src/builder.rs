use crate::envelope::{LineEnding, ResultEnvelope};
use crate::notes::{MessageLog, NoteKind};
use crate::status::Status;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Initial settings of a [`ResultEnvelope`].
///
/// Every field has a default, so a partial JSON document is enough to
/// describe the envelopes a service starts from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitParams {
    /// Initial status. `None` starts the envelope as `EXCEPTION`.
    pub status: Option<Status>,
    pub prefix: String,
    pub message: String,
    pub initial_focus_id: String,
    /// Verb used by `event_id`. Falls back to the operation name.
    pub event_verb: String,
    pub operation: String,
    pub use_operation_in_message: bool,
    /// Forces a line terminator instead of the platform's.
    pub line_ending: Option<LineEnding>,
}

#[derive(Debug, Default)]
pub struct EnvelopeBuilder {
    params: InitParams,
}

impl EnvelopeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces everything set so far.
    pub fn params(mut self, params: InitParams) -> Self {
        self.params = params;
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.params.status = Some(status);
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.params.prefix = prefix.into();
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.params.message = message.into();
        self
    }

    pub fn focus_control(mut self, id: impl Into<String>) -> Self {
        self.params.initial_focus_id = id.into();
        self
    }

    pub fn event_verb(mut self, verb: impl Into<String>) -> Self {
        self.params.event_verb = verb.into();
        self
    }

    /// Name of the producing function. Anything up to the last `::` or `.`
    /// is dropped and the rest lower-cased.
    pub fn operation(mut self, name: impl AsRef<str>) -> Self {
        self.params.operation = normalize_operation(name.as_ref());
        self
    }

    pub fn use_operation_in_message(mut self, on: bool) -> Self {
        self.params.use_operation_in_message = on;
        self
    }

    pub fn line_ending(mut self, line_ending: LineEnding) -> Self {
        self.params.line_ending = Some(line_ending);
        self
    }

    pub fn build(self) -> ResultEnvelope {
        ResultEnvelope::from_params(self.params)
    }
}

impl ResultEnvelope {
    pub fn builder() -> EnvelopeBuilder {
        EnvelopeBuilder::new()
    }

    pub fn from_params(params: InitParams) -> Self {
        let InitParams {
            status,
            prefix,
            message,
            initial_focus_id,
            event_verb,
            operation,
            use_operation_in_message,
            line_ending,
        } = params;

        let operation = normalize_operation(&operation);
        let event_verb = if event_verb.is_empty() {
            operation.clone()
        } else {
            event_verb
        };

        let mut envelope = ResultEnvelope {
            messages: Vec::new(),
            status: status.unwrap_or_default(),
            operation,
            task_id: None,
            worker_id: None,
            focus_control: None,
            page: None,
            page_count: None,
            page_size: None,
            tag: None,
            prefix: String::new(),
            log: MessageLog::new(),
            event_verb,
            line_ending: line_ending.unwrap_or_else(LineEnding::native),
            use_operation_in_message,
            initial_focus: String::new(),
        };
        envelope.set_prefix(prefix);
        envelope.set_focus_control(initial_focus_id, false);

        if !message.is_empty() {
            let kind = match status {
                Some(status) if status.is_success_family() => NoteKind::Info,
                Some(_) => NoteKind::Error,
                None => NoteKind::Application,
            };
            let message = envelope.with_operation(message);
            envelope.log.add(kind, message);
            envelope.refresh_messages();
        }

        debug!(
            operation = %envelope.operation,
            status = %envelope.status,
            "result envelope initialized"
        );
        envelope
    }
}

/// Keeps the last path segment of a function name, lower-cased.
pub fn normalize_operation(name: &str) -> String {
    let name = name.trim();
    let tail = name.rsplit("::").next().unwrap_or(name);
    let tail = tail.rsplit('.').next().unwrap_or(tail);
    tail.to_lowercase()
}

#[doc(hidden)]
pub fn enclosing_function(path: &'static str) -> &'static str {
    let mut path = path.strip_suffix("::__here").unwrap_or(path);
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    path
}

/// Path of the function this macro is expanded in, resolved at compile
/// time. Closures are skipped, so inside one it names the enclosing function.
#[macro_export]
macro_rules! operation_name {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::enclosing_function(__type_name_of(__here))
    }};
}

/// A builder whose operation is the enclosing function's name.
#[macro_export]
macro_rules! result_envelope {
    () => {
        $crate::ResultEnvelope::builder().operation($crate::operation_name!())
    };
}
