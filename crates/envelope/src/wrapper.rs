use crate::envelope::ResultEnvelope;
use crate::status::Status;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A [`ResultEnvelope`] that also carries a payload.
///
/// The envelope fields are flattened next to `data` on the wire. Mutators
/// delegate to the envelope and never touch the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    #[serde(flatten)]
    pub envelope: ResultEnvelope,
    pub data: T,
}

impl<T> DataEnvelope<T> {
    pub fn new(envelope: ResultEnvelope, data: T) -> Self {
        Self { envelope, data }
    }

    /// Wraps `data` in a fresh `OK` envelope.
    pub fn from_data(data: T) -> Self {
        ResultEnvelope::builder()
            .status(Status::Ok)
            .build()
            .with_data(data)
    }

    pub fn envelope(&self) -> &ResultEnvelope {
        &self.envelope
    }

    pub fn envelope_mut(&mut self) -> &mut ResultEnvelope {
        &mut self.envelope
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    pub fn into_parts(self) -> (ResultEnvelope, T) {
        (self.envelope, self.data)
    }

    pub fn into_data(self) -> T {
        self.data
    }

    /// Swaps the payload, keeping status and messages.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> DataEnvelope<U> {
        DataEnvelope {
            envelope: self.envelope,
            data: f(self.data),
        }
    }

    pub fn set_status(&mut self, status: Status) -> &mut Self {
        self.envelope.set_status(status);
        self
    }

    pub fn finish(mut self, status: Status) -> Self {
        self.envelope.set_status(status);
        self
    }

    pub fn add_info(&mut self, message: impl Into<String>) -> &mut Self {
        self.envelope.add_info(message);
        self
    }

    pub fn add_warning(&mut self, message: impl Into<String>) -> &mut Self {
        self.envelope.add_warning(message);
        self
    }

    pub fn add_error(&mut self, message: impl Into<String>) -> &mut Self {
        self.envelope.add_error(message);
        self
    }

    pub fn add_success(&mut self, message: impl Into<String>) -> &mut Self {
        self.envelope.add_success(message);
        self
    }

    pub fn add_raw_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.envelope.add_raw_message(message);
        self
    }

    pub fn add_err(&mut self, err: impl fmt::Display) -> &mut Self {
        self.envelope.add_err(err);
        self
    }

    pub fn add_err_with_alt<E: fmt::Display>(
        &mut self,
        err: Option<E>,
        alt_message: impl Into<String>,
    ) -> &mut Self {
        self.envelope.add_err_with_alt(err, alt_message);
        self
    }

    pub fn merge(&mut self, other: impl AsRef<ResultEnvelope>) -> &mut Self {
        self.envelope.merge(other);
        self
    }

    pub fn merge_with_alt(
        &mut self,
        other: impl AsRef<ResultEnvelope>,
        alt_message: impl Into<String>,
    ) -> &mut Self {
        self.envelope.merge_with_alt(other, alt_message);
        self
    }

    pub fn append_err(
        &mut self,
        other: impl AsRef<ResultEnvelope>,
        err: impl fmt::Display,
    ) -> &mut Self {
        self.envelope.append_err(other, err);
        self
    }

    pub fn append_error(
        &mut self,
        other: impl AsRef<ResultEnvelope>,
        message: impl Into<String>,
    ) -> &mut Self {
        self.envelope.append_error(other, message);
        self
    }

    pub fn append_info(
        &mut self,
        other: impl AsRef<ResultEnvelope>,
        message: impl Into<String>,
    ) -> &mut Self {
        self.envelope.append_info(other, message);
        self
    }

    pub fn append_warning(
        &mut self,
        other: impl AsRef<ResultEnvelope>,
        message: impl Into<String>,
    ) -> &mut Self {
        self.envelope.append_warning(other, message);
        self
    }

    pub fn set_focus_control(&mut self, id: impl Into<String>, append_only: bool) -> &mut Self {
        self.envelope.set_focus_control(id, append_only);
        self
    }

    pub fn reset_focus_control(&mut self) -> &mut Self {
        self.envelope.reset_focus_control();
        self
    }

    pub fn rows_affected_info(&mut self, rows: u64) -> &mut Self {
        self.envelope.rows_affected_info(rows);
        self
    }

    pub fn set_prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.envelope.set_prefix(prefix);
        self
    }

    pub fn set_event_verb(&mut self, verb: impl Into<String>) -> &mut Self {
        self.envelope.set_event_verb(verb);
        self
    }

    pub fn set_task_id(&mut self, task_id: impl Into<String>) -> &mut Self {
        self.envelope.set_task_id(task_id);
        self
    }

    pub fn set_worker_id(&mut self, worker_id: impl Into<String>) -> &mut Self {
        self.envelope.set_worker_id(worker_id);
        self
    }

    pub fn set_pagination(&mut self, page: u64, page_count: u64, page_size: u64) -> &mut Self {
        self.envelope.set_pagination(page, page_count, page_size);
        self
    }

    pub fn set_tag(&mut self, tag: impl Into<serde_json::Value>) -> &mut Self {
        self.envelope.set_tag(tag);
        self
    }
}

impl<T> AsRef<ResultEnvelope> for DataEnvelope<T> {
    fn as_ref(&self) -> &ResultEnvelope {
        &self.envelope
    }
}

impl ResultEnvelope {
    pub fn with_data<T>(self, data: T) -> DataEnvelope<T> {
        DataEnvelope::new(self, data)
    }
}
