//! # Result Envelope
//!
//! A standard return value for business-logic functions: a [`Status`], the
//! severity-tagged messages gathered while the work was done, correlation
//! metadata and, through [`DataEnvelope`], a typed payload. Envelopes
//! serialize to the JSON shape API responses are built from.
//!
//! ## Basic Usage
//!
//! ```rust
//! use result_envelope::*;
//!
//! fn save_user(name: &str) -> ResultEnvelope {
//!     let mut res = result_envelope!()
//!         .event_verb("save")
//!         .focus_control("user_form")
//!         .build();
//!     if name.is_empty() {
//!         res.set_focus_control("name", true);
//!         res.add_error("Name is required");
//!         return res.finish(Status::Invalid);
//!     }
//!     res.add_info(format!("User {name} saved"));
//!     res.finish(Status::Ok)
//! }
//!
//! let res = save_user("");
//! assert!(res.is_invalid());
//! assert_eq!(res.operation(), "save_user");
//! assert_eq!(res.focus_control(), Some("user_form_name"));
//! assert_eq!(res.event_id(), "saved");
//! assert_eq!(res.messages(), &["Name is required"]);
//! ```
//!
//! ## Composing Results
//!
//! A caller can fold the failures of a sub-call into its own envelope and
//! still add a note of its own when the sub-call went fine:
//!
//! ```rust
//! use result_envelope::*;
//!
//! let mut child = ResultEnvelope::new();
//! child.add_error("Stock lookup failed");
//!
//! let mut parent = ResultEnvelope::builder().operation("checkout").build();
//! parent.merge_with_alt(&child, "Nothing to reserve");
//! assert_eq!(parent.messages(), &["Stock lookup failed"]);
//!
//! let mut orders = parent.with_data(vec![101, 102]);
//! orders.add_warning("Partial result").set_status(Status::Ok);
//! assert_eq!(orders.data(), &vec![101, 102]);
//! ```
//!
//! ## Schema Validation
//!
//! ```rust
//! use result_envelope::*;
//!
//! let envelope = ResultEnvelope::builder()
//!     .status(Status::Ok)
//!     .message("saved")
//!     .build();
//!
//! assert!(envelope.validate().is_ok());
//! ```

mod builder;
mod envelope;
mod error;
mod notes;
mod status;
mod validation;
mod wrapper;

pub use builder::*;
pub use envelope::*;
pub use error::*;
pub use notes::*;
pub use status::*;
pub use validation::*;
pub use wrapper::*;

// Re-export the derive macro
pub use result_envelope_derive::AsEnvelope;

/// Turns a payload into an `OK` envelope named after its type.
pub trait AsEnvelope {
    fn into_envelope(self) -> DataEnvelope<Self>
    where
        Self: Sized;
}
