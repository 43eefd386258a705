use crate::error::EnvelopeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse outcome of an operation.
///
/// `Ok`, `Valid` and `Yes` form the success family; `Exception`, `Invalid`
/// and `No` form the failure family. A freshly constructed envelope is
/// `Exception` until something says otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Ok,
    #[default]
    Exception,
    Valid,
    Invalid,
    Yes,
    No,
}

impl Status {
    pub const ALL: [Status; 6] = [
        Status::Ok,
        Status::Exception,
        Status::Valid,
        Status::Invalid,
        Status::Yes,
        Status::No,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Exception => "EXCEPTION",
            Status::Valid => "VALID",
            Status::Invalid => "INVALID",
            Status::Yes => "YES",
            Status::No => "NO",
        }
    }

    pub fn is_success_family(&self) -> bool {
        matches!(self, Status::Ok | Status::Valid | Status::Yes)
    }

    pub fn is_failure_family(&self) -> bool {
        !self.is_success_family()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = EnvelopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| EnvelopeError::UnknownStatus(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_exception() {
        assert_eq!(Status::default(), Status::Exception);
    }

    #[test]
    fn families_partition_all_statuses() {
        let success: Vec<_> = Status::ALL
            .iter()
            .filter(|s| s.is_success_family())
            .collect();
        assert_eq!(success, vec![&Status::Ok, &Status::Valid, &Status::Yes]);
        for status in Status::ALL {
            assert_ne!(status.is_success_family(), status.is_failure_family());
        }
    }

    #[test]
    fn parses_wire_strings() {
        for status in Status::ALL {
            assert_eq!(status.to_string().parse::<Status>().unwrap(), status);
        }
        assert!(matches!(
            "ok".parse::<Status>(),
            Err(EnvelopeError::UnknownStatus(s)) if s == "ok"
        ));
    }

    #[test]
    fn serializes_upper_case() {
        assert_eq!(serde_json::to_string(&Status::Ok).unwrap(), "\"OK\"");
        assert_eq!(
            serde_json::from_str::<Status>("\"INVALID\"").unwrap(),
            Status::Invalid
        );
    }
}
