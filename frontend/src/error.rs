use thiserror::Error;

/// Why an outbound form submission did not succeed.
///
/// Every variant is handled the same way by the forms: back to editing with
/// the input kept. The variants only differ in what ends up in the log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("could not encode request body: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
}

/// Required beta application fields that were left empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please fill in all required fields: {}", .missing.join(", "))]
pub struct ValidationError {
    pub missing: Vec<&'static str>,
}

/// Why a submit action did not start a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("nothing to submit")]
    Empty,
    #[error("a submission is already in flight")]
    InFlight,
    #[error("already submitted")]
    Closed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_lists_missing_fields() {
        let err = ValidationError {
            missing: vec!["Full Name", "Age Group"],
        };
        assert_eq!(
            err.to_string(),
            "Please fill in all required fields: Full Name, Age Group"
        );
    }

    #[test]
    fn rejected_wraps_validation_transparently() {
        let err: SubmitRejected = ValidationError {
            missing: vec!["Email"],
        }
        .into();
        assert_eq!(err.to_string(), "Please fill in all required fields: Email");
    }

    #[test]
    fn status_error_keeps_code() {
        assert_eq!(
            SubmitError::Status(503).to_string(),
            "server responded with status 503"
        );
    }
}
