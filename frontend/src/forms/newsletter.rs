use serde::Serialize;

use super::Phase;
use crate::error::{SubmitError, SubmitRejected};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewsletterRequest {
    pub email: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewsletterForm {
    email: String,
    phase: Phase,
}

impl NewsletterForm {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The input is locked while a request is in flight and while the
    /// success state is showing.
    pub fn set_email(&mut self, email: String) -> bool {
        if self.phase != Phase::Editing {
            return false;
        }
        self.email = email;
        true
    }

    pub fn begin_submit(&mut self) -> Result<NewsletterRequest, SubmitRejected> {
        match self.phase {
            Phase::Submitting => return Err(SubmitRejected::InFlight),
            Phase::Submitted => return Err(SubmitRejected::Closed),
            Phase::Editing => {}
        }
        if self.email.trim().is_empty() {
            return Err(SubmitRejected::Empty);
        }
        self.phase = Phase::Submitting;
        Ok(NewsletterRequest {
            email: self.email.clone(),
        })
    }

    /// Returns true when the caller should schedule `reset`.
    pub fn finish_submit(&mut self, outcome: Result<(), SubmitError>) -> bool {
        if self.phase != Phase::Submitting {
            return false;
        }
        match outcome {
            Ok(()) => {
                self.phase = Phase::Submitted;
                true
            }
            Err(_) => {
                self.phase = Phase::Editing;
                false
            }
        }
    }

    /// Clears the field after a successful subscription.
    pub fn reset(&mut self) -> bool {
        if self.phase != Phase::Submitted {
            return false;
        }
        self.email.clear();
        self.phase = Phase::Editing;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_email_is_a_no_op() {
        let mut form = NewsletterForm::default();
        assert_eq!(form.begin_submit(), Err(SubmitRejected::Empty));
        form.set_email("   ".into());
        assert_eq!(form.begin_submit(), Err(SubmitRejected::Empty));
        assert_eq!(form.phase(), Phase::Editing);
    }

    #[test]
    fn success_then_reset_clears_the_field() {
        let mut form = NewsletterForm::default();
        form.set_email("a@b.com".into());

        let request = form.begin_submit().unwrap();
        assert_eq!(serde_json::to_string(&request).unwrap(), r#"{"email":"a@b.com"}"#);
        assert!(form.finish_submit(Ok(())));
        assert_eq!(form.phase(), Phase::Submitted);
        assert_eq!(form.email(), "a@b.com");

        assert!(form.reset());
        assert_eq!(form.phase(), Phase::Editing);
        assert_eq!(form.email(), "");
    }

    #[test]
    fn failure_keeps_the_email() {
        let mut form = NewsletterForm::default();
        form.set_email("a@b.com".into());
        form.begin_submit().unwrap();
        assert!(!form.finish_submit(Err(SubmitError::Network("offline".into()))));
        assert_eq!(form.phase(), Phase::Editing);
        assert_eq!(form.email(), "a@b.com");
        assert!(!form.reset());
    }

    #[test]
    fn input_is_locked_outside_editing() {
        let mut form = NewsletterForm::default();
        form.set_email("a@b.com".into());
        form.begin_submit().unwrap();
        assert!(!form.set_email("other@b.com".into()));
        assert_eq!(form.begin_submit(), Err(SubmitRejected::InFlight));

        form.finish_submit(Ok(()));
        assert!(!form.set_email("other@b.com".into()));
        assert_eq!(form.begin_submit(), Err(SubmitRejected::Closed));
        assert_eq!(form.email(), "a@b.com");
    }
}
