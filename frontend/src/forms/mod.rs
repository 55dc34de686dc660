//! Client-side state for the two signup forms.
//!
//! Both forms follow the same lifecycle: edits while `Editing`, one request
//! in flight while `Submitting`, and `Submitted` once the server accepted it.
//! The components own these machines and perform the actual request between
//! `begin_submit` and `finish_submit`.

pub mod beta;
pub mod newsletter;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Submitting,
    Submitted,
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Editing
    }
}
