//! Waitlist signup: email validation, client-side store and form state machine
//!
//! The store is append-only and deduplicated. Persistence is best effort: the
//! form reaches `Success` even when the write fails, and the error is handed
//! back to the caller for logging.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// `local@domain.tld`: no whitespace, exactly one `@`, a dot somewhere after it
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Check an (already trimmed) email address
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Waitlist persistence errors
#[derive(Debug, Error)]
pub enum WaitlistError {
    #[error("client storage is unavailable")]
    Unavailable,
    #[error("could not read stored waitlist: {0}")]
    Read(String),
    #[error("stored waitlist is not a JSON list of strings: {0}")]
    Corrupt(#[source] serde_json::Error),
    #[error("could not encode waitlist: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("could not write waitlist: {0}")]
    Write(String),
}

/// Raw key-value slot holding the serialized waitlist
pub trait WaitlistStore {
    /// Current serialized value, `None` if nothing was stored yet
    fn read(&self) -> Result<Option<String>, WaitlistError>;
    fn write(&self, raw: &str) -> Result<(), WaitlistError>;
}

/// Deduplicating, append-only list of emails on top of a [`WaitlistStore`]
#[derive(Debug)]
pub struct Waitlist<S> {
    store: S,
}

impl<S: WaitlistStore> Waitlist<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All stored emails in insertion order
    pub fn entries(&self) -> Result<Vec<String>, WaitlistError> {
        match self.store.read()? {
            Some(raw) => serde_json::from_str(&raw).map_err(WaitlistError::Corrupt),
            None => Ok(Vec::new()),
        }
    }

    /// Append `email` unless already present; returns whether it was added
    pub fn add(&self, email: &str) -> Result<bool, WaitlistError> {
        let mut entries = self.entries()?;
        if entries.iter().any(|existing| existing == email) {
            return Ok(false);
        }
        entries.push(email.to_string());
        let raw = serde_json::to_string(&entries).map_err(WaitlistError::Encode)?;
        self.store.write(&raw)?;
        Ok(true)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Lifecycle of one waitlist form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
}

/// What the form should do with a submit event
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Invalid email: give visual feedback, stay interactive
    Rejected,
    /// Valid, trimmed email: go busy and start the simulated round trip
    Accepted(String),
    /// A submission is already in flight or done
    Ignored,
}

/// Result of finishing a submission
#[derive(Debug)]
pub struct Completion {
    /// `Ok(true)` if stored, `Ok(false)` if it was already on the list
    pub persisted: Result<bool, WaitlistError>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormMachine {
    state: FormState,
}

impl FormMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state == FormState::Submitting
    }

    /// Handle a submit event carrying the raw input value
    pub fn submit(&mut self, raw: &str) -> SubmitDecision {
        if matches!(self.state, FormState::Submitting | FormState::Success) {
            return SubmitDecision::Ignored;
        }

        self.state = FormState::Validating;
        let email = raw.trim();
        if is_valid_email(email) {
            self.state = FormState::Submitting;
            SubmitDecision::Accepted(email.to_string())
        } else {
            self.state = FormState::Idle;
            SubmitDecision::Rejected
        }
    }

    /// Finish the round trip: record the email and move to `Success`.
    ///
    /// Returns `None` if no submission was in flight.
    pub fn complete<S: WaitlistStore>(&mut self, waitlist: &Waitlist<S>, email: &str) -> Option<Completion> {
        if self.state != FormState::Submitting {
            return None;
        }
        let persisted = waitlist.add(email);
        self.state = FormState::Success;
        Some(Completion { persisted })
    }

    /// Abort an in-flight submission and make the form editable again
    pub fn fail(&mut self) {
        if self.state == FormState::Submitting {
            self.state = FormState::Idle;
        }
    }
}

/// In-memory store standing in for `localStorage` in tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: std::cell::RefCell<Option<String>>,
    fail_writes: bool,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(raw: &str) -> Self {
        Self {
            slot: std::cell::RefCell::new(Some(raw.to_string())),
            fail_writes: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            slot: std::cell::RefCell::new(None),
            fail_writes: true,
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

#[cfg(test)]
impl WaitlistStore for MemoryStore {
    fn read(&self) -> Result<Option<String>, WaitlistError> {
        Ok(self.slot.borrow().clone())
    }

    fn write(&self, raw: &str) -> Result<(), WaitlistError> {
        if self.fail_writes {
            return Err(WaitlistError::Write("QuotaExceededError".to_string()));
        }
        *self.slot.borrow_mut() = Some(raw.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Validation
    // ========================================================================

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("vip@muse.com"));
        assert!(is_valid_email("first.last+tag@sub.domain.io"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a@b.com "));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@b."));
    }

    #[test]
    fn test_dot_must_follow_at() {
        assert!(!is_valid_email("first.last@localhost"));
        assert!(is_valid_email("a@b.c.d"));
    }

    // ========================================================================
    // Store
    // ========================================================================

    #[test]
    fn test_missing_key_reads_empty() {
        let waitlist = Waitlist::new(MemoryStore::new());
        assert!(waitlist.entries().unwrap().is_empty());
    }

    #[test]
    fn test_add_is_idempotent() {
        let waitlist = Waitlist::new(MemoryStore::new());
        assert!(waitlist.add("vip@muse.com").unwrap());
        assert!(!waitlist.add("vip@muse.com").unwrap());
        assert!(waitlist.add("second@muse.com").unwrap());

        assert_eq!(
            waitlist.entries().unwrap(),
            vec!["vip@muse.com".to_string(), "second@muse.com".to_string()]
        );
        assert_eq!(
            waitlist.store().raw().as_deref(),
            Some(r#"["vip@muse.com","second@muse.com"]"#)
        );
    }

    #[test]
    fn test_existing_entries_preserved() {
        let waitlist = Waitlist::new(MemoryStore::with_raw(r#"["early@muse.com"]"#));
        assert!(waitlist.add("late@muse.com").unwrap());
        assert_eq!(waitlist.entries().unwrap().len(), 2);
    }

    #[test]
    fn test_corrupt_store_reported() {
        let waitlist = Waitlist::new(MemoryStore::with_raw("{not json"));
        assert!(matches!(waitlist.entries(), Err(WaitlistError::Corrupt(_))));
        assert!(matches!(waitlist.add("a@b.co"), Err(WaitlistError::Corrupt(_))));
        // Nothing was overwritten
        assert_eq!(waitlist.store().raw().as_deref(), Some("{not json"));
    }

    #[test]
    fn test_write_failure_surfaces() {
        let waitlist = Waitlist::new(MemoryStore::failing());
        let err = waitlist.add("a@b.co").unwrap_err();
        assert!(matches!(err, WaitlistError::Write(_)));
        assert_eq!(err.to_string(), "could not write waitlist: QuotaExceededError");
    }

    // ========================================================================
    // Form machine
    // ========================================================================

    #[test]
    fn test_rejected_returns_to_idle() {
        let mut machine = FormMachine::new();
        assert_eq!(machine.submit("not-an-email"), SubmitDecision::Rejected);
        assert_eq!(machine.state(), FormState::Idle);
        assert!(!machine.is_busy());
    }

    #[test]
    fn test_accepted_is_trimmed_and_busy() {
        let mut machine = FormMachine::new();
        assert_eq!(
            machine.submit("  vip@muse.com \n"),
            SubmitDecision::Accepted("vip@muse.com".to_string())
        );
        assert_eq!(machine.state(), FormState::Submitting);
        assert!(machine.is_busy());
    }

    #[test]
    fn test_resubmit_while_busy_ignored() {
        let mut machine = FormMachine::new();
        machine.submit("vip@muse.com");
        assert_eq!(machine.submit("other@muse.com"), SubmitDecision::Ignored);
        assert_eq!(machine.state(), FormState::Submitting);
    }

    #[test]
    fn test_complete_reaches_success_even_if_storage_fails() {
        let waitlist = Waitlist::new(MemoryStore::failing());
        let mut machine = FormMachine::new();
        machine.submit("vip@muse.com");

        let completion = machine.complete(&waitlist, "vip@muse.com").unwrap();
        assert!(completion.persisted.is_err());
        assert_eq!(machine.state(), FormState::Success);
        assert_eq!(machine.submit("vip@muse.com"), SubmitDecision::Ignored);
    }

    #[test]
    fn test_complete_without_submission() {
        let waitlist = Waitlist::new(MemoryStore::new());
        let mut machine = FormMachine::new();
        assert!(machine.complete(&waitlist, "vip@muse.com").is_none());
        assert!(waitlist.store().raw().is_none());
    }

    #[test]
    fn test_fail_makes_form_editable() {
        let mut machine = FormMachine::new();
        machine.submit("vip@muse.com");
        machine.fail();
        assert_eq!(machine.state(), FormState::Idle);
        assert!(matches!(machine.submit("vip@muse.com"), SubmitDecision::Accepted(_)));
    }
}
