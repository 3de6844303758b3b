//! Per-session transient state.
//!
//! A session starts when a client calls `POST /api/sessions` and ends on
//! `DELETE /api/session` (or process exit). Nothing here is persisted:
//! the logged-in flag, message log and pending appointments live only as
//! long as the session entry in the registry.

use std::collections::HashMap;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::Language;

/// Progress of one submission key within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// The visit write is under way.
    Pending,
    /// The visit is in the store.
    Recorded,
}

// ═══════════════════════════════════════════════════════════
// SessionContext: one interactive session
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
pub struct SessionContext {
    id: Uuid,
    logged_in: bool,
    username: String,
    messages: Vec<String>,
    language: Language,
    appointments: Vec<NaiveDate>,
    submissions: HashMap<Uuid, Submission>,
}

impl SessionContext {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            logged_in: false,
            username: String::new(),
            messages: Vec::new(),
            language: Language::default(),
            appointments: Vec::new(),
            submissions: HashMap::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// Empty when logged out.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Switching to a different user drops what the previous one gathered.
    pub fn login(&mut self, username: impl Into<String>) {
        let username = username.into();
        if username != self.username {
            self.appointments.clear();
            self.submissions.clear();
        }
        self.logged_in = true;
        self.username = username;
    }

    /// Clears identity plus everything gathered for it.
    pub fn logout(&mut self) {
        self.logged_in = false;
        self.username.clear();
        self.appointments.clear();
        self.submissions.clear();
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn append_message(&mut self, text: impl Into<String>) {
        self.messages.push(text.into());
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn appointments(&self) -> &[NaiveDate] {
        &self.appointments
    }

    pub fn add_appointment(&mut self, date: NaiveDate) {
        self.appointments.push(date);
    }

    /// Claim a submission key for writing. Returns the key's earlier state,
    /// `None` when the caller now owns it as `Pending`.
    pub fn begin_submission(&mut self, submission_id: Uuid) -> Option<Submission> {
        match self.submissions.get(&submission_id) {
            Some(state) => Some(*state),
            None => {
                self.submissions.insert(submission_id, Submission::Pending);
                None
            }
        }
    }

    pub fn finish_submission(&mut self, submission_id: &Uuid) {
        if let Some(state) = self.submissions.get_mut(submission_id) {
            *state = Submission::Recorded;
        }
    }

    /// Release a pending key whose write failed so a retry can claim it.
    pub fn abandon_submission(&mut self, submission_id: &Uuid) {
        if self.submissions.get(submission_id) == Some(&Submission::Pending) {
            self.submissions.remove(submission_id);
        }
    }
}

// ═══════════════════════════════════════════════════════════
// SessionRegistry: all live sessions
// ═══════════════════════════════════════════════════════════

/// Live sessions keyed by id. No expiry: entries stay until `end`.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<Uuid, SessionContext>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fresh session with default state.
    pub fn start(&mut self) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.insert(id, SessionContext::new(id));
        id
    }

    pub fn get(&self, id: &Uuid) -> Option<&SessionContext> {
        self.sessions.get(id)
    }

    pub fn get_mut(&mut self, id: &Uuid) -> Option<&mut SessionContext> {
        self.sessions.get_mut(id)
    }

    /// Discard a session. Returns `false` if it did not exist.
    pub fn end(&mut self, id: &Uuid) -> bool {
        self.sessions.remove(id).is_some()
    }
}
