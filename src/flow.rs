//! Screen flow: Signup, Login, Hospital Dashboard and Chat intake.
//!
//! Each public function is the handler for one user action. They are
//! transport-agnostic: the API layer decodes requests, calls in here with
//! the session id, and encodes the result.
//!
//! Side effects happen once per action. A chat submission carries a
//! client-chosen `submission_id`; the visit is appended the first time an
//! id is seen in a session and never again, so retries and refreshes do
//! not duplicate history.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config::DashboardAccess;
use crate::core_state::{CoreError, CoreState};
use crate::models::{join_symptoms, Language, Notice, Symptom, Visit, YesNo};
use crate::prompts::prompts_for;
use crate::report::{self, GeneratedReport, ReportError, HELPLINE, VERIFIED_BY};
use crate::risk::{self, RiskLevel};
use crate::session::Submission;
use crate::store::{self, StoreError};

pub const AGE_RANGE: (u32, u32) = (18, 50);
pub const WEIGHT_RANGE: (u32, u32) = (30, 150);
pub const WEEKS_RANGE: (u32, u32) = (1, 42);

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("Username already exists")]
    UsernameTaken,
    #[error("Username is required")]
    EmptyUsername,
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Please login first")]
    NotLoggedIn,
    #[error("No symptoms selected")]
    NoSymptoms,
    #[error("Submission is still being recorded, retry shortly")]
    SubmissionPending,
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
        value: u32,
    },
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

impl From<StoreError> for FlowError {
    fn from(err: StoreError) -> Self {
        FlowError::Core(CoreError::Store(err))
    }
}

// ═══════════════════════════════════════════════════════════
// Signup / Login / Logout
// ═══════════════════════════════════════════════════════════

pub fn signup(core: &CoreState, username: &str, password: &str) -> Result<Notice, FlowError> {
    if username.is_empty() {
        return Err(FlowError::EmptyUsername);
    }

    let created = core.update_users(|users| {
        let created = store::create_user(users, username, password);
        Ok::<_, FlowError>((created, created))
    })?;

    if !created {
        tracing::warn!(username, "Signup rejected: username exists");
        return Err(FlowError::UsernameTaken);
    }

    tracing::info!(username, "Account created");
    Ok(Notice::success("Account created! Please login."))
}

pub fn login(
    core: &CoreState,
    session_id: &Uuid,
    username: &str,
    password: &str,
) -> Result<Notice, FlowError> {
    if !core.session_exists(session_id) {
        return Err(CoreError::UnknownSession.into());
    }

    let users = core.load_users()?;
    if !store::authenticate(&users, username, password) {
        tracing::warn!(session = %session_id, "Login failed");
        return Err(FlowError::InvalidCredentials);
    }

    core.with_session_mut(session_id, |s| s.login(username))?;
    tracing::info!(session = %session_id, username, "Logged in");
    Ok(Notice::success(format!("Welcome {username}!")))
}

pub fn logout(core: &CoreState, session_id: &Uuid) -> Result<Notice, FlowError> {
    core.with_session_mut(session_id, |s| s.logout())?;
    tracing::info!(session = %session_id, "Logged out");
    Ok(Notice::success("Logged out! Please login again."))
}

/// Snapshot of a session for the client.
#[derive(Debug, Clone, Serialize)]
pub struct SessionStatus {
    pub session_id: Uuid,
    pub logged_in: bool,
    pub username: String,
    pub messages: Vec<String>,
    pub notice: Option<Notice>,
}

pub fn status(core: &CoreState, session_id: &Uuid) -> Result<SessionStatus, FlowError> {
    let status = core.with_session(session_id, |s| {
        let notice = s
            .is_logged_in()
            .then(|| Notice::success(format!("Welcome back, {}!", s.username())));
        SessionStatus {
            session_id: s.id(),
            logged_in: s.is_logged_in(),
            username: s.username().to_string(),
            messages: s.messages().to_vec(),
            notice,
        }
    })?;
    Ok(status)
}

// ═══════════════════════════════════════════════════════════
// Hospital Dashboard
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct DashboardUser {
    pub username: String,
    pub history: Vec<Visit>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub users: Vec<DashboardUser>,
    pub lines: Vec<String>,
}

/// Text line for one visit on the dashboard.
pub fn dashboard_line(visit: &Visit) -> String {
    format!(
        "- {}, Week {}, Symptoms: {}, Risk: {}, Vaccination: {}, Appointments: {}",
        visit.name,
        visit.weeks,
        visit.symptoms_text(),
        visit.risk,
        visit.vaccination,
        visit.appointments_text(),
    )
}

/// All users and their full history. Passwords are not included.
///
/// Under [`DashboardAccess::Open`] no session is needed at all.
pub fn dashboard(core: &CoreState, session_id: Option<&Uuid>) -> Result<Dashboard, FlowError> {
    if core.config.dashboard_access == DashboardAccess::LoggedIn {
        let id = session_id.ok_or(FlowError::NotLoggedIn)?;
        if !core.with_session(id, |s| s.is_logged_in())? {
            return Err(FlowError::NotLoggedIn);
        }
    }

    let users = core.load_users()?;
    let mut lines = Vec::new();
    let mut entries = Vec::with_capacity(users.len());
    for (username, record) in users {
        lines.push(format!("**{username}**"));
        lines.extend(record.history.iter().map(dashboard_line));
        entries.push(DashboardUser {
            username,
            history: record.history,
        });
    }

    Ok(Dashboard { users: entries, lines })
}

// ═══════════════════════════════════════════════════════════
// Chat intake
// ═══════════════════════════════════════════════════════════

/// Everything the intake screen collects in one pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeForm {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub name: String,
    pub age: u32,
    pub weight: u32,
    pub weeks: u32,
    #[serde(default)]
    pub symptoms: Vec<Symptom>,
    pub consulted_doc: YesNo,
    pub vaccination: YesNo,
}

fn check_range(field: &'static str, (min, max): (u32, u32), value: u32) -> Result<(), FlowError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(FlowError::OutOfRange { field, min, max, value })
    }
}

impl IntakeForm {
    pub fn validate(&self) -> Result<(), FlowError> {
        check_range("age", AGE_RANGE, self.age)?;
        check_range("weight", WEIGHT_RANGE, self.weight)?;
        check_range("weeks", WEEKS_RANGE, self.weeks)?;
        Ok(())
    }

    /// Selected symptoms in selection order, repeats removed.
    pub fn distinct_symptoms(&self) -> Vec<Symptom> {
        let mut seen = HashSet::new();
        self.symptoms
            .iter()
            .copied()
            .filter(|s| seen.insert(*s))
            .collect()
    }

    fn to_visit(&self, risk: RiskLevel, appointments: Vec<NaiveDate>) -> Visit {
        Visit {
            name: self.name.clone(),
            age: self.age,
            weight: self.weight,
            weeks: self.weeks,
            symptoms: self.distinct_symptoms(),
            risk,
            consulted_doc: self.consulted_doc,
            vaccination: self.vaccination,
            appointments,
        }
    }
}

/// Logged-in username, or `NotLoggedIn`.
fn require_login(core: &CoreState, session_id: &Uuid) -> Result<String, FlowError> {
    core.with_session(session_id, |s| {
        s.is_logged_in().then(|| s.username().to_string())
    })?
    .ok_or(FlowError::NotLoggedIn)
}

/// Greeting for the chat screen in `language`; also remembers the choice.
pub fn greeting(
    core: &CoreState,
    session_id: &Uuid,
    language: Language,
) -> Result<&'static str, FlowError> {
    require_login(core, session_id)?;
    core.with_session_mut(session_id, |s| s.set_language(language))?;
    Ok(prompts_for(language).greet)
}

/// Called once the greeting has been fully shown.
pub fn greeting_shown(core: &CoreState, session_id: &Uuid, text: &str) -> Result<(), FlowError> {
    core.with_session_mut(session_id, |s| s.append_message(text))?;
    Ok(())
}

pub fn add_appointment(
    core: &CoreState,
    session_id: &Uuid,
    date: NaiveDate,
) -> Result<Notice, FlowError> {
    require_login(core, session_id)?;
    core.with_session_mut(session_id, |s| s.add_appointment(date))?;
    Ok(Notice::success(format!("Appointment added: {}", date.format("%Y-%m-%d"))))
}

#[derive(Debug, Clone, Serialize)]
pub struct IntakeOutcome {
    /// `None` when no symptom was selected.
    pub risk: Option<RiskLevel>,
    pub notices: Vec<Notice>,
    pub lines: Vec<String>,
    /// Whether this call appended a visit to the user's history.
    pub recorded: bool,
}

pub fn submit_intake(
    core: &CoreState,
    session_id: &Uuid,
    form: &IntakeForm,
    submission_id: Uuid,
) -> Result<IntakeOutcome, FlowError> {
    let username = require_login(core, session_id)?;
    form.validate()?;

    let mut notices = Vec::new();
    if form.vaccination == YesNo::No {
        notices.push(Notice::warning("Please consult your doctor for pending vaccinations."));
    }

    let symptoms = form.distinct_symptoms();
    let Some(risk) = risk::evaluate(symptoms.len()) else {
        tracing::debug!(session = %session_id, "Intake without symptoms, nothing evaluated");
        return Ok(IntakeOutcome {
            risk: None,
            notices,
            lines: Vec::new(),
            recorded: false,
        });
    };

    notices.push(risk.notice());
    let lines = vec![
        format!("Symptoms verified by: {VERIFIED_BY}"),
        format!("Risk Level: {risk}"),
        format!("Helpline: {HELPLINE}"),
    ];

    let (earlier, appointments) = core.with_session_mut(session_id, |s| {
        s.set_language(form.language);
        (s.begin_submission(submission_id), s.appointments().to_vec())
    })?;

    let fresh = match earlier {
        None => true,
        Some(Submission::Recorded) => false,
        Some(Submission::Pending) => {
            tracing::debug!(session = %session_id, %submission_id, "Submission still in flight");
            return Err(FlowError::SubmissionPending);
        }
    };

    if fresh {
        let visit = form.to_visit(risk, appointments);
        let appended = core.update_users(|users| {
            let len = store::append_visit(users, &username, visit)?;
            Ok::<_, FlowError>((len, true))
        });
        match appended {
            Ok(len) => {
                core.with_session_mut(session_id, |s| s.finish_submission(&submission_id))?;
                tracing::info!(
                    username = %username,
                    risk = %risk,
                    symptoms = %join_symptoms(&symptoms),
                    history = len,
                    "Visit recorded"
                );
            }
            Err(e) => {
                core.with_session_mut(session_id, |s| s.abandon_submission(&submission_id))?;
                return Err(e);
            }
        }
    } else {
        tracing::debug!(session = %session_id, %submission_id, "Submission already recorded");
    }

    Ok(IntakeOutcome {
        risk: Some(risk),
        notices,
        lines,
        recorded: fresh,
    })
}

/// Regenerate the PDF for the current form and write it to the report directory.
pub fn generate_report(
    core: &CoreState,
    session_id: &Uuid,
    form: &IntakeForm,
) -> Result<(GeneratedReport, Notice), FlowError> {
    require_login(core, session_id)?;
    form.validate()?;

    let risk = risk::evaluate(form.distinct_symptoms().len()).ok_or(FlowError::NoSymptoms)?;
    let appointments = core.with_session(session_id, |s| s.appointments().to_vec())?;
    let visit = form.to_visit(risk, appointments);

    let generated = report::write_report(&core.config.report_dir, &visit)?;
    Ok((generated, Notice::success("Report generated!")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_state::test_core_state;
    use crate::models::NoticeLevel;

    fn form(symptoms: &[Symptom]) -> IntakeForm {
        IntakeForm {
            language: Language::English,
            name: "Ann".into(),
            age: 28,
            weight: 62,
            weeks: 20,
            symptoms: symptoms.to_vec(),
            consulted_doc: YesNo::Yes,
            vaccination: YesNo::Yes,
        }
    }

    fn logged_in(core: &CoreState, username: &str) -> Uuid {
        signup(core, username, "p1").unwrap();
        let id = core.start_session().unwrap();
        login(core, &id, username, "p1").unwrap();
        id
    }

    #[test]
    fn signup_creates_record() {
        let (core, _tmp) = test_core_state();
        let notice = signup(&core, "a", "p1").unwrap();
        assert_eq!(notice.text, "Account created! Please login.");

        let json = serde_json::to_value(core.load_users().unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({"a": {"password": "p1", "history": []}}));
    }

    #[test]
    fn duplicate_signup_leaves_store_unchanged() {
        let (core, _tmp) = test_core_state();
        signup(&core, "a", "p1").unwrap();
        let before = std::fs::read(core.store().path()).unwrap();

        let err = signup(&core, "a", "other").unwrap_err();
        assert!(matches!(err, FlowError::UsernameTaken));
        assert_eq!(err.to_string(), "Username already exists");
        assert_eq!(std::fs::read(core.store().path()).unwrap(), before);
    }

    #[test]
    fn empty_username_rejected() {
        let (core, _tmp) = test_core_state();
        assert!(matches!(signup(&core, "", "p"), Err(FlowError::EmptyUsername)));
        assert!(!core.store().path().exists());
    }

    #[test]
    fn login_requires_exact_password() {
        let (core, _tmp) = test_core_state();
        signup(&core, "a", "p1").unwrap();
        let id = core.start_session().unwrap();

        let err = login(&core, &id, "a", "P1").unwrap_err();
        assert!(matches!(err, FlowError::InvalidCredentials));
        assert!(!core.with_session(&id, |s| s.is_logged_in()).unwrap());

        let notice = login(&core, &id, "a", "p1").unwrap();
        assert_eq!(notice.text, "Welcome a!");
        assert_eq!(core.with_session(&id, |s| s.username().to_string()).unwrap(), "a");
    }

    #[test]
    fn login_unknown_session() {
        let (core, _tmp) = test_core_state();
        signup(&core, "a", "p1").unwrap();
        let err = login(&core, &Uuid::new_v4(), "a", "p1").unwrap_err();
        assert!(matches!(err, FlowError::Core(CoreError::UnknownSession)));
    }

    #[test]
    fn status_welcomes_back() {
        let (core, _tmp) = test_core_state();
        let id = logged_in(&core, "a");
        let status = status(&core, &id).unwrap();
        assert!(status.logged_in);
        assert_eq!(status.notice.unwrap().text, "Welcome back, a!");

        logout(&core, &id).unwrap();
        let status = super::status(&core, &id).unwrap();
        assert!(!status.logged_in);
        assert!(status.notice.is_none());
    }

    #[test]
    fn intake_requires_login() {
        let (core, _tmp) = test_core_state();
        let id = core.start_session().unwrap();
        let err = submit_intake(&core, &id, &form(&[Symptom::Headache]), Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, FlowError::NotLoggedIn));
    }

    #[test]
    fn moderate_scenario_records_one_visit() {
        let (core, _tmp) = test_core_state();
        let id = logged_in(&core, "a");

        let outcome = submit_intake(
            &core,
            &id,
            &form(&[Symptom::Headache, Symptom::Nausea]),
            Uuid::new_v4(),
        )
        .unwrap();
        assert_eq!(outcome.risk, Some(RiskLevel::Moderate));
        assert!(outcome.recorded);
        assert_eq!(outcome.notices[0].level, NoticeLevel::Warning);
        assert_eq!(outcome.lines[1], "Risk Level: Moderate Risk ⚠️");

        let users = core.load_users().unwrap();
        assert_eq!(users["a"].history.len(), 1);
        assert_eq!(users["a"].history[0].risk, RiskLevel::Moderate);
    }

    #[test]
    fn same_submission_id_recorded_once() {
        let (core, _tmp) = test_core_state();
        let id = logged_in(&core, "a");
        let key = Uuid::new_v4();
        let f = form(&[Symptom::Fever]);

        assert!(submit_intake(&core, &id, &f, key).unwrap().recorded);
        let again = submit_intake(&core, &id, &f, key).unwrap();
        assert!(!again.recorded);
        assert_eq!(again.risk, Some(RiskLevel::Low));
        assert!(submit_intake(&core, &id, &f, Uuid::new_v4()).unwrap().recorded);

        assert_eq!(core.load_users().unwrap()["a"].history.len(), 2);
    }

    #[test]
    fn pending_submission_is_not_reported_as_recorded() {
        let (core, _tmp) = test_core_state();
        let id = logged_in(&core, "a");
        let key = Uuid::new_v4();
        core.with_session_mut(&id, |s| s.begin_submission(key)).unwrap();

        let err = submit_intake(&core, &id, &form(&[Symptom::Fever]), key).unwrap_err();
        assert!(matches!(err, FlowError::SubmissionPending));
        assert!(core.load_users().unwrap()["a"].history.is_empty());
    }

    #[test]
    fn failed_write_releases_submission_key() {
        let (core, _tmp) = test_core_state();
        let id = logged_in(&core, "a");
        let key = Uuid::new_v4();
        let f = form(&[Symptom::Fever]);

        std::fs::write(core.store().path(), "{broken").unwrap();
        assert!(submit_intake(&core, &id, &f, key).is_err());

        std::fs::remove_file(core.store().path()).unwrap();
        signup(&core, "a", "p1").unwrap();
        assert!(submit_intake(&core, &id, &f, key).unwrap().recorded);
        assert_eq!(core.load_users().unwrap()["a"].history.len(), 1);
    }

    #[test]
    fn relogin_as_other_user_keeps_appointments_apart() {
        let (core, _tmp) = test_core_state();
        signup(&core, "b", "p2").unwrap();
        let id = logged_in(&core, "a");
        let date = NaiveDate::from_ymd_opt(2026, 11, 2).unwrap();
        add_appointment(&core, &id, date).unwrap();

        login(&core, &id, "b", "p2").unwrap();
        let outcome = submit_intake(&core, &id, &form(&[Symptom::Fever]), Uuid::new_v4()).unwrap();
        assert!(outcome.recorded);

        let users = core.load_users().unwrap();
        assert!(users["b"].history[0].appointments.is_empty());
        assert!(users["a"].history.is_empty());
    }

    #[test]
    fn zero_symptoms_skips_evaluation_and_history() {
        let (core, _tmp) = test_core_state();
        let id = logged_in(&core, "a");

        let outcome = submit_intake(&core, &id, &form(&[]), Uuid::new_v4()).unwrap();
        assert_eq!(outcome.risk, None);
        assert!(!outcome.recorded);
        assert!(outcome.lines.is_empty());
        assert!(core.load_users().unwrap()["a"].history.is_empty());
    }

    #[test]
    fn duplicate_symptoms_count_once() {
        let (core, _tmp) = test_core_state();
        let id = logged_in(&core, "a");
        let f = form(&[Symptom::Headache, Symptom::Headache]);
        let outcome = submit_intake(&core, &id, &f, Uuid::new_v4()).unwrap();
        assert_eq!(outcome.risk, Some(RiskLevel::Low));
        assert_eq!(core.load_users().unwrap()["a"].history[0].symptoms, [Symptom::Headache]);
    }

    #[test]
    fn five_symptoms_is_high() {
        let (core, _tmp) = test_core_state();
        let id = logged_in(&core, "a");
        let f = form(&Symptom::ALL[..5]);
        let outcome = submit_intake(&core, &id, &f, Uuid::new_v4()).unwrap();
        assert_eq!(outcome.risk, Some(RiskLevel::High));
        assert_eq!(outcome.notices[0].level, NoticeLevel::Error);
    }

    #[test]
    fn missing_vaccination_warns() {
        let (core, _tmp) = test_core_state();
        let id = logged_in(&core, "a");
        let mut f = form(&[]);
        f.vaccination = YesNo::No;
        let outcome = submit_intake(&core, &id, &f, Uuid::new_v4()).unwrap();
        assert_eq!(
            outcome.notices,
            [Notice::warning("Please consult your doctor for pending vaccinations.")]
        );
    }

    #[test]
    fn out_of_range_rejected() {
        let (core, _tmp) = test_core_state();
        let id = logged_in(&core, "a");
        let mut f = form(&[Symptom::Fever]);
        f.weeks = 43;
        let err = submit_intake(&core, &id, &f, Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, FlowError::OutOfRange { field: "weeks", .. }));

        f.weeks = 42;
        f.age = 17;
        assert!(matches!(
            f.validate(),
            Err(FlowError::OutOfRange { field: "age", min: 18, max: 50, value: 17 })
        ));
        f.age = 50;
        f.weight = 151;
        assert!(f.validate().is_err());
        f.weight = 30;
        assert!(f.validate().is_ok());
    }

    #[test]
    fn appointments_persist_across_actions() {
        let (core, _tmp) = test_core_state();
        let id = logged_in(&core, "a");
        let d1 = NaiveDate::from_ymd_opt(2026, 11, 2).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2026, 12, 7).unwrap();

        let notice = add_appointment(&core, &id, d1).unwrap();
        assert_eq!(notice.text, "Appointment added: 2026-11-02");
        add_appointment(&core, &id, d2).unwrap();

        submit_intake(&core, &id, &form(&[Symptom::Fever]), Uuid::new_v4()).unwrap();
        let users = core.load_users().unwrap();
        assert_eq!(users["a"].history[0].appointments, [d1, d2]);
    }

    #[test]
    fn add_appointment_requires_login() {
        let (core, _tmp) = test_core_state();
        let id = core.start_session().unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 11, 2).unwrap();
        assert!(matches!(add_appointment(&core, &id, date), Err(FlowError::NotLoggedIn)));
    }

    #[test]
    fn dashboard_lists_users_and_visits() {
        let (core, _tmp) = test_core_state();
        let id = logged_in(&core, "a");
        signup(&core, "b", "p2").unwrap();
        submit_intake(
            &core,
            &id,
            &form(&[Symptom::Headache, Symptom::Nausea]),
            Uuid::new_v4(),
        )
        .unwrap();

        let board = dashboard(&core, None).unwrap();
        assert_eq!(
            board.lines,
            [
                "**a**",
                "- Ann, Week 20, Symptoms: headache, nausea, Risk: Moderate Risk ⚠️, Vaccination: Yes, Appointments: None",
                "**b**",
            ]
        );
        assert_eq!(board.users.len(), 2);
        let json = serde_json::to_string(&board).unwrap();
        assert!(!json.contains("p1"));
    }

    #[test]
    fn dashboard_can_require_login() {
        let (mut core, _tmp) = test_core_state();
        core.config.dashboard_access = DashboardAccess::LoggedIn;
        assert!(matches!(dashboard(&core, None), Err(FlowError::NotLoggedIn)));

        let anon = core.start_session().unwrap();
        assert!(matches!(dashboard(&core, Some(&anon)), Err(FlowError::NotLoggedIn)));

        let id = logged_in(&core, "a");
        assert!(dashboard(&core, Some(&id)).is_ok());
    }

    #[test]
    fn greeting_uses_language_table() {
        let (core, _tmp) = test_core_state();
        let id = logged_in(&core, "a");
        let text = greeting(&core, &id, Language::Hindi).unwrap();
        assert!(text.starts_with("नमस्ते"));
        assert_eq!(core.with_session(&id, |s| s.language()).unwrap(), Language::Hindi);

        greeting_shown(&core, &id, text).unwrap();
        assert_eq!(core.with_session(&id, |s| s.messages().to_vec()).unwrap(), [text]);
    }

    #[test]
    fn report_written_to_report_dir() {
        let (core, tmp) = test_core_state();
        let id = logged_in(&core, "a");
        let (generated, notice) =
            generate_report(&core, &id, &form(&[Symptom::Headache])).unwrap();
        assert_eq!(notice.text, "Report generated!");
        assert_eq!(generated.path, tmp.path().join("Ann_matrubot_report.pdf"));
        assert!(generated.path.exists());
        // Reports do not touch history.
        assert!(core.load_users().unwrap()["a"].history.is_empty());
    }

    #[test]
    fn report_refused_without_symptoms() {
        let (core, _tmp) = test_core_state();
        let id = logged_in(&core, "a");
        assert!(matches!(
            generate_report(&core, &id, &form(&[])),
            Err(FlowError::NoSymptoms)
        ));
    }
}
