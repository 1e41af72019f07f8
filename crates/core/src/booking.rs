//! Booking wizard state machine: draft, steps, gates, and session.
//!
//! One [`WizardSession`] drives one booking attempt. Field updates merge
//! into the [`BookingDraft`] with no validation; validation only gates
//! navigation, and a blocked `next`/`previous`/`submit` is a silent no-op
//! (the UI renders disabled controls, so there is no throwing path).
//! Sessions live in memory only and are discarded with the process; the
//! "submission" is entirely the WhatsApp deep-link handoff.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::artist::ArtistProfile;
use crate::whatsapp::{self, LinkOpener, MessageComposer};

// ---------------------------------------------------------------------------
// Wizard steps
// ---------------------------------------------------------------------------

/// The four steps of the booking wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Artist,
    Style,
    Details,
    Contact,
}

/// Total number of wizard steps.
pub const STEP_COUNT: u8 = 4;

impl WizardStep {
    pub const FIRST: WizardStep = WizardStep::Artist;
    pub const LAST: WizardStep = WizardStep::Contact;

    /// Convert a 0-based step index to a step.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Artist),
            1 => Some(Self::Style),
            2 => Some(Self::Details),
            3 => Some(Self::Contact),
            _ => None,
        }
    }

    /// 0-based index of this step.
    pub fn index(self) -> u8 {
        match self {
            Self::Artist => 0,
            Self::Style => 1,
            Self::Details => 2,
            Self::Contact => 3,
        }
    }

    /// The step id the frontend and dictionaries use.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Artist => "artist",
            Self::Style => "style",
            Self::Details => "details",
            Self::Contact => "contact",
        }
    }

    /// Dictionary key prefix for this step's title/description.
    pub fn dictionary_key(self) -> String {
        format!("steps.{}", self.as_str())
    }

    fn forward(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    fn backward(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }
}

// ---------------------------------------------------------------------------
// Submission state
// ---------------------------------------------------------------------------

/// Submission status of a session. Monotonic: once `Submitting` begins
/// there is no way back to `Editing`, and `Submitted` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    Editing,
    Submitting,
    Submitted,
}

impl SubmissionState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Editing => "editing",
            Self::Submitting => "submitting",
            Self::Submitted => "submitted",
        }
    }
}

// ---------------------------------------------------------------------------
// Booking draft
// ---------------------------------------------------------------------------

/// The record accumulated across wizard steps.
///
/// Every field is optional; fields are only ever added or overwritten,
/// never cleared, until the session itself is discarded. There are no
/// cross-field constraints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub artist: Option<ArtistProfile>,
    pub style: Option<String>,
    pub description: Option<String>,
    pub budget: Option<String>,
    pub additional_notes: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub preferred_date: Option<String>,
}

/// A partial draft update; unset fields leave the draft untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftPatch {
    pub artist: Option<ArtistProfile>,
    pub style: Option<String>,
    pub description: Option<String>,
    pub budget: Option<String>,
    pub additional_notes: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub preferred_date: Option<String>,
}

impl BookingDraft {
    /// Merge a partial update. Mutation is never validated; validation
    /// only gates navigation.
    pub fn apply(&mut self, patch: DraftPatch) {
        let DraftPatch {
            artist,
            style,
            description,
            budget,
            additional_notes,
            name,
            email,
            phone,
            preferred_date,
        } = patch;

        merge(&mut self.artist, artist);
        merge(&mut self.style, style);
        merge(&mut self.description, description);
        merge(&mut self.budget, budget);
        merge(&mut self.additional_notes, additional_notes);
        merge(&mut self.name, name);
        merge(&mut self.email, email);
        merge(&mut self.phone, phone);
        merge(&mut self.preferred_date, preferred_date);
    }

    /// Presence-only gate for one step. Deliberately no format checks:
    /// a malformed but non-empty email or phone passes.
    pub fn step_complete(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::Artist => self.artist.is_some(),
            WizardStep::Style => matches!(self.style.as_deref(), Some(s) if !s.is_empty()),
            WizardStep::Details => matches!(
                self.description.as_deref(),
                Some(d) if !d.trim().is_empty()
            ),
            WizardStep::Contact => {
                is_present(&self.name) && is_present(&self.email) && is_present(&self.phone)
            }
        }
    }
}

fn merge<T>(slot: &mut Option<T>, update: Option<T>) {
    if update.is_some() {
        *slot = update;
    }
}

fn is_present(field: &Option<String>) -> bool {
    matches!(field.as_deref(), Some(s) if !s.is_empty())
}

// ---------------------------------------------------------------------------
// Wizard session
// ---------------------------------------------------------------------------

/// One booking attempt: current step, accumulated draft, submission state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardSession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    step: WizardStep,
    draft: BookingDraft,
    submission: SubmissionState,
}

impl WizardSession {
    /// Start a fresh session on the first step with an empty draft.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            step: WizardStep::FIRST,
            draft: BookingDraft::default(),
            submission: SubmissionState::Editing,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    /// Merge a partial draft update; permitted at any step, any time.
    pub fn apply(&mut self, patch: DraftPatch) {
        self.draft.apply(patch);
    }

    /// Whether the current step's gate passes.
    pub fn can_advance(&self) -> bool {
        self.draft.step_complete(self.step)
    }

    /// Advance one step if the current gate passes and this is not the
    /// last step. Returns whether the session moved; a refusal changes
    /// nothing.
    pub fn next(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        match self.step.forward() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// Go back one step; a no-op on the first step.
    pub fn previous(&mut self) -> bool {
        match self.step.backward() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// Whether `submit` would run: on the last step, its gate passing,
    /// and no submission already begun.
    pub fn can_submit(&self) -> bool {
        self.step == WizardStep::LAST
            && self.draft.step_complete(WizardStep::Contact)
            && self.submission == SubmissionState::Editing
    }

    /// Submit the booking: compose the message, build the deep link, and
    /// issue exactly one open-link handoff.
    ///
    /// `Submitted` is reached unconditionally once the handoff has been
    /// issued; the collaborator's outcome is deliberately unobserved and
    /// there is no retry. A blocked submit returns `None` and changes
    /// nothing, like every other refused transition. There is no way
    /// back from `Submitted`; a new session is required to edit again.
    pub fn submit(
        &mut self,
        composer: &MessageComposer,
        destination: &str,
        opener: &dyn LinkOpener,
    ) -> Option<String> {
        if !self.can_submit() {
            return None;
        }

        self.submission = SubmissionState::Submitting;

        let message = composer.compose(&self.draft);
        let url = whatsapp::deep_link(destination, &message);
        opener.open(&url);

        self.submission = SubmissionState::Submitted;
        Some(url)
    }
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Opener that records every handed-off URL.
    #[derive(Default)]
    struct RecordingOpener {
        urls: Mutex<Vec<String>>,
    }

    impl LinkOpener for RecordingOpener {
        fn open(&self, url: &str) {
            self.urls.lock().unwrap().push(url.to_string());
        }
    }

    fn artist() -> ArtistProfile {
        ArtistProfile {
            id: "artist-2".to_string(),
            name: "Martina Padula".to_string(),
            specialties: vec!["Fine Line".to_string()],
            image: "/martina-padula-portrait.jpg".to_string(),
            instagram: Some("mar.fineline".to_string()),
        }
    }

    fn composer() -> MessageComposer {
        MessageComposer::new(
            "{artist} {instagram} {style} {description} {name} {email} {phone} {date}",
            "No especificada",
        )
    }

    fn contact_patch() -> DraftPatch {
        DraftPatch {
            name: Some("Ana".to_string()),
            email: Some("a@b.com".to_string()),
            phone: Some("+54911".to_string()),
            ..DraftPatch::default()
        }
    }

    /// Walk a fresh session to the contact step with valid data.
    fn session_at_contact() -> WizardSession {
        let mut session = WizardSession::new();
        session.apply(DraftPatch {
            artist: Some(artist()),
            ..DraftPatch::default()
        });
        assert!(session.next());
        session.apply(DraftPatch {
            style: Some("minimalist".to_string()),
            ..DraftPatch::default()
        });
        assert!(session.next());
        session.apply(DraftPatch {
            description: Some("sleeve design".to_string()),
            ..DraftPatch::default()
        });
        assert!(session.next());
        session
    }

    // -- step conversion --

    #[test]
    fn step_index_roundtrip() {
        for index in 0..STEP_COUNT {
            let step = WizardStep::from_index(index).unwrap();
            assert_eq!(step.index(), index);
        }
        assert_eq!(WizardStep::from_index(STEP_COUNT), None);
    }

    #[test]
    fn step_order() {
        assert_eq!(WizardStep::FIRST, WizardStep::Artist);
        assert_eq!(WizardStep::LAST, WizardStep::Contact);
        assert!(WizardStep::Artist < WizardStep::Contact);
    }

    // -- gates --

    #[test]
    fn artist_gate_blocks_until_selected() {
        let mut session = WizardSession::new();
        assert!(!session.next());
        assert_eq!(session.step(), WizardStep::Artist);

        session.apply(DraftPatch {
            artist: Some(artist()),
            ..DraftPatch::default()
        });
        assert!(session.next());
        assert_eq!(session.step(), WizardStep::Style);
    }

    #[test]
    fn style_gate_rejects_missing_and_empty() {
        let mut session = WizardSession::new();
        session.apply(DraftPatch {
            artist: Some(artist()),
            ..DraftPatch::default()
        });
        session.next();

        assert!(!session.next());

        session.apply(DraftPatch {
            style: Some(String::new()),
            ..DraftPatch::default()
        });
        assert!(!session.next());
        assert_eq!(session.step(), WizardStep::Style);

        session.apply(DraftPatch {
            style: Some("blackwork".to_string()),
            ..DraftPatch::default()
        });
        assert!(session.next());
    }

    #[test]
    fn details_gate_trims_whitespace() {
        let draft = BookingDraft {
            description: Some("   ".to_string()),
            ..BookingDraft::default()
        };
        assert!(!draft.step_complete(WizardStep::Details));

        let draft = BookingDraft {
            description: Some(" x ".to_string()),
            ..BookingDraft::default()
        };
        assert!(draft.step_complete(WizardStep::Details));
    }

    #[test]
    fn contact_gate_requires_all_three_fields() {
        let mut draft = BookingDraft::default();
        assert!(!draft.step_complete(WizardStep::Contact));

        draft.name = Some("Ana".to_string());
        draft.email = Some("a@b.com".to_string());
        assert!(!draft.step_complete(WizardStep::Contact));

        draft.phone = Some("+54911".to_string());
        assert!(draft.step_complete(WizardStep::Contact));
    }

    #[test]
    fn contact_gate_is_presence_only() {
        // Malformed but non-empty values pass: this boundary is explicit.
        let draft = BookingDraft {
            name: Some("x".to_string()),
            email: Some("not-an-email".to_string()),
            phone: Some("call me".to_string()),
            ..BookingDraft::default()
        };
        assert!(draft.step_complete(WizardStep::Contact));
    }

    // -- navigation --

    #[test]
    fn previous_is_idempotent_on_first_step() {
        let mut session = WizardSession::new();
        for _ in 0..5 {
            assert!(!session.previous());
            assert_eq!(session.step(), WizardStep::Artist);
        }
    }

    #[test]
    fn next_is_a_noop_on_last_step() {
        let mut session = session_at_contact();
        session.apply(contact_patch());
        // Gate passes, but there is nowhere further to go.
        for _ in 0..5 {
            assert!(!session.next());
            assert_eq!(session.step(), WizardStep::Contact);
        }
    }

    #[test]
    fn previous_then_next_returns_to_same_step() {
        let mut session = session_at_contact();
        assert!(session.previous());
        assert_eq!(session.step(), WizardStep::Details);
        assert!(session.next());
        assert_eq!(session.step(), WizardStep::Contact);
    }

    // -- draft merging --

    #[test]
    fn patch_merges_without_clearing() {
        let mut draft = BookingDraft::default();
        draft.apply(DraftPatch {
            name: Some("Ana".to_string()),
            ..DraftPatch::default()
        });
        draft.apply(DraftPatch {
            email: Some("a@b.com".to_string()),
            ..DraftPatch::default()
        });

        // An unset field in a later patch leaves earlier values in place.
        assert_eq!(draft.name.as_deref(), Some("Ana"));
        assert_eq!(draft.email.as_deref(), Some("a@b.com"));
    }

    #[test]
    fn patch_overwrites_existing_values() {
        let mut draft = BookingDraft::default();
        draft.apply(DraftPatch {
            style: Some("realistic".to_string()),
            ..DraftPatch::default()
        });
        draft.apply(DraftPatch {
            style: Some("geometric".to_string()),
            ..DraftPatch::default()
        });
        assert_eq!(draft.style.as_deref(), Some("geometric"));
    }

    #[test]
    fn updates_are_accepted_at_any_step() {
        let mut session = WizardSession::new();
        // Contact data entered while still on step 0: no validation on
        // mutation.
        session.apply(contact_patch());
        assert_eq!(session.draft().name.as_deref(), Some("Ana"));
        assert_eq!(session.step(), WizardStep::Artist);
    }

    // -- submit --

    #[test]
    fn submit_refused_before_last_step() {
        let opener = RecordingOpener::default();
        let mut session = WizardSession::new();
        session.apply(contact_patch());

        assert_eq!(session.submit(&composer(), "+54911", &opener), None);
        assert_eq!(session.submission(), SubmissionState::Editing);
        assert!(opener.urls.lock().unwrap().is_empty());
    }

    #[test]
    fn submit_refused_without_contact_data() {
        let opener = RecordingOpener::default();
        let mut session = session_at_contact();

        assert!(!session.can_submit());
        assert_eq!(session.submit(&composer(), "+54911", &opener), None);
        assert_eq!(session.submission(), SubmissionState::Editing);
    }

    #[test]
    fn submit_issues_exactly_one_handoff() {
        let opener = RecordingOpener::default();
        let mut session = session_at_contact();
        session.apply(contact_patch());

        let url = session
            .submit(&composer(), "+54 9 11 7160-1995", &opener)
            .unwrap();

        assert!(url.starts_with("https://wa.me/5491171601995?text="));
        assert_eq!(session.submission(), SubmissionState::Submitted);
        assert_eq!(opener.urls.lock().unwrap().len(), 1);
        assert_eq!(opener.urls.lock().unwrap()[0], url);
    }

    #[test]
    fn submitted_is_terminal() {
        let opener = RecordingOpener::default();
        let mut session = session_at_contact();
        session.apply(contact_patch());
        session.submit(&composer(), "+54911", &opener).unwrap();

        // A second submit is refused silently; no second handoff.
        assert_eq!(session.submit(&composer(), "+54911", &opener), None);
        assert_eq!(session.submission(), SubmissionState::Submitted);
        assert_eq!(opener.urls.lock().unwrap().len(), 1);

        // Navigation away from the success state is refused too.
        assert!(!session.next());
    }

    #[test]
    fn full_booking_flow() {
        let opener = RecordingOpener::default();
        let mut session = WizardSession::new();

        session.apply(DraftPatch {
            artist: Some(artist()),
            ..DraftPatch::default()
        });
        assert!(session.next());

        session.apply(DraftPatch {
            style: Some("minimalist".to_string()),
            ..DraftPatch::default()
        });
        assert!(session.next());

        session.apply(DraftPatch {
            description: Some("sleeve design".to_string()),
            ..DraftPatch::default()
        });
        assert!(session.next());

        session.apply(contact_patch());
        let url = session
            .submit(&composer(), "+54 9 11 7160-1995", &opener)
            .unwrap();

        assert_eq!(session.submission(), SubmissionState::Submitted);
        assert!(url.contains("minimalist") || url.contains("text="));
        assert_eq!(opener.urls.lock().unwrap().len(), 1);
    }
}
