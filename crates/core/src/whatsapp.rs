//! WhatsApp message composition and deep-link construction.
//!
//! The booking wizard and the contact form both finish by handing the
//! visitor off to the studio's WhatsApp line: a composed message is
//! percent-encoded into a `https://wa.me/<number>?text=...` deep link and
//! given to an external "open link" collaborator. Nothing is stored and
//! the outcome of the handoff is never observed.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::booking::BookingDraft;
use crate::error::CoreError;
use crate::locale::Dictionary;

/// Placeholder used when the selected artist has no Instagram handle.
pub const INSTAGRAM_FALLBACK: &str = "N/A";

/// Dictionary key for the message template.
pub const KEY_MESSAGE_TEMPLATE: &str = "whatsapp.message_template";

/// Dictionary key for the studio's destination phone number.
pub const KEY_PHONE_NUMBER: &str = "whatsapp.phone_number";

/// Dictionary key for the "not specified" date placeholder.
pub const KEY_DATE_FALLBACK: &str = "whatsapp.date_fallback";

// ---------------------------------------------------------------------------
// LinkOpener
// ---------------------------------------------------------------------------

/// External collaborator that opens a deep link in a new context.
///
/// Fire-and-forget by design: implementations report nothing back, and
/// callers must not retry or observe success. Tests substitute a
/// recording implementation to count handoffs.
pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str);
}

/// Production opener: the actual navigation happens on the client, so the
/// backend's side of the handoff is a structured log line.
#[derive(Debug, Default)]
pub struct TracingOpener;

impl LinkOpener for TracingOpener {
    fn open(&self, url: &str) {
        tracing::info!(target = "whatsapp", %url, "Issuing external open-link handoff");
    }
}

// ---------------------------------------------------------------------------
// MessageComposer
// ---------------------------------------------------------------------------

/// Deterministic `BookingDraft` → message transform.
///
/// Fills the locale's template by replacing the fixed token set
/// `{artist}` `{instagram}` `{style}` `{description}` `{name}` `{email}`
/// `{phone}` `{date}` with draft values. Absent free-text fields become
/// the empty string; an absent (or empty) preferred date becomes the
/// locale's "not specified" placeholder; the Instagram handle is prefixed
/// with `@` when present, else replaced with `N/A`.
#[derive(Debug, Clone)]
pub struct MessageComposer {
    template: String,
    date_fallback: String,
}

impl MessageComposer {
    pub fn new(template: impl Into<String>, date_fallback: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            date_fallback: date_fallback.into(),
        }
    }

    /// Build a composer from the injected locale dictionary.
    pub fn from_dictionary(dict: &Dictionary) -> Result<Self, CoreError> {
        Ok(Self::new(
            dict.require(KEY_MESSAGE_TEMPLATE)?,
            dict.require(KEY_DATE_FALLBACK)?,
        ))
    }

    /// Fill the template with the draft's collected values.
    pub fn compose(&self, draft: &BookingDraft) -> String {
        let artist_name = draft
            .artist
            .as_ref()
            .map(|a| a.name.as_str())
            .unwrap_or_default();

        let instagram = draft
            .artist
            .as_ref()
            .and_then(|a| a.instagram_handle())
            .map(|h| format!("@{h}"))
            .unwrap_or_else(|| INSTAGRAM_FALLBACK.to_string());

        let date = draft
            .preferred_date
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(&self.date_fallback);

        self.template
            .replace("{artist}", artist_name)
            .replace("{instagram}", &instagram)
            .replace("{style}", draft.style.as_deref().unwrap_or_default())
            .replace("{description}", draft.description.as_deref().unwrap_or_default())
            .replace("{name}", draft.name.as_deref().unwrap_or_default())
            .replace("{email}", draft.email.as_deref().unwrap_or_default())
            .replace("{phone}", draft.phone.as_deref().unwrap_or_default())
            .replace("{date}", date)
    }
}

// ---------------------------------------------------------------------------
// Contact form composition
// ---------------------------------------------------------------------------

/// A contact-page form submission. Never stored; only composed into a
/// deep link.
#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

/// Compose the contact form's WhatsApp message: intro line, bold-labelled
/// name/email (phone only when provided), then the message body.
pub fn compose_contact_message(dict: &Dictionary, contact: &ContactMessage) -> Result<String, CoreError> {
    let intro = dict.require("contact.form.whatsapp_intro")?;
    let name_label = dict.require("contact.form.name_label")?;
    let email_label = dict.require("contact.form.email_label")?;
    let phone_label = dict.require("contact.form.phone_label")?;
    let message_label = dict.require("contact.form.message_label")?;

    let phone_line = match contact.phone.as_deref().filter(|p| !p.is_empty()) {
        Some(phone) => format!("*{phone_label}:* {phone}\n"),
        None => String::new(),
    };

    Ok(format!(
        "{intro}\n\n*{name_label}:* {name}\n*{email_label}:* {email}\n{phone_line}*{message_label}:*\n{message}",
        name = contact.name,
        email = contact.email,
        message = contact.message,
    ))
}

// ---------------------------------------------------------------------------
// Deep link
// ---------------------------------------------------------------------------

/// Strip every non-digit character from a configured phone number.
///
/// The deep link's host path takes the studio's destination line, never
/// the visitor's submitted phone.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Build the `wa.me` deep link for a destination number and message.
pub fn deep_link(destination: &str, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        normalize_phone(destination),
        utf8_percent_encode(message, NON_ALPHANUMERIC),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
