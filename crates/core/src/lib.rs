//! Domain core for the Estudio 12 booking platform.
//!
//! Pure logic only: locale dictionaries, the tattoo style catalog, artist
//! profiles, the booking wizard state machine with its per-step gates, and
//! WhatsApp message composition / deep-link construction. No I/O and no
//! HTTP types live here; the `estudio12-api` crate wires these pieces to
//! the outside world.

pub mod artist;
pub mod booking;
pub mod error;
pub mod locale;
pub mod style;
pub mod whatsapp;

pub use artist::ArtistProfile;
pub use booking::{BookingDraft, DraftPatch, SubmissionState, WizardSession, WizardStep};
pub use error::CoreError;
pub use locale::{Dictionary, Locale};
pub use style::TattooStyle;
pub use whatsapp::{LinkOpener, MessageComposer, TracingOpener};
