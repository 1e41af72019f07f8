use std::sync::Arc;

use estudio12_content::ContentProvider;
use estudio12_core::error::CoreError;
use estudio12_core::locale::{Dictionary, Locale};
use estudio12_core::whatsapp::LinkOpener;

use crate::config::ServerConfig;
use crate::sessions::SessionStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Preloaded locale dictionaries.
    pub dictionaries: Arc<Dictionaries>,
    /// Site content provider (CMS with fallback).
    pub content: Arc<ContentProvider>,
    /// Live booking wizard sessions.
    pub sessions: Arc<SessionStore>,
    /// External open-link collaborator for the WhatsApp handoff.
    pub opener: Arc<dyn LinkOpener>,
}

/// Both locales' dictionaries, loaded once at startup.
pub struct Dictionaries {
    es: Dictionary,
    en: Dictionary,
}

impl Dictionaries {
    /// Load the embedded dictionaries for every supported locale.
    pub fn load() -> Result<Self, CoreError> {
        Ok(Self {
            es: Dictionary::load(Locale::Es)?,
            en: Dictionary::load(Locale::En)?,
        })
    }

    pub fn get(&self, locale: Locale) -> &Dictionary {
        match locale {
            Locale::Es => &self.es,
            Locale::En => &self.en,
        }
    }
}
