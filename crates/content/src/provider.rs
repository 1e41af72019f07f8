//! Content provider: CMS first, fallback always.
//!
//! [`ContentProvider::get_content`] resolves one page's content through
//! the chain the original site applies on every CMS-backed page:
//!
//! 1. CMS fetch in the requested language;
//! 2. CMS fetch without a language restriction;
//! 3. the hardcoded fallback, which always succeeds.
//!
//! Each downgrade is traced so an unhealthy CMS is visible in the logs
//! without ever surfacing to the visitor.

use estudio12_core::error::CoreError;
use estudio12_core::locale::Locale;
use serde::Serialize;
use serde_json::{json, Value};

use crate::client::CmsClient;
use crate::error::ContentError;
use crate::fallback;

// ---------------------------------------------------------------------------
// Content kinds
// ---------------------------------------------------------------------------

/// The kinds of content the site serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentKind {
    Home,
    About,
    Portfolio,
    Partnerships,
    Contact,
    BookingArtists,
}

impl ContentKind {
    /// All kinds, for fallback sweeps and tests.
    pub const ALL: [ContentKind; 6] = [
        Self::Home,
        Self::About,
        Self::Portfolio,
        Self::Partnerships,
        Self::Contact,
        Self::BookingArtists,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Portfolio => "portfolio",
            Self::Partnerships => "partnerships",
            Self::Contact => "contact",
            Self::BookingArtists => "booking-artists",
        }
    }

    /// The CMS document type backing this kind, if any. `None` means the
    /// content is hardcoded-only (the partner list and the about page are
    /// not CMS-managed yet).
    fn doc_type(self) -> Option<&'static str> {
        match self {
            Self::Home => Some("home"),
            Self::Portfolio => Some("work"),
            Self::BookingArtists => Some("aboutus"),
            Self::About | Self::Partnerships | Self::Contact => None,
        }
    }
}

impl std::str::FromStr for ContentKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Self::Home),
            "about" => Ok(Self::About),
            "portfolio" => Ok(Self::Portfolio),
            "partnerships" => Ok(Self::Partnerships),
            "contact" => Ok(Self::Contact),
            "booking-artists" => Ok(Self::BookingArtists),
            _ => Err(CoreError::Validation(format!(
                "Unknown content kind '{s}'. Must be one of: home, about, portfolio, \
                 partnerships, contact, booking-artists"
            ))),
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Resolved content
// ---------------------------------------------------------------------------

/// Where a piece of content ultimately came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentSource {
    Cms,
    CmsAnyLang,
    Fallback,
}

/// One resolved piece of content.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub kind: ContentKind,
    pub locale: Locale,
    pub source: ContentSource,
    pub data: Value,
}

// ---------------------------------------------------------------------------
// Provider
// ---------------------------------------------------------------------------

/// Resolves content through the CMS → any-language → fallback chain.
pub struct ContentProvider {
    cms: Option<CmsClient>,
}

impl ContentProvider {
    pub fn new(cms: Option<CmsClient>) -> Self {
        Self { cms }
    }

    /// A provider that never touches the network.
    pub fn fallback_only() -> Self {
        Self { cms: None }
    }

    /// Whether a CMS endpoint is configured.
    pub fn has_cms(&self) -> bool {
        self.cms.is_some()
    }

    /// Resolve content for a page. Never fails: the fallback catalog is
    /// the chain's floor.
    pub async fn get_content(&self, kind: ContentKind, locale: Locale) -> Content {
        if let (Some(cms), Some(doc_type)) = (&self.cms, kind.doc_type()) {
            match self.fetch(cms, doc_type, kind, locale, Some(locale.prismic_lang())).await {
                Ok(data) => {
                    return Content {
                        kind,
                        locale,
                        source: ContentSource::Cms,
                        data,
                    }
                }
                Err(err) => {
                    tracing::warn!(%kind, %locale, error = %err, "CMS fetch failed, retrying without language");
                }
            }

            match self.fetch(cms, doc_type, kind, locale, None).await {
                Ok(data) => {
                    return Content {
                        kind,
                        locale,
                        source: ContentSource::CmsAnyLang,
                        data,
                    }
                }
                Err(err) => {
                    tracing::warn!(%kind, %locale, error = %err, "CMS fetch failed again, using fallback content");
                }
            }
        }

        Content {
            kind,
            locale,
            source: ContentSource::Fallback,
            data: fallback_for(kind, locale),
        }
    }

    async fn fetch(
        &self,
        cms: &CmsClient,
        doc_type: &str,
        kind: ContentKind,
        locale: Locale,
        lang: Option<&str>,
    ) -> Result<Value, ContentError> {
        let document = cms.get_single(doc_type, lang).await?;
        extract(kind, &document, locale)
            .ok_or_else(|| ContentError::NotFound(doc_type.to_string()))
    }
}

/// Hardcoded content for one kind.
fn fallback_for(kind: ContentKind, locale: Locale) -> Value {
    match kind {
        ContentKind::Home => fallback::home(locale),
        ContentKind::About => fallback::about(locale),
        ContentKind::Portfolio => fallback::portfolio(locale),
        ContentKind::Partnerships => fallback::partnerships(locale),
        ContentKind::Contact => fallback::contact(locale),
        ContentKind::BookingArtists => fallback::booking_artists(locale),
    }
}

// ---------------------------------------------------------------------------
// CMS document extraction
// ---------------------------------------------------------------------------

/// Pull the site-shaped payload out of a raw CMS document. Returns `None`
/// when the expected slice is missing, which sends the caller down the
/// fallback chain.
fn extract(kind: ContentKind, document: &Value, locale: Locale) -> Option<Value> {
    match kind {
        ContentKind::Home => extract_home(document, locale),
        ContentKind::Portfolio => extract_portfolio(document),
        ContentKind::BookingArtists => extract_booking_artists(document, locale),
        // Hardcoded-only kinds never reach extraction.
        ContentKind::About | ContentKind::Partnerships | ContentKind::Contact => None,
    }
}

fn find_slice<'a>(document: &'a Value, slice_type: &str) -> Option<&'a Value> {
    document
        .get("slices")?
        .as_array()?
        .iter()
        .find(|slice| slice.get("slice_type").and_then(Value::as_str) == Some(slice_type))
}

/// Home: the `portfolio` slice's images, with the studio video
/// interleaved at its fixed position.
fn extract_home(document: &Value, locale: Locale) -> Option<Value> {
    let slice = find_slice(document, "portfolio")?;
    let images = slice.get("primary")?.get("imagenes")?.as_array()?;

    let mut gallery: Vec<Value> = images
        .iter()
        .enumerate()
        .map(|(index, image)| {
            json!({
                "id": index + 1,
                "title": image.get("title").and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Imagen {}", index + 1)),
                "image": image.pointer("/media/url").and_then(Value::as_str).unwrap_or(""),
                "category": image.get("subtitle").and_then(Value::as_str).unwrap_or("Estudio"),
                "type": "image"
            })
        })
        .collect();

    let position = fallback::HOME_VIDEO_POSITION.min(gallery.len());
    gallery.insert(position, fallback::studio_video(locale));

    Some(json!({ "gallery": gallery }))
}

/// Portfolio: the `works2` slice's works.
fn extract_portfolio(document: &Value) -> Option<Value> {
    let slice = find_slice(document, "works2")?;
    let works = slice.get("primary")?.get("works")?.as_array()?;

    let mapped: Vec<Value> = works
        .iter()
        .enumerate()
        .map(|(index, work)| {
            json!({
                "id": index + 1,
                "image": work.pointer("/picture/url").and_then(Value::as_str).unwrap_or(""),
                "title": work.get("title").and_then(Value::as_str).unwrap_or(""),
                "artist": work.get("subtitle").and_then(Value::as_str).unwrap_or("Estudio 12"),
                "category": work.get("heading").and_then(Value::as_str).unwrap_or("Tatuaje")
            })
        })
        .collect();

    Some(json!({ "works": mapped }))
}

/// Booking artists: the `aboutus` document's `permanent_staff` slice,
/// with the founder prepended (she is not CMS-managed).
fn extract_booking_artists(document: &Value, locale: Locale) -> Option<Value> {
    let slice = find_slice(document, "permanent_staff")?;
    let staff = slice.get("primary")?.get("artists")?.as_array()?;

    let mut artists = vec![fallback::founder(locale)];
    artists.extend(staff.iter().enumerate().map(|(index, artist)| {
        let specialties: Vec<&str> = artist
            .get("category")
            .and_then(Value::as_str)
            .filter(|c| !c.is_empty())
            .into_iter()
            .collect();
        json!({
            "id": format!("artist-{}", index + 2),
            "name": artist.get("name").and_then(Value::as_str).unwrap_or(""),
            "specialties": specialties,
            "image": artist.pointer("/picture/url").and_then(Value::as_str).unwrap_or(""),
            "instagram": artist.get("instagram").and_then(Value::as_str).unwrap_or("")
        })
    }));

    Some(json!(artists))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
