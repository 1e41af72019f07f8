//! Hardcoded fallback content.
//!
//! When the CMS is unreachable (or not configured) every page still has
//! something to show. The values here mirror the studio's own material:
//! the resident team, the founder, the guest artists, the partner list,
//! and the home gallery's interleaved studio video.

use estudio12_core::locale::Locale;
use serde_json::{json, Value};

/// Position at which the studio-experience video is interleaved into the
/// home gallery.
pub const HOME_VIDEO_POSITION: usize = 3;

const STUDIO_VIDEO_URL: &str = "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/%40natha_streetink%20en%20el%2012%21%20Ya%20nos%20conoces%20Tuviste%20la%20experiencia%20de%20tatuarte%20con%20vista%20panora%CC%81mic-JoeWWFQPOQo1Hjp8MzS2Uvh0Y7RIAH.mp4";

/// The founder's booking-catalog entry; always listed first.
pub fn founder(locale: Locale) -> Value {
    let specialty = match locale {
        Locale::Es => "Fundadora & Directora Artística",
        Locale::En => "Founder & Artistic Director",
    };
    json!({
        "id": "founder-1",
        "name": "Macarena Troiani",
        "specialties": [specialty],
        "image": "/macarena-founder-portrait.webp",
        "instagram": "@maca.tatua"
    })
}

/// The resident team as booking-catalog entries.
pub fn resident_artists(locale: Locale) -> Vec<Value> {
    let mut artists = vec![founder(locale)];
    artists.extend([
        json!({
            "id": "artist-2",
            "name": "Martina Padula",
            "specialties": ["Fine Line"],
            "image": "/martina-padula-portrait.jpg",
            "instagram": "@mar.fineline"
        }),
        json!({
            "id": "artist-3",
            "name": "Ivo Bardon",
            "specialties": ["Blackwork"],
            "image": "/ivo-bardon-portrait.jpg"
        }),
        json!({
            "id": "artist-4",
            "name": "Sofia Campanaro",
            "specialties": ["Ilustrativo"],
            "image": "/sofia-campanaro-portrait.jpg",
            "instagram": "@kcit0"
        }),
        json!({
            "id": "artist-5",
            "name": "Mateo Diaz",
            "specialties": ["Tradicional"],
            "image": "/mateo-diaz-portrait.jpg",
            "instagram": "@mateodiaz.ar"
        }),
    ]);
    artists
}

/// Booking artist catalog: founder first, then the resident team.
pub fn booking_artists(locale: Locale) -> Value {
    json!(resident_artists(locale))
}

/// About page: founder, resident team, guest artists.
pub fn about(locale: Locale) -> Value {
    json!({
        "founder": founder(locale),
        "team": resident_artists(locale),
        "guests": [
            {
                "name": "Ayelen Vera Echegaray",
                "specialty": "Black & Grey, Color & Realismo",
                "image": "/ayelen-vera-echegaray-portrait.jpg",
                "instagram": "@ayeaguafuerte",
                "period": "Por confirmar"
            },
            {
                "name": "Lucas Ghilardi",
                "specialty": "Universo Oscuro & Expresivo",
                "image": "/lucas-ghilardi-portrait.jpg",
                "instagram": "@luks.gh",
                "period": "Por confirmar"
            },
            {
                "name": "Tomás Chiecchio",
                "specialty": "Piezas Únicas & Simbolismo",
                "image": "/tomas-chiecchio-portrait.jpg",
                "instagram": "@a.t.0.0.m",
                "period": "Por confirmar"
            },
            {
                "name": "Clara Bajicoff",
                "specialty": "Diseño & Joyas Permanentes",
                "image": "/clara-bajicoff-portrait.jpg",
                "instagram": "@claratatua",
                "period": "Por confirmar"
            }
        ]
    })
}

/// Home gallery: with no CMS images the interleaved studio video still
/// shows, exactly like the original page.
pub fn home(locale: Locale) -> Value {
    json!({ "gallery": [studio_video(locale)] })
}

/// The studio-experience video entry interleaved into the home gallery.
pub fn studio_video(locale: Locale) -> Value {
    let title = match locale {
        Locale::Es => "La experiencia Estudio 12",
        Locale::En => "The Estudio 12 experience",
    };
    let category = match locale {
        Locale::Es => "Experiencia",
        Locale::En => "Experience",
    };
    json!({
        "id": 999,
        "title": title,
        "video": STUDIO_VIDEO_URL,
        "category": category,
        "type": "video"
    })
}

/// Portfolio works shown when the CMS has nothing.
pub fn portfolio(_locale: Locale) -> Value {
    json!({
        "works": [
            {
                "id": 1,
                "title": "Flora en línea fina",
                "image": "/works/fine-line-flora.jpg",
                "artist": "Estudio 12",
                "category": "Tatuaje"
            },
            {
                "id": 2,
                "title": "Geometría en negro",
                "image": "/works/geometric-black.jpg",
                "artist": "Estudio 12",
                "category": "Tatuaje"
            },
            {
                "id": 3,
                "title": "Acuarela abstracta",
                "image": "/works/watercolor-abstract.jpg",
                "artist": "Estudio 12",
                "category": "Tatuaje"
            }
        ]
    })
}

/// Partner list; hardcoded for now, CMS migration pending.
pub fn partnerships(locale: Locale) -> Value {
    let capelli_description = match locale {
        Locale::Es => {
            "Especialistas en mobiliario para estudios de tatuajes. Nos acompañan con \
             muebles de alta calidad que combinan funcionalidad y estética."
        }
        Locale::En => {
            "Specialists in furniture for tattoo studios. They provide us with \
             high-quality furniture that combines functionality and aesthetics."
        }
    };
    json!({
        "partners": [
            {
                "id": 1,
                "name": "Muebles Capelli",
                "description": capelli_description,
                "logo": "/muebles-capelli.jpeg",
                "website": "https://mueblestattoo.com.ar/",
                "featured": true
            }
        ]
    })
}

/// Contact page essentials: the studio's WhatsApp line and Instagram.
pub fn contact(_locale: Locale) -> Value {
    json!({
        "whatsapp": "+54 9 11 7160-1995",
        "instagram": "@maca.tatua"
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn founder_leads_the_booking_catalog() {
        let artists = booking_artists(Locale::Es);
        let first = &artists.as_array().unwrap()[0];
        assert_eq!(first["id"], "founder-1");
        assert_eq!(first["instagram"], "@maca.tatua");
    }

    #[test]
    fn founder_specialty_is_localized() {
        assert_eq!(
            founder(Locale::Es)["specialties"][0],
            "Fundadora & Directora Artística"
        );
        assert_eq!(
            founder(Locale::En)["specialties"][0],
            "Founder & Artistic Director"
        );
    }

    #[test]
    fn home_fallback_still_carries_the_video() {
        let home = home(Locale::Es);
        let gallery = home["gallery"].as_array().unwrap();
        assert_eq!(gallery.len(), 1);
        assert_eq!(gallery[0]["type"], "video");
        assert_eq!(gallery[0]["id"], 999);
    }

    #[test]
    fn booking_catalog_entries_parse_as_artist_profiles() {
        use estudio12_core::ArtistProfile;

        let artists = booking_artists(Locale::En);
        let parsed: Vec<ArtistProfile> = serde_json::from_value(artists).unwrap();
        assert_eq!(parsed.len(), 5);
        assert!(parsed.iter().any(|a| a.name == "Martina Padula"));
    }
}
