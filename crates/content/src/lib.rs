//! Site content: the Prismic-shaped CMS client, the hardcoded fallback
//! catalog, and the provider combining both.
//!
//! Every page of the site follows the same pattern: try the CMS in the
//! requested language, retry without a language, and finally fall back to
//! the hardcoded content so the site never renders empty. The provider
//! makes that chain explicit and observable.

pub mod client;
pub mod error;
pub mod fallback;
pub mod provider;

pub use client::CmsClient;
pub use error::ContentError;
pub use provider::{Content, ContentKind, ContentProvider, ContentSource};
