//! Translation of scheme text into the reader's language.
//!
//! [`TextTranslator`] abstracts the external engine; [`GoogleTranslateProvider`]
//! and [`LibreTranslateProvider`] talk to real services, [`MockTranslator`] is a
//! deterministic stand-in for tests. [`translate_all`] fans a batch of scheme
//! rows out over a translator and joins the results.

pub mod adapter;
pub mod google_translate;
pub mod libre_translate;
pub mod mock;
pub mod translator;

pub use adapter::translate_all;
pub use google_translate::GoogleTranslateProvider;
pub use libre_translate::LibreTranslateProvider;
pub use mock::{MockMode, MockTranslator};
pub use translator::{TextTranslator, provider_from_config, validate_language};
