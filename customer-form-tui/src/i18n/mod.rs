//! Internationalisation (i18n)
//!
//! Translation tables are plain structs, so a missing key is a compile error.
//! The active language is a process-wide atomic, switched with F3.

use std::sync::atomic::{AtomicU8, Ordering};

use serde::{Deserialize, Serialize};

mod en_us;
pub mod keys;
mod zh_cn;

pub use keys::*;

static ACTIVE: AtomicU8 = AtomicU8::new(Language::EnUs as u8);

/// UI language, saved in the config file by its BCP 47 code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Language {
    #[default]
    #[serde(rename = "en-US")]
    EnUs = 0,
    #[serde(rename = "zh-CN")]
    ZhCn = 1,
}

impl Language {
    /// Shown in the status bar after switching, in the language itself
    pub fn display_name(self) -> &'static str {
        match self {
            Language::EnUs => "English",
            Language::ZhCn => "简体中文",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::ZhCn => "zh-CN",
        }
    }

    /// Parse `en`, `en-US`, `zh_CN.UTF-8` and similar; the region is ignored
    pub fn from_code(code: &str) -> Option<Language> {
        let primary = code
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "en" => Some(Language::EnUs),
            "zh" => Some(Language::ZhCn),
            _ => None,
        }
    }

    #[must_use]
    pub fn next(self) -> Language {
        match self {
            Language::EnUs => Language::ZhCn,
            Language::ZhCn => Language::EnUs,
        }
    }

    fn translations(self) -> &'static Translations {
        match self {
            Language::EnUs => &en_us::TRANSLATIONS,
            Language::ZhCn => &zh_cn::TRANSLATIONS,
        }
    }
}

/// Text table of the active language
pub fn t() -> &'static Translations {
    current_language().translations()
}

pub fn set_language(lang: Language) {
    ACTIVE.store(lang as u8, Ordering::Relaxed);
}

pub fn current_language() -> Language {
    if ACTIVE.load(Ordering::Relaxed) == Language::ZhCn as u8 {
        Language::ZhCn
    } else {
        Language::EnUs
    }
}
