//! Localization service

use crate::error::ApiResult;
use crate::state::AppState;
use garden_advisor_shared::{translate, translations, Locale};
use serde::Serialize;
use std::collections::BTreeMap;

/// A supported locale
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleInfo {
    pub code: &'static str,
    pub display_name: &'static str,
}

/// Every UI string for one locale
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleBundle {
    pub locale: Locale,
    pub display_name: &'static str,
    pub translations: BTreeMap<&'static str, &'static str>,
}

/// One translated key
#[derive(Debug, Clone, Serialize)]
pub struct Translation {
    pub key: String,
    pub locale: Locale,
    pub text: String,
}

pub struct I18nService;

impl I18nService {
    /// Resolve a requested locale code, using the configured default when absent
    pub fn resolve_locale(state: &AppState, code: Option<&str>) -> ApiResult<Locale> {
        match code {
            Some(code) => Ok(code.parse()?),
            None => Ok(state.config().advisor.locale()),
        }
    }

    pub fn locales() -> Vec<LocaleInfo> {
        Locale::ALL
            .into_iter()
            .map(|locale| LocaleInfo {
                code: locale.code(),
                display_name: locale.display_name(),
            })
            .collect()
    }

    pub fn bundle(code: &str) -> ApiResult<LocaleBundle> {
        let locale: Locale = code.parse()?;
        Ok(LocaleBundle {
            locale,
            display_name: locale.display_name(),
            translations: translations(locale).into_iter().collect(),
        })
    }

    pub fn translate(state: &AppState, key: &str, code: Option<&str>) -> ApiResult<Translation> {
        let locale = Self::resolve_locale(state, code)?;
        Ok(Translation {
            key: key.to_string(),
            locale,
            text: translate(locale, key).to_string(),
        })
    }
}
