//! UI string localization
//!
//! Lookup falls back from the selected locale to English, then to the key
//! itself, so a missing translation never yields an empty label.

use crate::errors::AdvisorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

type Table = [(&'static str, &'static str); 16];

/// Supported interface languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    English,
    Hindi,
    Tamil,
    Telugu,
    Kannada,
    Malayalam,
    Tulu,
}

impl Locale {
    pub const ALL: [Locale; 7] = [
        Locale::English,
        Locale::Hindi,
        Locale::Tamil,
        Locale::Telugu,
        Locale::Kannada,
        Locale::Malayalam,
        Locale::Tulu,
    ];

    /// Stable lowercase code used in URLs and config
    pub fn code(&self) -> &'static str {
        match self {
            Locale::English => "english",
            Locale::Hindi => "hindi",
            Locale::Tamil => "tamil",
            Locale::Telugu => "telugu",
            Locale::Kannada => "kannada",
            Locale::Malayalam => "malayalam",
            Locale::Tulu => "tulu",
        }
    }

    /// Name shown in the language picker, in its own script
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::English => "English",
            Locale::Hindi => "हिंदी (Hindi)",
            Locale::Tamil => "தமிழ் (Tamil)",
            Locale::Telugu => "తెలుగు (Telugu)",
            Locale::Kannada => "ಕನ್ನಡ (Kannada)",
            Locale::Malayalam => "മലയാളം (Malayalam)",
            Locale::Tulu => "ತುಳು (Tulu)",
        }
    }

    fn table(&self) -> &'static Table {
        match self {
            Locale::English => &ENGLISH,
            Locale::Hindi => &HINDI,
            Locale::Tamil => &TAMIL,
            Locale::Telugu => &TELUGU,
            Locale::Kannada => &KANNADA,
            Locale::Malayalam => &MALAYALAM,
            Locale::Tulu => &TULU,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Locale {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|locale| locale.code() == code)
            .ok_or_else(|| AdvisorError::UnknownLocale(s.to_string()))
    }
}

fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    locale
        .table()
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .filter(|v| !v.is_empty())
}

/// Translate `key`, falling back to English and then to the key
pub fn translate<'a>(locale: Locale, key: &'a str) -> &'a str {
    lookup(locale, key)
        .or_else(|| lookup(Locale::English, key))
        .unwrap_or(key)
}

/// Every translated key for a locale, in table order
pub fn translations(locale: Locale) -> Vec<(&'static str, &'static str)> {
    locale.table().to_vec()
}

// ============================================================================
// Translation tables
// ============================================================================

const ENGLISH: Table = [
    ("plant.library.title", "Plant Irrigation Library"),
    ("plant.library.description", "Browse detailed irrigation information for 500+ garden plants"),
    ("plant.library.showing", "Showing"),
    ("plant.library.of", "of"),
    ("plant.library.plants", "plants"),
    ("plant.library.noPlants", "No plants found matching your search criteria."),
    ("plant.library.search", "Search plants..."),
    ("plant.library.type", "Plant Type"),
    ("plant.library.waterNeeds", "Water Needs"),
    ("nav.home", "Home"),
    ("nav.prediction", "Irrigation Prediction"),
    ("nav.growth", "Growth Tracker"),
    ("nav.dna", "Irrigation DNA"),
    ("nav.capture", "Plant Capture"),
    ("nav.library", "Plant Library"),
    ("language", "Language"),
];

const HINDI: Table = [
    ("plant.library.title", "पौधा सिंचाई पुस्तकालय"),
    ("plant.library.description", "500+ से अधिक बगीचे के पौधों के लिए विस्तृत सिंचाई जानकारी ब्राउज़ करें"),
    ("plant.library.showing", "दिखा रहा है"),
    ("plant.library.of", "का"),
    ("plant.library.plants", "पौधे"),
    ("plant.library.noPlants", "आपके खोज मापदंडों से मेल खाने वाले कोई पौधे नहीं मिले।"),
    ("plant.library.search", "पौधे खोजें..."),
    ("plant.library.type", "पौधे का प्रकार"),
    ("plant.library.waterNeeds", "पानी की आवश्यकता"),
    ("nav.home", "होम"),
    ("nav.prediction", "सिंचाई भविष्यवाणी"),
    ("nav.growth", "विकास ट्रैकर"),
    ("nav.dna", "सिंचाई डीएनए"),
    ("nav.capture", "पौधा कैप्चर"),
    ("nav.library", "पौधा पुस्तकालय"),
    ("language", "भाषा"),
];

const TAMIL: Table = [
    ("plant.library.title", "தாவர நீர்ப்பாசன நூலகம்"),
    ("plant.library.description", "500+ தோட்டத் தாவரங்களுக்கான விரிவான நீர்ப்பாசனத் தகவல்களை உலாவுங்கள்"),
    ("plant.library.showing", "காட்டுகிறது"),
    ("plant.library.of", "இல்"),
    ("plant.library.plants", "தாவரங்கள்"),
    ("plant.library.noPlants", "உங்கள் தேடல் அளவுகோல்களுக்கு பொருந்தும் தாவரங்கள் எதுவும் இல்லை."),
    ("plant.library.search", "தாவரங்களைத் தேடுங்கள்..."),
    ("plant.library.type", "தாவர வகை"),
    ("plant.library.waterNeeds", "நீர் தேவைகள்"),
    ("nav.home", "முகப்பு"),
    ("nav.prediction", "நீர்ப்பாசன முன்னறிவிப்பு"),
    ("nav.growth", "வளர்ச்சி கண்காணிப்பு"),
    ("nav.dna", "நீர்ப்பாசன டிஎன்ஏ"),
    ("nav.capture", "தாவர கேப்சர்"),
    ("nav.library", "தாவர நூலகம்"),
    ("language", "மொழி"),
];

const TELUGU: Table = [
    ("plant.library.title", "మొక్క నీటి పారుదల లైబ్రరీ"),
    ("plant.library.description", "500+ గార్డెన్ మొక్కల కోసం వివరణాత్మక నీటి పారుదల సమాచారాన్ని బ్రౌజ్ చేయండి"),
    ("plant.library.showing", "చూపిస్తోంది"),
    ("plant.library.of", "యొక్క"),
    ("plant.library.plants", "మొక్కలు"),
    ("plant.library.noPlants", "మీ శోధన ప్రమాణాలకు సరిపోలే మొక్కలు కనుగొనబడలేదు."),
    ("plant.library.search", "మొక్కలను శోధించండి..."),
    ("plant.library.type", "మొక్క రకం"),
    ("plant.library.waterNeeds", "నీటి అవసరాలు"),
    ("nav.home", "హోమ్"),
    ("nav.prediction", "నీటి పారుదల అంచనా"),
    ("nav.growth", "పెరుగుదల ట్రాకర్"),
    ("nav.dna", "నీటి పారుదల డిఎన్ఏ"),
    ("nav.capture", "మొక్క కాప్చర్"),
    ("nav.library", "మొక్కల లైబ్రరీ"),
    ("language", "భాష"),
];

const KANNADA: Table = [
    ("plant.library.title", "ಸಸ್ಯ ನೀರಾವರಿ ಗ್ರಂಥಾಲಯ"),
    ("plant.library.description", "500+ ಉದ್ಯಾನ ಸಸ್ಯಗಳಿಗೆ ವಿವರವಾದ ನೀರಾವರಿ ಮಾಹಿತಿಯನ್ನು ಬ್ರೌಸ್ ಮಾಡಿ"),
    ("plant.library.showing", "ತೋರಿಸುತ್ತಿದೆ"),
    ("plant.library.of", "ರಲ್ಲಿ"),
    ("plant.library.plants", "ಸಸ್ಯಗಳು"),
    ("plant.library.noPlants", "ನಿಮ್ಮ ಹುಡುಕಾಟ ಮಾನದಂಡಗಳಿಗೆ ಹೊಂದಿಕೆಯಾಗುವ ಯಾವುದೇ ಸಸ್ಯಗಳು ಕಂಡುಬಂದಿಲ್ಲ."),
    ("plant.library.search", "ಸಸ್ಯಗಳನ್ನು ಹುಡುಕಿ..."),
    ("plant.library.type", "ಸಸ್ಯದ ಪ್ರಕಾರ"),
    ("plant.library.waterNeeds", "ನೀರಿನ ಅಗತ್ಯಗಳು"),
    ("nav.home", "ಮುಖಪುಟ"),
    ("nav.prediction", "ನೀರಾವರಿ ಮುನ್ಸೂಚನೆ"),
    ("nav.growth", "ಬೆಳವಣಿಗೆ ಟ್ರ್ಯಾಕರ್"),
    ("nav.dna", "ನೀರಾವರಿ ಡಿಎನ್ಎ"),
    ("nav.capture", "ಸಸ್ಯ ಕ್ಯಾಪ್ಚರ್"),
    ("nav.library", "ಸಸ್ಯ ಗ್ರಂಥಾಲಯ"),
    ("language", "ಭಾಷೆ"),
];

const MALAYALAM: Table = [
    ("plant.library.title", "സസ്യ ജലസേചന ലൈബ്രറി"),
    ("plant.library.description", "500+ ഗാർഡൻ സസ്യങ്ങൾക്കായുള്ള വിശദമായ ജലസേചന വിവരങ്ങൾ ബ്രൗസ് ചെയ്യുക"),
    ("plant.library.showing", "കാണിക്കുന്നു"),
    ("plant.library.of", "ഓഫ്"),
    ("plant.library.plants", "സസ്യങ്ങൾ"),
    ("plant.library.noPlants", "നിങ്ങളുടെ തിരയൽ മാനദണ്ഡങ്ങളുമായി പൊരുത്തപ്പെടുന്ന സസ്യങ്ങളൊന്നും കണ്ടെത്തിയില്ല."),
    ("plant.library.search", "സസ്യങ്ങൾ തിരയുക..."),
    ("plant.library.type", "സസ്യ തരം"),
    ("plant.library.waterNeeds", "ജലാവശ്യകത"),
    ("nav.home", "ഹോം"),
    ("nav.prediction", "ജലസേചന പ്രവചനം"),
    ("nav.growth", "വളർച്ചാ ട്രാക്കർ"),
    ("nav.dna", "ജലസേചന ഡിഎൻഎ"),
    ("nav.capture", "സസ്യ ക്യാപ്ച്ചർ"),
    ("nav.library", "സസ്യ ലൈബ്രറി"),
    ("language", "ഭാഷ"),
];

const TULU: Table = [
    ("plant.library.title", "ಗಿಡದ ನೀರಾವರಿ ಗ್ರಂಥಾಲಯ"),
    ("plant.library.description", "500+ ಗಿದಾವಾಡಿ ಗಿಡೊಲೆಗ್ ವಿವರವಾಯಿನ ನೀರಾವರಿ ಮಾಹಿತಿನ್ ಬ್ರೌಸ್ ಮಲ್ಪುಲೆ"),
    ("plant.library.showing", "ತೋಜಾವೊಂದುಂಡು"),
    ("plant.library.of", "ದ"),
    ("plant.library.plants", "ಗಿಡೊಲು"),
    ("plant.library.noPlants", "ಎರೆನ ಶೋಧನೆ ಮಾನದಂಡೊಲೆಗ್ ಹೊಂದುನ ಗಿಡೊಲು ಯಾವಯಾ ತಿಕ್ಕಂದಿಜ್ಜಿ."),
    ("plant.library.search", "ಗಿಡೊಲೆನ್ ಶೋಧನೆ ಮಲ್ಪುಲೆ..."),
    ("plant.library.type", "ಗಿಡದ ವಿಧ"),
    ("plant.library.waterNeeds", "ನೀರಿನ ಅಗತ್ಯೊಲು"),
    ("nav.home", "ಮನೆಪುಟ"),
    ("nav.prediction", "ನೀರಾವರಿ ಪ್ರವಚನ"),
    ("nav.growth", "ಬೆಳೆವು ಟ್ರ್ಯಾಕರ್"),
    ("nav.dna", "ನೀರಾವರಿ ಡಿಎನ್ಎ"),
    ("nav.capture", "ಗಿಡ ಕ್ಯಾಪ್ಚರ್"),
    ("nav.library", "ಗಿಡದ ಗ್ರಂಥಾಲಯ"),
    ("language", "ಭಾಷೆ"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("english", Locale::English)]
    #[case("Hindi", Locale::Hindi)]
    #[case(" tulu ", Locale::Tulu)]
    fn test_parse_locale(#[case] input: &str, #[case] expected: Locale) {
        assert_eq!(input.parse::<Locale>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_locale() {
        let err = "klingon".parse::<Locale>().unwrap_err();
        assert_eq!(err, AdvisorError::UnknownLocale("klingon".to_string()));
    }

    #[test]
    fn test_translate_selected_locale() {
        assert_eq!(translate(Locale::English, "nav.home"), "Home");
        assert_eq!(translate(Locale::Hindi, "language"), "भाषा");
        assert_eq!(translate(Locale::Tamil, "nav.library"), "தாவர நூலகம்");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(translate(Locale::Kannada, "nav.settings"), "nav.settings");
    }

    #[test]
    fn test_tables_share_keys() {
        let english: Vec<_> = translations(Locale::English).into_iter().map(|(k, _)| k).collect();
        for locale in Locale::ALL {
            let keys: Vec<_> = translations(locale).into_iter().map(|(k, _)| k).collect();
            assert_eq!(keys, english, "{locale}");
        }
    }

    #[test]
    fn test_codes_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(locale.code().parse::<Locale>().unwrap(), locale);
            assert_eq!(
                serde_json::to_string(&locale).unwrap(),
                format!("\"{}\"", locale.code())
            );
        }
    }
}
