//! Display-language label lookup.
//!
//! Labels only ever change presentation text; nothing in here feeds back
//! into the advice computation.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Gujarati,
    Hindi,
}

impl Language {
    pub const fn all() -> &'static [Language] {
        &[Language::English, Language::Gujarati, Language::Hindi]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Gujarati => "gujarati",
            Language::Hindi => "hindi",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::English => "English",
            Language::Gujarati => "Gujarati",
            Language::Hindi => "Hindi",
        };
        f.write_str(name)
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "gujarati" | "gu" => Ok(Language::Gujarati),
            "hindi" | "hi" => Ok(Language::Hindi),
            _ => Err(anyhow::anyhow!(
                "Unknown language '{value}'. Supported languages: english, gujarati, hindi."
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Weather,
    Temperature,
    Humidity,
    Rainfall,
    Condition,
    Advice,
    Recommended,
    NotNeeded,
    SavingScore,
    ErrorWeather,
    ErrorApi,
}

impl Label {
    pub const fn all() -> &'static [Label] {
        &[
            Label::Weather,
            Label::Temperature,
            Label::Humidity,
            Label::Rainfall,
            Label::Condition,
            Label::Advice,
            Label::Recommended,
            Label::NotNeeded,
            Label::SavingScore,
            Label::ErrorWeather,
            Label::ErrorApi,
        ]
    }
}

pub fn resolve_label(language: Language, label: Label) -> &'static str {
    match language {
        Language::English => english(label),
        Language::Gujarati => gujarati(label),
        Language::Hindi => hindi(label),
    }
}

fn english(label: Label) -> &'static str {
    match label {
        Label::Weather => "Weather Data",
        Label::Temperature => "Temperature",
        Label::Humidity => "Humidity",
        Label::Rainfall => "Rainfall (last 1hr)",
        Label::Condition => "Condition",
        Label::Advice => "Irrigation Advice",
        Label::Recommended => "Irrigation Recommended",
        Label::NotNeeded => "No Irrigation Needed",
        Label::SavingScore => "Water Saving Score",
        Label::ErrorWeather => "Unable to fetch weather data. Please check your location.",
        Label::ErrorApi => "Weather service temporarily unavailable. Please try again later.",
    }
}

fn gujarati(label: Label) -> &'static str {
    match label {
        Label::Weather => "હવામાન માહિતી",
        Label::Temperature => "તાપમાન",
        Label::Humidity => "ભેજ",
        Label::Rainfall => "વર્ષા (છેલ્લા 1 કલાકમાં)",
        Label::Condition => "હવામાન સ્થિતિ",
        Label::Advice => "સિંચાઇ સલાહ",
        Label::Recommended => "સિંચાઇ કરવાની ભલામણ છે",
        Label::NotNeeded => "સિંચાઇની જરૂર નથી",
        Label::SavingScore => "પાણી બચાવ સ્કોર",
        Label::ErrorWeather => "હવામાન માહિતી મેળવવામાં અસમર્થ. કૃપા કરીને તમારું સ્થાન તપાસો.",
        Label::ErrorApi => "હવામાન સેવા અસ્થાયી રૂપે અનુપલબ્ધ છે. કૃપા કરીને ફરીથી પ્રયાસ કરો.",
    }
}

fn hindi(label: Label) -> &'static str {
    match label {
        Label::Weather => "मौसम की जानकारी",
        Label::Temperature => "तापमान",
        Label::Humidity => "आर्द्रता",
        Label::Rainfall => "वर्षा (पिछले 1 घंटे में)",
        Label::Condition => "स्थिति",
        Label::Advice => "सिंचाई सलाह",
        Label::Recommended => "सिंचाई की सिफारिश की जाती है",
        Label::NotNeeded => "सिंचाई की आवश्यकता नहीं है",
        Label::SavingScore => "जल बचत स्कोर",
        Label::ErrorWeather => "मौसम डेटा प्राप्त करने में असमर्थ। कृपया अपना स्थान जांचें।",
        Label::ErrorApi => "मौसम सेवा अस्थायी रूप से अनुपलब्ध है। कृपया बाद में पुनः प्रयास करें।",
    }
}
