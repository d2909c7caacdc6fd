use std::fmt;
use std::str::FromStr;

/// Display language of the mixer screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum Language {
    #[default]
    Russian,
    English,
}

impl Language {
    /// Locale code used to look up translated strings.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Russian => "ru",
            Language::English => "en",
        }
    }

    /// The other language; the screen only ever switches between two.
    pub fn toggled(&self) -> Self {
        match self {
            Language::Russian => Language::English,
            Language::English => Language::Russian,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language '{0}' (expected ru or en)")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ru" | "russian" => Ok(Language::Russian),
            "en" | "english" => Ok(Language::English),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

impl TryFrom<String> for Language {
    type Error = UnknownLanguage;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Language> for String {
    fn from(value: Language) -> Self {
        value.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_russian() {
        assert_eq!(Language::default(), Language::Russian);
    }

    #[test]
    fn toggle_flips_between_the_two_languages() {
        assert_eq!(Language::Russian.toggled(), Language::English);
        assert_eq!(Language::English.toggled().toggled(), Language::English);
    }

    #[test]
    fn parses_codes_and_names() {
        assert_eq!("RU".parse::<Language>(), Ok(Language::Russian));
        assert_eq!(" english ".parse::<Language>(), Ok(Language::English));
        assert!("de".parse::<Language>().is_err());
    }
}
