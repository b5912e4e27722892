use std::fmt;
use std::str::FromStr;
use crate::error::LocaleError;

/// Digit grouping convention for a display locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    pub tag: &'static str,
    pub grouping_separator: char,
}

impl NumberLocale {
    pub const EN_US: NumberLocale = NumberLocale { tag: "en-US", grouping_separator: ',' };
    pub const EN_GB: NumberLocale = NumberLocale { tag: "en-GB", grouping_separator: ',' };
    pub const DE_DE: NumberLocale = NumberLocale { tag: "de-DE", grouping_separator: '.' };
    pub const FR_FR: NumberLocale = NumberLocale { tag: "fr-FR", grouping_separator: '\u{202F}' };

    const KNOWN: [NumberLocale; 4] = [Self::EN_US, Self::EN_GB, Self::DE_DE, Self::FR_FR];
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::EN_US
    }
}

impl fmt::Display for NumberLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag)
    }
}

impl FromStr for NumberLocale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('_', "-");
        if normalized.is_empty() {
            return Err(LocaleError::Unknown(s.to_string()));
        }

        if let Some(locale) = Self::KNOWN
            .iter()
            .find(|l| l.tag.eq_ignore_ascii_case(&normalized))
        {
            return Ok(*locale);
        }

        // A bare language subtag maps to its preset, unknown regions are rejected
        match normalized.to_ascii_lowercase().as_str() {
            "en" => Ok(Self::EN_US),
            "de" => Ok(Self::DE_DE),
            "fr" => Ok(Self::FR_FR),
            _ => Err(LocaleError::Unknown(s.to_string())),
        }
    }
}

/// Inserts `separator` between every group of three digits, counting from the right.
/// An optional leading `-` is kept in front of the grouped digits.
pub fn group_digits(digits: &str, separator: char) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let grouped: String = digits.chars().rev().collect::<Vec<_>>()
        .chunks(3)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(&separator.to_string())
        .chars()
        .rev()
        .collect();

    format!("{}{}", sign, grouped)
}

pub fn format_count(n: u64, locale: &NumberLocale) -> String {
    group_digits(&n.to_string(), locale.grouping_separator)
}
