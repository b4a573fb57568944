//! Separator-based normalization of free-form numeric text.

use tender_shared::{LocaleConfig, MoneyError, MoneyResult};

use super::NumberNormalizer;

/// Strips grouping and maps the locale decimal separator to `.`.
///
/// The group separator must split the integer part into groups of exactly
/// three digits, so `"1,5"` is rejected rather than read as `15`.
/// Whitespace and `_` are always treated as loose grouping. The output is
/// otherwise not validated; decimal parsing does that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeparatorNormalizer {
    decimal_separator: char,
    group_separator: char,
}

impl Default for SeparatorNormalizer {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            group_separator: ',',
        }
    }
}

impl SeparatorNormalizer {
    /// Creates a normalizer for the given separators.
    ///
    /// # Errors
    ///
    /// Returns an error if both separators are the same character.
    pub fn new(decimal_separator: char, group_separator: char) -> MoneyResult<Self> {
        if decimal_separator == group_separator {
            return Err(MoneyError::Config(format!(
                "decimal and group separators must differ, both are '{decimal_separator}'"
            )));
        }
        Ok(Self {
            decimal_separator,
            group_separator,
        })
    }

    /// Builds a normalizer from the `[locale]` configuration section.
    pub fn from_config(config: &LocaleConfig) -> MoneyResult<Self> {
        Self::new(config.decimal_separator, config.group_separator)
    }

    fn check_grouping(&self, raw: &str, text: &str) -> MoneyResult<()> {
        let (integer, fraction) = text
            .split_once(self.decimal_separator)
            .unwrap_or((text, ""));
        if fraction.contains(self.group_separator) {
            return Err(MoneyError::invalid_amount(
                raw,
                "group separator after the decimal separator",
            ));
        }

        let mut groups = integer.split(self.group_separator);
        let leading = groups.next().unwrap_or_default();
        let mut rest = groups.peekable();
        if rest.peek().is_none() {
            return Ok(());
        }

        let leading_ok = leading.chars().last().is_some_and(|ch| ch.is_ascii_digit());
        let groups_ok = rest.all(|group| {
            let digits: Vec<char> = group
                .chars()
                .filter(|ch| *ch != '_' && !ch.is_whitespace())
                .collect();
            digits.len() == 3 && digits.iter().all(char::is_ascii_digit)
        });
        if leading_ok && groups_ok {
            Ok(())
        } else {
            Err(MoneyError::invalid_amount(
                raw,
                "group separator must be followed by exactly three digits",
            ))
        }
    }
}

impl NumberNormalizer for SeparatorNormalizer {
    fn normalize(&self, raw: &str) -> MoneyResult<String> {
        let trimmed = raw.trim();
        let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
        self.check_grouping(raw, unsigned)?;

        let normalized: String = unsigned
            .chars()
            .filter(|ch| *ch != self.group_separator && *ch != '_' && !ch.is_whitespace())
            .map(|ch| if ch == self.decimal_separator { '.' } else { ch })
            .collect();

        if normalized.is_empty() {
            return Err(MoneyError::invalid_amount(raw, "empty amount"));
        }
        Ok(normalized)
    }
}
