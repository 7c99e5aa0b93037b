//! Phone number normalization for WhatsApp delivery.
//!
//! The transport expects E.164-style `+<digits>` recipients. Stored numbers
//! arrive in whatever shape they were typed: spaces, dashes, parentheses,
//! `00` international prefixes, or bare national numbers.

/// Normalize a raw phone number to `+<digits>`.
///
/// - A leading `+` wins: everything else is stripped to digits.
/// - A `00` international prefix is replaced with `+`.
/// - Bare national numbers get `default_country_code` prepended (leading
///   zeros dropped); without a default they are kept as-is behind `+`.
///
/// Returns `None` when the input contains no digits at all.
pub fn normalize_phone(raw: &str, default_country_code: Option<&str>) -> Option<String> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }

    if raw.trim_start().starts_with('+') {
        return Some(format!("+{digits}"));
    }

    if let Some(rest) = digits.strip_prefix("00") {
        if !rest.is_empty() {
            return Some(format!("+{rest}"));
        }
    }

    match default_country_code {
        Some(code) => {
            let code_digits: String = code.chars().filter(char::is_ascii_digit).collect();
            let national = digits.trim_start_matches('0');
            if code_digits.is_empty() || national.is_empty() {
                Some(format!("+{digits}"))
            } else {
                Some(format!("+{code_digits}{national}"))
            }
        }
        None => Some(format!("+{digits}")),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plus_prefixed_numbers_are_kept() {
        assert_eq!(
            normalize_phone("+44 7700 900123", None),
            Some("+447700900123".to_string())
        );
        assert_eq!(
            normalize_phone("+1 (212) 555-0147", Some("44")),
            Some("+12125550147".to_string())
        );
    }

    #[test]
    fn double_zero_prefix_becomes_plus() {
        assert_eq!(
            normalize_phone("0044 7700 900123", None),
            Some("+447700900123".to_string())
        );
    }

    #[test]
    fn national_number_gets_default_country_code() {
        assert_eq!(
            normalize_phone("07700 900123", Some("44")),
            Some("+447700900123".to_string())
        );
        assert_eq!(
            normalize_phone("7700900123", Some("+44")),
            Some("+447700900123".to_string())
        );
    }

    #[test]
    fn national_number_without_default_is_kept() {
        assert_eq!(
            normalize_phone("212 555 0147", None),
            Some("+2125550147".to_string())
        );
    }

    #[test]
    fn no_digits_yields_none() {
        assert_eq!(normalize_phone("", None), None);
        assert_eq!(normalize_phone("n/a", Some("44")), None);
        assert_eq!(normalize_phone("+", None), None);
    }

    #[test]
    fn separators_are_stripped() {
        assert_eq!(
            normalize_phone("(0)7700-900.123", Some("44")),
            Some("+447700900123".to_string())
        );
    }
}
