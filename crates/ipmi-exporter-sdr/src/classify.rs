//! Value-field classification.
//!
//! The fifth SDR column pairs a numeric token with a unit keyword, e.g.
//! "12.240 Volts" or "4560 RPM". Classification maps the keyword to a
//! [`Quantity`] and parses the leading token as the magnitude.

use crate::reading::Quantity;

/// Unit keywords in match priority order.
const UNIT_KEYWORDS: [(&str, Quantity); 5] = [
    ("Volts", Quantity::Voltage),
    ("degrees C", Quantity::Temperature),
    ("RPM", Quantity::Fan),
    ("Watts", Quantity::Power),
    ("Amps", Quantity::Current),
];

/// Classifies a trimmed value-field text into a magnitude and quantity.
///
/// Tests the text for each unit keyword in fixed priority order; on a match,
/// the first whitespace-separated token must parse as a float. Returns `None`
/// if no keyword is present or no leading numeric token parses. A `None`
/// here means "drop the line", never a legitimate zero reading.
pub fn classify_value(value_text: &str) -> Option<(f64, Quantity)> {
    let value_text = value_text.trim();

    for (keyword, quantity) in UNIT_KEYWORDS {
        if !value_text.contains(keyword) {
            continue;
        }
        let token = value_text.split_whitespace().next()?;
        if let Ok(value) = token.parse::<f64>() {
            return Some((value, quantity));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voltage() {
        assert_eq!(
            classify_value("12.240 Volts"),
            Some((12.24, Quantity::Voltage))
        );
    }

    #[test]
    fn test_temperature() {
        assert_eq!(
            classify_value("45 degrees C"),
            Some((45.0, Quantity::Temperature))
        );
    }

    #[test]
    fn test_fan() {
        assert_eq!(classify_value("850 RPM"), Some((850.0, Quantity::Fan)));
    }

    #[test]
    fn test_power() {
        assert_eq!(classify_value("120 Watts"), Some((120.0, Quantity::Power)));
    }

    #[test]
    fn test_current() {
        assert_eq!(classify_value("1.20 Amps"), Some((1.2, Quantity::Current)));
    }

    #[test]
    fn test_unclassifiable() {
        assert_eq!(classify_value("N/A"), None);
        assert_eq!(classify_value(""), None);
        assert_eq!(classify_value("0x1 Discrete"), None);
    }

    #[test]
    fn test_unparseable_token() {
        assert_eq!(classify_value("abc Volts"), None);
        assert_eq!(classify_value("Volts"), None);
    }

    #[test]
    fn test_keyword_priority() {
        // "Volts" is tested before "Watts" when both appear.
        assert_eq!(
            classify_value("3.3 Volts Watts"),
            Some((3.3, Quantity::Voltage))
        );
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert_eq!(
            classify_value("  45 degrees C  "),
            Some((45.0, Quantity::Temperature))
        );
    }
}
