//! Справочники кодов, общие для записей портала (код, подпись для UI).

/// Языки публикаций
pub const LANGUAGES: &[(&str, &str)] = &[("fr", "Français"), ("ar", "العربية"), ("en", "English")];

/// Виды государственных ценных бумаг
pub const INSTRUMENT_TYPES: &[(&str, &str)] = &[
    ("BTA", "Bons du Trésor Assimilables"),
    ("BTCT", "Bons du Trésor à Court Terme"),
    ("BTZc", "Bons du Trésor Zéro Coupon"),
    ("OTA", "Obligations du Trésor Assimilables"),
];

/// Подпись для кода справочника; неизвестный код возвращается как есть
pub fn label_for<'a>(reference: &'a [(&'a str, &'a str)], code: &'a str) -> &'a str {
    reference
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
        .unwrap_or(code)
}

/// Код входит в справочник
pub fn is_known(reference: &[(&str, &str)], code: &str) -> bool {
    reference.iter().any(|(c, _)| *c == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_for_known_and_unknown_codes() {
        assert_eq!(label_for(LANGUAGES, "fr"), "Français");
        assert_eq!(label_for(INSTRUMENT_TYPES, "OTA"), "Obligations du Trésor Assimilables");
        assert_eq!(label_for(INSTRUMENT_TYPES, "XYZ"), "XYZ");
        assert!(is_known(INSTRUMENT_TYPES, "BTZc"));
        assert!(!is_known(LANGUAGES, "de"));
    }
}
