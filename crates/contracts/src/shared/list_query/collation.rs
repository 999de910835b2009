//! Сравнение строк для сортировки списков (без учёта регистра и диакритики).

use std::cmp::Ordering;

/// Ключ сравнения: нижний регистр, французская диакритика снята, лигатуры раскрыты.
pub fn collation_key(text: &str) -> String {
    let mut key = String::with_capacity(text.len());
    for ch in text.trim().chars().flat_map(char::to_lowercase) {
        match ch {
            'à' | 'â' | 'ä' | 'á' | 'ã' => key.push('a'),
            'ç' => key.push('c'),
            'é' | 'è' | 'ê' | 'ë' => key.push('e'),
            'î' | 'ï' | 'í' | 'ì' => key.push('i'),
            'ô' | 'ö' | 'ó' | 'ò' => key.push('o'),
            'ù' | 'û' | 'ü' | 'ú' => key.push('u'),
            'ÿ' => key.push('y'),
            'œ' => key.push_str("oe"),
            'æ' => key.push_str("ae"),
            other => key.push(other),
        }
    }
    key
}

/// Лексикографическое сравнение по ключу [`collation_key`]
pub fn compare_text(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collation_key_folds_case_and_accents() {
        assert_eq!(collation_key("Émission"), "emission");
        assert_eq!(collation_key("  Bon du Trésor "), "bon du tresor");
        assert_eq!(collation_key("Œuvre"), "oeuvre");
    }

    #[test]
    fn test_accented_words_sort_with_their_base_letter() {
        assert_eq!(compare_text("étude", "Fiscalité"), Ordering::Less);
        assert_eq!(compare_text("Zone", "élan"), Ordering::Greater);
        assert_eq!(compare_text("Échéance", "echeance"), Ordering::Equal);
    }
}
