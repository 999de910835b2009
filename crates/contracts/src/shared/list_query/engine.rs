use super::collation::compare_text;
use super::config::{ComparatorKind, ListConfig, SortKey};
use super::state::{is_unconstrained, ListViewState, SortDirection};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Запись, которую можно показывать в фильтруемом списке
pub trait Listable {
    /// Непрозрачный уникальный идентификатор
    fn record_id(&self) -> String;

    /// Текстовые поля, по которым идёт поиск (заголовок, описание...)
    fn search_texts(&self) -> Vec<&str>;

    /// Ключевые слова: поиск по вхождению подстроки в любое из них
    fn keywords(&self) -> &[String] {
        &[]
    }

    /// Значение измерения фильтра; `None` если у записи нет такого поля
    fn filter_value(&self, field: &str) -> Option<String>;

    /// Значение ключа сортировки; `None` если у записи нет такого поля
    fn sort_value(&self, field: &str) -> Option<SortValue>;
}

/// Скалярное значение ключа сортировки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SortValue {
    Text(String),
    Date(NaiveDate),
    Number(f64),
}

impl SortValue {
    /// Сравнение двух значений выбранным компаратором.
    /// Значения другого типа считаются равными.
    fn compare(&self, other: &SortValue, comparator: ComparatorKind) -> Ordering {
        match (comparator, self, other) {
            (ComparatorKind::Text, SortValue::Text(a), SortValue::Text(b)) => compare_text(a, b),
            (ComparatorKind::Date, SortValue::Date(a), SortValue::Date(b)) => a.cmp(b),
            (ComparatorKind::Number, SortValue::Number(a), SortValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            _ => Ordering::Equal,
        }
    }
}

/// Видимая страница списка и метаданные пагинации
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub total_matching: usize,
    pub total_pages: usize,
    /// Фактический номер страницы (после ограничения диапазоном)
    pub page: usize,
    pub page_size: usize,
}

impl<T> ListPage<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Номер первой записи страницы (с 1), 0 для пустого результата
    pub fn first_position(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.page - 1) * self.page_size + 1
        }
    }

    /// Номер последней записи страницы (с 1), 0 для пустого результата
    pub fn last_position(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.page - 1) * self.page_size + self.items.len()
        }
    }
}

/// `max(1, ceil(total_matching / page_size))`
///
/// # Panics
/// Если `page_size == 0`: ни одна страница портала такого размера не задаёт.
pub fn total_pages(total_matching: usize, page_size: usize) -> usize {
    assert!(page_size > 0, "page_size must be positive");
    total_matching.div_ceil(page_size).max(1)
}

fn matches_search<T: Listable>(record: &T, term_lower: &str) -> bool {
    if term_lower.is_empty() {
        return true;
    }
    record
        .search_texts()
        .iter()
        .any(|text| text.to_lowercase().contains(term_lower))
        || record
            .keywords()
            .iter()
            .any(|kw| kw.to_lowercase().contains(term_lower))
}

fn matches_filters<T: Listable>(record: &T, filters: &BTreeMap<String, String>) -> bool {
    filters
        .iter()
        .filter(|(_, wanted)| !is_unconstrained(wanted))
        .all(|(field, wanted)| {
            record
                .filter_value(field)
                .is_some_and(|actual| actual == wanted.trim())
        })
}

fn compare_records<T: Listable>(a: &T, b: &T, key: &SortKey, direction: SortDirection) -> Ordering {
    let ordering = match (a.sort_value(key.field), b.sort_value(key.field)) {
        (Some(x), Some(y)) => x.compare(&y, key.comparator),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    if direction.is_ascending() {
        ordering
    } else {
        ordering.reverse()
    }
}

/// Вычислить видимую страницу списка.
///
/// Порядок шагов фиксирован: поиск, фильтры, стабильная сортировка, подсчёт,
/// ограничение номера страницы диапазоном `[1, total_pages]`, срез.
/// Ошибок нет: пустой вход, отсутствие совпадений и номер страницы вне
/// диапазона дают пустую (или последнюю) страницу с корректными счётчиками.
///
/// # Panics
/// Если `config.page_size == 0`.
pub fn apply_list_query<T: Listable + Clone>(
    records: &[T],
    config: &ListConfig,
    state: &ListViewState,
) -> ListPage<T> {
    let page_size = config.page_size;
    // Только пустая строка снимает ограничение; пробелы ищутся как есть
    let term = state.search.to_lowercase();

    let mut matching: Vec<&T> = records
        .iter()
        .filter(|r| matches_search(*r, &term))
        .filter(|r| matches_filters(*r, &state.filters))
        .collect();

    let sort_field = if state.sort_field.is_empty() {
        config.default_sort_field
    } else {
        state.sort_field.as_str()
    };
    // Неизвестный ключ сортировки: порядок источника сохраняется
    if let Some(key) = config.sort_key(sort_field) {
        // sort_by стабильна: равные записи сохраняют исходный порядок
        matching.sort_by(|a, b| compare_records(*a, *b, key, state.sort_direction));
    }

    let total_matching = matching.len();
    let total_pages = total_pages(total_matching, page_size);
    let page = state.page.clamp(1, total_pages);

    let items = matching
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .cloned()
        .collect();

    ListPage {
        items,
        total_matching,
        total_pages,
        page,
        page_size,
    }
}

/// Различные значения измерения фильтра (для опций выпадающего списка)
pub fn distinct_filter_values<T: Listable>(records: &[T], field: &str) -> Vec<String> {
    let mut values: Vec<String> = records
        .iter()
        .filter_map(|r| r.filter_value(field))
        .filter(|v| !v.trim().is_empty())
        .collect();
    values.sort_by(|a, b| compare_text(a, b).then_with(|| a.cmp(b)));
    values.dedup();
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Paper {
        id: String,
        title: String,
        summary: String,
        keywords: Vec<String>,
        kind: String,
        year: i32,
        published: NaiveDate,
        amount: f64,
    }

    fn paper(id: &str, title: &str, kind: &str, published: (i32, u32, u32)) -> Paper {
        Paper {
            id: id.to_string(),
            title: title.to_string(),
            summary: String::new(),
            keywords: Vec::new(),
            kind: kind.to_string(),
            year: published.0,
            published: NaiveDate::from_ymd_opt(published.0, published.1, published.2).unwrap(),
            amount: 0.0,
        }
    }

    impl Listable for Paper {
        fn record_id(&self) -> String {
            self.id.clone()
        }

        fn search_texts(&self) -> Vec<&str> {
            vec![self.title.as_str(), self.summary.as_str()]
        }

        fn keywords(&self) -> &[String] {
            &self.keywords
        }

        fn filter_value(&self, field: &str) -> Option<String> {
            match field {
                "type" => Some(self.kind.clone()),
                "year" => Some(self.year.to_string()),
                _ => None,
            }
        }

        fn sort_value(&self, field: &str) -> Option<SortValue> {
            match field {
                "published" => Some(SortValue::Date(self.published)),
                "title" => Some(SortValue::Text(self.title.clone())),
                "amount" if self.amount != 0.0 => Some(SortValue::Number(self.amount)),
                _ => None,
            }
        }
    }

    fn config(page_size: usize) -> ListConfig {
        ListConfig::new(page_size)
            .filter("type", "Type")
            .filter("year", "Année")
            .sort("published", "Date", ComparatorKind::Date)
            .sort("title", "Titre", ComparatorKind::Text)
            .sort("amount", "Montant", ComparatorKind::Number)
    }

    fn ids<T: Listable>(items: &[T]) -> Vec<String> {
        items.iter().map(Listable::record_id).collect()
    }

    /// 25 записей с датами по возрастанию: p00 самая старая
    fn twenty_five() -> Vec<Paper> {
        (0..25)
            .map(|i| paper(&format!("p{:02}", i), &format!("Note {}", i), "BTA", (2020, 1, 1 + i)))
            .collect()
    }

    #[test]
    fn test_empty_records_give_single_empty_page() {
        let records: Vec<Paper> = Vec::new();
        let cfg = config(10);
        let page = apply_list_query(&records, &cfg, &cfg.initial_state());
        assert!(page.items.is_empty());
        assert_eq!(page.total_matching, 0);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 1);
        assert_eq!(page.first_position(), 0);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let records = vec![
            paper("1", "Prospectus BT 12 mois", "BTA", (2024, 1, 5)),
            paper("2", "Rapport Annuel 2023", "OTA", (2024, 2, 5)),
        ];
        let cfg = config(10);
        for term in ["bt", "BT", "Bt"] {
            let mut state = cfg.initial_state();
            state.set_search(term);
            let page = apply_list_query(&records, &cfg, &state);
            assert_eq!(ids(&page.items), vec!["1"]);
            assert_eq!(page.total_matching, 1);
        }
    }

    #[test]
    fn test_whitespace_in_search_term_is_significant() {
        let records = vec![
            paper("1", "Prospectus BT 12 mois", "BTA", (2024, 1, 5)),
            paper("2", "Rapport", "OTA", (2024, 2, 5)),
        ];
        let cfg = config(10);

        let mut state = cfg.initial_state();
        state.set_search(" ");
        let page = apply_list_query(&records, &cfg, &state);
        assert_eq!(ids(&page.items), vec!["1"]);
        assert_eq!(page.total_matching, 1);

        state.set_search("bt ");
        let page = apply_list_query(&records, &cfg, &state);
        assert_eq!(ids(&page.items), vec!["1"]);

        state.set_search("rapport ");
        let page = apply_list_query(&records, &cfg, &state);
        assert_eq!(page.total_matching, 0);
    }

    #[test]
    fn test_search_matches_substring_of_any_keyword() {
        let mut tagged = paper("1", "Circulaire", "BTA", (2024, 1, 5));
        tagged.keywords = vec!["marché primaire".into(), "spécialistes".into()];
        let mut described = paper("2", "Guide", "BTA", (2024, 1, 6));
        described.summary = "Guide de l'investisseur".into();
        let records = vec![tagged, described, paper("3", "Autre", "BTA", (2024, 1, 7))];
        let cfg = config(10);

        let mut state = cfg.initial_state();
        state.set_search("PRIMAIRE");
        assert_eq!(ids(&apply_list_query(&records, &cfg, &state).items), vec!["1"]);

        state.set_search("investisseur");
        assert_eq!(ids(&apply_list_query(&records, &cfg, &state).items), vec!["2"]);
    }

    #[test]
    fn test_equality_filter_keeps_relative_order() {
        let records = vec![
            paper("a", "Titre A", "BTA", (2024, 1, 1)),
            paper("b", "Titre B", "OTA", (2024, 1, 1)),
            paper("c", "Titre C", "OTA", (2024, 1, 1)),
        ];
        let cfg = config(10);
        let mut state = cfg.initial_state();
        state.set_filter("type", "OTA");
        let page = apply_list_query(&records, &cfg, &state);
        assert_eq!(ids(&page.items), vec!["b", "c"]);
        assert_eq!(page.total_matching, 2);
    }

    #[test]
    fn test_filter_is_strict_equality_not_substring() {
        let records = vec![
            paper("a", "x", "BTA", (2024, 1, 1)),
            paper("b", "y", "BTA-CT", (2024, 1, 1)),
        ];
        let cfg = config(10);
        let mut state = cfg.initial_state();
        state.set_filter("type", "BTA");
        assert_eq!(ids(&apply_list_query(&records, &cfg, &state).items), vec!["a"]);
    }

    #[test]
    fn test_unknown_filter_key_matches_nothing() {
        let records = vec![paper("a", "x", "BTA", (2024, 1, 1))];
        let cfg = config(10);
        let mut state = cfg.initial_state();
        state.filters.insert("currency".into(), "TND".into());
        let page = apply_list_query(&records, &cfg, &state);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_all_sentinel_in_raw_filters_is_ignored() {
        let records = vec![
            paper("a", "x", "BTA", (2024, 1, 1)),
            paper("b", "y", "OTA", (2023, 1, 1)),
        ];
        let cfg = config(10);
        let mut state = cfg.initial_state();
        state.filters.insert("type".into(), "all".into());
        state.filters.insert("year".into(), "".into());
        assert_eq!(apply_list_query(&records, &cfg, &state).total_matching, 2);
    }

    #[test]
    fn test_search_and_filters_combine() {
        let records = vec![
            paper("a", "Adjudication BTA", "BTA", (2024, 1, 1)),
            paper("b", "Adjudication OTA", "OTA", (2024, 1, 2)),
            paper("c", "Adjudication BTA", "BTA", (2023, 1, 3)),
        ];
        let cfg = config(10);
        let mut state = cfg.initial_state();
        state.set_search("adjudication");
        state.set_filter("type", "BTA");
        state.set_filter("year", "2024");
        assert_eq!(ids(&apply_list_query(&records, &cfg, &state).items), vec!["a"]);
    }

    #[test]
    fn test_default_sort_is_date_descending() {
        let records = twenty_five();
        let cfg = config(10);
        let page = apply_list_query(&records, &cfg, &cfg.initial_state());
        assert_eq!(page.items[0].id, "p24");
        assert_eq!(page.items[9].id, "p15");
    }

    #[test]
    fn test_text_sort_ignores_case_and_accents() {
        let records = vec![
            paper("1", "zéro coupon", "BTA", (2024, 1, 1)),
            paper("2", "Émission", "BTA", (2024, 1, 1)),
            paper("3", "adjudication", "BTA", (2024, 1, 1)),
            paper("4", "Fiscalité", "BTA", (2024, 1, 1)),
        ];
        let cfg = config(10);
        let mut state = cfg.initial_state();
        state.toggle_sort("title", ComparatorKind::Text);
        assert_eq!(
            ids(&apply_list_query(&records, &cfg, &state).items),
            vec!["3", "2", "4", "1"]
        );
    }

    #[test]
    fn test_numeric_sort_with_missing_values_last_when_ascending() {
        let mut records = vec![
            paper("a", "a", "BTA", (2024, 1, 1)),
            paper("b", "b", "BTA", (2024, 1, 1)),
            paper("c", "c", "BTA", (2024, 1, 1)),
            paper("d", "d", "BTA", (2024, 1, 1)),
        ];
        records[0].amount = 150.5;
        records[1].amount = 20.0;
        records[3].amount = 1000.0;
        let cfg = config(10);
        let mut state = cfg.initial_state();
        state.toggle_sort("amount", ComparatorKind::Number);
        assert_eq!(
            ids(&apply_list_query(&records, &cfg, &state).items),
            vec!["b", "a", "d", "c"]
        );
    }

    #[test]
    fn test_unknown_sort_key_keeps_source_order() {
        let records = vec![
            paper("2", "b", "BTA", (2024, 3, 1)),
            paper("1", "a", "BTA", (2024, 1, 1)),
            paper("3", "c", "BTA", (2024, 2, 1)),
        ];
        let cfg = config(10);
        let mut state = cfg.initial_state();
        state.sort_field = "rating".into();
        assert_eq!(
            ids(&apply_list_query(&records, &cfg, &state).items),
            vec!["2", "1", "3"]
        );
    }

    #[test]
    fn test_stable_sort_under_ties_both_directions() {
        let records = vec![
            paper("first", "x", "BTA", (2024, 6, 1)),
            paper("older", "x", "BTA", (2024, 1, 1)),
            paper("second", "x", "BTA", (2024, 6, 1)),
            paper("third", "x", "BTA", (2024, 6, 1)),
        ];
        let cfg = config(10);

        let mut state = cfg.initial_state();
        let desc = apply_list_query(&records, &cfg, &state);
        assert_eq!(ids(&desc.items), vec!["first", "second", "third", "older"]);

        state.toggle_sort("published", ComparatorKind::Date);
        assert_eq!(state.sort_direction, SortDirection::Asc);
        let asc = apply_list_query(&records, &cfg, &state);
        assert_eq!(ids(&asc.items), vec!["older", "first", "second", "third"]);
    }

    #[test]
    fn test_pagination_slices_twenty_five_records() {
        let records = twenty_five();
        let cfg = config(10);
        let mut state = cfg.initial_state();
        state.toggle_sort("published", ComparatorKind::Date); // по возрастанию: p00..p24

        let expected: Vec<String> = (0..25).map(|i| format!("p{:02}", i)).collect();
        let sizes = [(1, 10, 0), (2, 10, 10), (3, 5, 20)];
        for (page_no, len, offset) in sizes {
            state.set_page(page_no);
            let page = apply_list_query(&records, &cfg, &state);
            assert_eq!(page.total_pages, 3);
            assert_eq!(page.total_matching, 25);
            assert_eq!(page.items.len(), len);
            assert_eq!(ids(&page.items), expected[offset..offset + len].to_vec());
        }
    }

    #[test]
    fn test_pages_cover_filtered_sorted_set_exactly_once() {
        let mut records = twenty_five();
        records.extend((0..7).map(|i| paper(&format!("o{}", i), "Other", "OTA", (2021, 2, 1 + i))));
        let cfg = config(4);
        let mut state = cfg.initial_state();
        state.set_filter("type", "BTA");

        let everything = apply_list_query(&records, &config(1000), &state);
        let first = apply_list_query(&records, &cfg, &state);

        let mut collected = Vec::new();
        for page_no in 1..=first.total_pages {
            state.set_page(page_no);
            collected.extend(apply_list_query(&records, &cfg, &state).items);
        }
        assert_eq!(first.total_pages, 7);
        assert_eq!(collected, everything.items);
        assert_eq!(collected.len(), 25);
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let records = twenty_five();
        let cfg = config(10);
        let mut state = cfg.initial_state();
        state.set_page(9);
        let page = apply_list_query(&records, &cfg, &state);
        assert_eq!(page.page, 3);
        assert_eq!(page.items.len(), 5);

        state.page = 0;
        assert_eq!(apply_list_query(&records, &cfg, &state).page, 1);
    }

    #[test]
    fn test_total_pages_bounds() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(24, 12), 2);
        assert_eq!(total_pages(25, 12), 3);
        for n in 0..100 {
            let expected = std::cmp::max(1, (n + 9) / 10);
            assert_eq!(total_pages(n, 10), expected);
        }
    }

    #[test]
    #[should_panic(expected = "page_size must be positive")]
    fn test_zero_page_size_fails_fast() {
        let records = twenty_five();
        let cfg = config(0);
        let _ = apply_list_query(&records, &cfg, &cfg.initial_state());
    }

    #[test]
    fn test_same_inputs_give_identical_output() {
        let records = twenty_five();
        let cfg = config(10);
        let mut state = cfg.initial_state();
        state.set_search("note 1");
        state.set_filter("year", "2020");
        let first = apply_list_query(&records, &cfg, &state);
        let second = apply_list_query(&records, &cfg, &state);
        assert_eq!(first, second);
    }

    #[test]
    fn test_forgetting_page_reset_breaks_page_label() {
        let records = twenty_five();
        let cfg = config(10);

        // Вызывающий код, который забыл сбросить страницу при смене поиска
        let mut careless = cfg.initial_state();
        careless.set_page(3);
        careless.search = "note 2".into();
        let shown = apply_list_query(&records, &cfg, &careless);
        let label = format!("{} / {}", careless.page, shown.total_pages);
        assert_ne!(label, format!("{} / {}", shown.page, shown.total_pages));

        // Корректный путь через set_search
        let mut careful = cfg.initial_state();
        careful.set_page(3);
        careful.set_search("note 2");
        let shown = apply_list_query(&records, &cfg, &careful);
        assert_eq!(careful.page, shown.page);
        assert_eq!(shown.first_position(), 1);
    }

    #[test]
    fn test_page_positions() {
        let records = twenty_five();
        let cfg = config(10);
        let mut state = cfg.initial_state();
        state.set_page(3);
        let page = apply_list_query(&records, &cfg, &state);
        assert_eq!((page.first_position(), page.last_position()), (21, 25));
        assert!(page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn test_distinct_filter_values_sorted_and_unique() {
        let records = vec![
            paper("1", "a", "OTA", (2024, 1, 1)),
            paper("2", "b", "BTA", (2023, 1, 1)),
            paper("3", "c", "OTA", (2024, 1, 1)),
            paper("4", "d", "", (2022, 1, 1)),
        ];
        assert_eq!(distinct_filter_values(&records, "type"), vec!["BTA", "OTA"]);
        assert_eq!(
            distinct_filter_values(&records, "year"),
            vec!["2022", "2023", "2024"]
        );
        assert!(distinct_filter_values(&records, "unknown").is_empty());
    }
}
