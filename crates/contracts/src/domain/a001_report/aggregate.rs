use crate::domain::common::reference::{is_known, LANGUAGES};
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::shared::list_query::{ComparatorKind, ListConfig, Listable, SortValue};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

crate::define_uuid_id!(ReportId, "Уникальный идентификатор отчёта");

/// Категории отчётов дирекции
pub const REPORT_CATEGORIES: &[(&str, &str)] = &[
    ("rapport_annuel", "Rapport annuel"),
    ("bulletin_mensuel", "Bulletin mensuel"),
    ("note_conjoncture", "Note de conjoncture"),
    ("statistiques", "Statistiques de la dette"),
];

// ============================================================================
// Aggregate Root
// ============================================================================

/// Отчёт (rapport), публикуемый дирекцией; управляется из админки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(flatten)]
    pub base: BaseAggregate<ReportId>,

    pub summary: String,
    pub keywords: Vec<String>,
    pub category: String,
    pub language: String,

    #[serde(rename = "publicationDate")]
    pub publication_date: NaiveDate,

    #[serde(rename = "fileUrl")]
    pub file_url: Option<String>,
}

impl Report {
    /// Создать новый отчёт для вставки в БД
    #[allow(clippy::too_many_arguments)]
    pub fn new_for_insert(
        code: String,
        title: String,
        summary: String,
        keywords: Vec<String>,
        category: String,
        language: String,
        publication_date: NaiveDate,
        file_url: Option<String>,
    ) -> Self {
        Self {
            base: BaseAggregate::new(ReportId::new_v4(), code, title),
            summary,
            keywords,
            category,
            language,
            publication_date,
            file_url,
        }
    }

    pub fn title(&self) -> &str {
        &self.base.description
    }

    pub fn year(&self) -> i32 {
        self.publication_date.year()
    }

    /// Получить ID как строку
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &ReportDto) {
        if let Some(code) = &dto.code {
            self.base.code = code.clone();
        }
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.summary = dto.summary.clone();
        self.keywords = normalize_keywords(&dto.keywords);
        self.category = dto.category.clone();
        self.language = dto.language.clone();
        self.publication_date = dto.publication_date;
        self.file_url = dto.file_url.clone().filter(|u| !u.trim().is_empty());
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Le titre ne peut pas être vide".into());
        }
        if self.base.code.trim().is_empty() {
            return Err("La référence ne peut pas être vide".into());
        }
        if !is_known(REPORT_CATEGORIES, &self.category) {
            return Err(format!("Catégorie inconnue : {}", self.category));
        }
        if !is_known(LANGUAGES, &self.language) {
            return Err(format!("Langue inconnue : {}", self.language));
        }
        if let Some(url) = &self.file_url {
            if !(url.starts_with("https://") || url.starts_with("http://") || url.starts_with('/')) {
                return Err("Le lien du fichier doit être une URL absolue ou un chemin".into());
            }
        }
        Ok(())
    }

    /// Хук перед записью
    pub fn before_write(&mut self) {
        self.base.touch();
        self.base.metadata.increment_version();
    }

    /// Конфигурация списка: админка отчётов
    pub fn list_config() -> ListConfig {
        ListConfig::new(10)
            .filter("category", "Catégorie")
            .filter("language", "Langue")
            .filter("year", "Année")
            .sort("publication_date", "Date de publication", ComparatorKind::Date)
            .sort("title", "Titre", ComparatorKind::Text)
    }
}

/// Ключевые слова без пустых и повторов, в исходном порядке
pub fn normalize_keywords(keywords: &[String]) -> Vec<String> {
    let mut result: Vec<String> = Vec::new();
    for kw in keywords.iter().map(|k| k.trim()).filter(|k| !k.is_empty()) {
        if !result.iter().any(|existing| existing.eq_ignore_ascii_case(kw)) {
            result.push(kw.to_string());
        }
    }
    result
}

impl Listable for Report {
    fn record_id(&self) -> String {
        self.to_string_id()
    }

    fn search_texts(&self) -> Vec<&str> {
        vec![self.base.description.as_str(), self.summary.as_str()]
    }

    fn keywords(&self) -> &[String] {
        &self.keywords
    }

    fn filter_value(&self, field: &str) -> Option<String> {
        match field {
            "category" => Some(self.category.clone()),
            "language" => Some(self.language.clone()),
            "year" => Some(self.year().to_string()),
            _ => None,
        }
    }

    fn sort_value(&self, field: &str) -> Option<SortValue> {
        match field {
            "publication_date" => Some(SortValue::Date(self.publication_date)),
            "title" => Some(SortValue::Text(self.base.description.clone())),
            _ => None,
        }
    }
}

impl AggregateRoot for Report {
    type Id = ReportId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "report"
    }

    fn list_name() -> &'static str {
        "Rapports"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления отчёта
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub summary: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub category: String,
    pub language: String,

    #[serde(rename = "publicationDate")]
    pub publication_date: NaiveDate,

    #[serde(rename = "fileUrl")]
    pub file_url: Option<String>,
    pub comment: Option<String>,
}

impl From<&Report> for ReportDto {
    fn from(r: &Report) -> Self {
        Self {
            id: Some(r.to_string_id()),
            code: Some(r.base.code.clone()),
            description: r.base.description.clone(),
            summary: r.summary.clone(),
            keywords: r.keywords.clone(),
            category: r.category.clone(),
            language: r.language.clone(),
            publication_date: r.publication_date,
            file_url: r.file_url.clone(),
            comment: r.base.comment.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Report {
        Report::new_for_insert(
            "RPT-2023-001".into(),
            "Rapport Annuel 2023".into(),
            "Gestion de la dette publique".into(),
            vec!["dette".into(), "bilan".into()],
            "rapport_annuel".into(),
            "fr".into(),
            NaiveDate::from_ymd_opt(2024, 4, 30).unwrap(),
            Some("/files/rapport-2023.pdf".into()),
        )
    }

    #[test]
    fn test_valid_report_passes_validation() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_fields() {
        let mut r = sample();
        r.base.description = "  ".into();
        assert!(r.validate().is_err());

        let mut r = sample();
        r.category = "divers".into();
        assert!(r.validate().unwrap_err().contains("divers"));

        let mut r = sample();
        r.file_url = Some("ftp://x".into());
        assert!(r.validate().is_err());
    }

    #[test]
    fn test_update_from_dto_normalizes_keywords() {
        let mut r = sample();
        let mut dto = ReportDto::from(&r);
        dto.keywords = vec![" Dette ".into(), "dette".into(), "".into(), "BTA".into()];
        dto.file_url = Some("".into());
        r.update(&dto);
        assert_eq!(r.keywords, vec!["Dette", "BTA"]);
        assert_eq!(r.file_url, None);
    }

    #[test]
    fn test_listable_fields() {
        let r = sample();
        assert_eq!(r.filter_value("year").as_deref(), Some("2024"));
        assert_eq!(r.filter_value("category").as_deref(), Some("rapport_annuel"));
        assert_eq!(r.filter_value("status"), None);
        assert_eq!(Report::full_name(), "a001_report");
        assert_eq!(Report::list_config().page_size, 10);
    }

    #[test]
    fn test_json_uses_camel_case_and_flattened_base() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["description"], "Rapport Annuel 2023");
        assert_eq!(json["publicationDate"], "2024-04-30");
        assert_eq!(json["fileUrl"], "/files/rapport-2023.pdf");
        assert!(json.get("base").is_none());
    }
}
