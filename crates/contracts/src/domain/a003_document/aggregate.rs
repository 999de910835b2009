use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::shared::list_query::{ComparatorKind, ListConfig, Listable, SortValue};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

crate::define_uuid_id!(DocumentId, "Уникальный идентификатор документа");

/// Типы документации по государственным ценным бумагам
pub const DOCUMENT_TYPES: &[(&str, &str)] = &[
    ("prospectus", "Prospectus"),
    ("guide", "Guide de l'investisseur"),
    ("circulaire", "Circulaire"),
    ("calendrier", "Calendrier des émissions"),
];

/// Документ раздела "Titres publics / Documentation" (только чтение на сайте)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(flatten)]
    pub base: BaseAggregate<DocumentId>,

    pub summary: String,
    pub keywords: Vec<String>,

    #[serde(rename = "docType")]
    pub doc_type: String,

    pub language: String,

    #[serde(rename = "publicationDate")]
    pub publication_date: NaiveDate,

    #[serde(rename = "fileUrl")]
    pub file_url: Option<String>,
}

impl Document {
    #[allow(clippy::too_many_arguments)]
    pub fn new_for_insert(
        code: String,
        title: String,
        summary: String,
        keywords: Vec<String>,
        doc_type: String,
        language: String,
        publication_date: NaiveDate,
        file_url: Option<String>,
    ) -> Self {
        Self {
            base: BaseAggregate::new(DocumentId::new_v4(), code, title),
            summary,
            keywords,
            doc_type,
            language,
            publication_date,
            file_url,
        }
    }

    pub fn title(&self) -> &str {
        &self.base.description
    }

    /// Карточки документации выводятся сеткой по 12
    pub fn list_config() -> ListConfig {
        ListConfig::new(12)
            .filter("doc_type", "Type de document")
            .filter("language", "Langue")
            .filter("year", "Année")
            .sort("publication_date", "Date de publication", ComparatorKind::Date)
            .sort("title", "Titre", ComparatorKind::Text)
    }
}

impl Listable for Document {
    fn record_id(&self) -> String {
        self.base.id.as_string()
    }

    fn search_texts(&self) -> Vec<&str> {
        vec![self.base.description.as_str(), self.summary.as_str()]
    }

    fn keywords(&self) -> &[String] {
        &self.keywords
    }

    fn filter_value(&self, field: &str) -> Option<String> {
        match field {
            "doc_type" => Some(self.doc_type.clone()),
            "language" => Some(self.language.clone()),
            "year" => Some(self.publication_date.year().to_string()),
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

impl AggregateRoot for Document {
    type Id = DocumentId;

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
        "a003"
    }

    fn collection_name() -> &'static str {
        "document"
    }

    fn list_name() -> &'static str {
        "Documentation"
    }
}
