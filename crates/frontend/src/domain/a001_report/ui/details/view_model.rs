use crate::shared::api_utils::upsert_dto;
use contracts::domain::a001_report::{Report, ReportDto, REPORT_CATEGORIES};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Пустая форма нового отчёта
pub fn empty_dto() -> ReportDto {
    ReportDto {
        id: None,
        code: None,
        description: String::new(),
        summary: String::new(),
        keywords: Vec::new(),
        category: REPORT_CATEGORIES[0].0.to_string(),
        language: "fr".to_string(),
        publication_date: chrono::Utc::now().date_naive(),
        file_url: None,
        comment: None,
    }
}

/// Ключевые слова вводятся через запятую
pub fn parse_keywords(text: &str) -> Vec<String> {
    text.split(',')
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect()
}

/// Та же проверка, что выполняет backend перед записью
pub fn validate_dto(dto: &ReportDto) -> Result<(), String> {
    let mut candidate = Report::new_for_insert(
        "-".to_string(),
        String::new(),
        String::new(),
        Vec::new(),
        String::new(),
        String::new(),
        dto.publication_date,
        None,
    );
    candidate.update(dto);
    candidate.validate()
}

/// ViewModel for Report details form
#[derive(Clone, Copy)]
pub struct ReportDetailsViewModel {
    pub form: RwSignal<ReportDto>,
    pub keywords_text: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl ReportDetailsViewModel {
    pub fn new(initial: ReportDto) -> Self {
        let keywords_text = initial.keywords.join(", ");
        Self {
            form: RwSignal::new(initial),
            keywords_text: RwSignal::new(keywords_text),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    fn current_dto(&self) -> ReportDto {
        let mut dto = self.form.get_untracked();
        dto.keywords = parse_keywords(&self.keywords_text.get_untracked());
        dto
    }

    /// Save form data to server
    pub fn save_command(&self, token: Option<String>, on_saved: Callback<String>) {
        let dto = self.current_dto();
        if let Err(e) = validate_dto(&dto) {
            self.error.set(Some(e));
            return;
        }

        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            match upsert_dto(&Report::api_path(), &dto, token.as_deref()).await {
                Ok(id) => on_saved.run(id),
                Err(e) => error.set(Some(e)),
            }
            saving.set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keywords() {
        assert_eq!(parse_keywords("dette, BTA ,, bilan"), vec!["dette", "BTA", "bilan"]);
        assert!(parse_keywords("  ").is_empty());
    }

    #[test]
    fn test_validate_dto() {
        let mut dto = empty_dto();
        assert!(validate_dto(&dto).is_err());

        dto.description = "Bulletin mensuel de mars".into();
        assert!(validate_dto(&dto).is_ok());

        dto.code = Some("".into());
        assert!(validate_dto(&dto).is_err());

        dto.code = None;
        dto.file_url = Some("ftp://serveur/fichier.pdf".into());
        assert!(validate_dto(&dto).is_err());
    }
}
