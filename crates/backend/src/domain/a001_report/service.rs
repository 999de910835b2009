use super::repository;
use chrono::NaiveDate;
use contracts::domain::a001_report::aggregate::{normalize_keywords, Report, ReportDto};
use uuid::Uuid;

use crate::shared::service_error::{ServiceError, ServiceResult};

/// Создание нового отчёта
pub async fn create(dto: ReportDto) -> ServiceResult<Uuid> {
    let code = dto
        .code
        .clone()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| format!("RPT-{}", &Uuid::new_v4().simple().to_string()[..8]));
    let mut aggregate = Report::new_for_insert(
        code,
        dto.description,
        dto.summary,
        normalize_keywords(&dto.keywords),
        dto.category,
        dto.language,
        dto.publication_date,
        dto.file_url.filter(|u| !u.trim().is_empty()),
    );
    aggregate.base.comment = dto.comment;

    aggregate.validate().map_err(ServiceError::Validation)?;

    aggregate.before_write();

    Ok(repository::insert(&aggregate).await?)
}

/// Обновление существующего отчёта
pub async fn update(dto: ReportDto) -> ServiceResult<()> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or(ServiceError::InvalidId)?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound)?;

    aggregate.update(&dto);

    aggregate.validate().map_err(ServiceError::Validation)?;

    aggregate.before_write();

    Ok(repository::update(&aggregate).await?)
}

/// Мягкое удаление отчёта
pub async fn delete(id: Uuid) -> ServiceResult<()> {
    if repository::soft_delete(id).await? {
        Ok(())
    } else {
        Err(ServiceError::NotFound)
    }
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Report>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Report>> {
    repository::list_all().await
}

fn date(y: i32, m: u32, d: u32) -> anyhow::Result<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| anyhow::anyhow!("invalid date {y}-{m}-{d}"))
}

/// Вставка тестовых данных
pub async fn insert_test_data() -> anyhow::Result<()> {
    let rows = [
        (
            "RPT-2023-001",
            "Rapport annuel 2023 sur la dette publique",
            "Encours, structure et coût de la dette intérieure et extérieure.",
            vec!["dette", "bilan", "encours"],
            "rapport_annuel",
            "fr",
            date(2024, 4, 30)?,
        ),
        (
            "RPT-2024-M03",
            "Bulletin mensuel des finances publiques - mars 2024",
            "Exécution budgétaire et opérations du Trésor à fin mars.",
            vec!["budget", "trésor"],
            "bulletin_mensuel",
            "fr",
            date(2024, 4, 15)?,
        ),
        (
            "RPT-2024-NC1",
            "Note de conjoncture du premier trimestre",
            "Évolution des taux des bons du Trésor (BTA, BTCT) sur le marché primaire.",
            vec!["BTA", "BTCT", "taux"],
            "note_conjoncture",
            "fr",
            date(2024, 5, 20)?,
        ),
        (
            "RPT-2023-STAT",
            "Public debt statistics 2023",
            "Debt stock by instrument, maturity and currency.",
            vec!["statistics", "debt"],
            "statistiques",
            "en",
            date(2024, 2, 12)?,
        ),
    ];

    for (code, title, summary, keywords, category, language, publication_date) in rows {
        create(ReportDto {
            id: None,
            code: Some(code.into()),
            description: title.into(),
            summary: summary.into(),
            keywords: keywords.into_iter().map(String::from).collect(),
            category: category.into(),
            language: language.into(),
            publication_date,
            file_url: Some(format!("/files/{}.pdf", code.to_lowercase())),
            comment: None,
        })
        .await?;
    }

    Ok(())
}
