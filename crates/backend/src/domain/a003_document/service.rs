use super::repository;
use chrono::NaiveDate;
use contracts::domain::a003_document::aggregate::Document;
use uuid::Uuid;

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Document>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Document>> {
    repository::list_all().await
}

/// Вставка тестовых данных
pub async fn insert_test_data() -> anyhow::Result<()> {
    let rows = [
        ("DOC-001", "Guide de l'investisseur en bons du Trésor", "Fonctionnement des adjudications et modalités de souscription.", vec!["BTA", "BTCT", "souscription"], "guide", "fr", (2023, 9, 1)),
        ("DOC-002", "Prospectus d'émission BTA 7,5% 2031", "Caractéristiques de la ligne, calendrier et conditions.", vec!["BTA", "prospectus"], "prospectus", "fr", (2024, 1, 15)),
        ("DOC-003", "Circulaire relative aux spécialistes en valeurs du Trésor", "Obligations et droits des SVT sur le marché primaire.", vec!["SVT", "marché primaire"], "circulaire", "fr", (2022, 11, 3)),
        ("DOC-004", "Calendrier indicatif des émissions 2024", "Dates prévisionnelles des adjudications de l'année.", vec!["calendrier"], "calendrier", "fr", (2023, 12, 20)),
        ("DOC-005", "Investor guide to Treasury securities", "How to take part in Treasury auctions.", vec!["guide", "auctions"], "guide", "en", (2024, 2, 10)),
        ("DOC-006", "دليل المستثمر في رقاع الخزينة", "شروط الاكتتاب في رقاع الخزينة.", vec!["رقاع"], "guide", "ar", (2024, 3, 5)),
    ];

    for (code, title, summary, keywords, doc_type, language, (y, m, d)) in rows {
        let publication_date = NaiveDate::from_ymd_opt(y, m, d)
            .ok_or_else(|| anyhow::anyhow!("invalid date {y}-{m}-{d}"))?;
        let mut document = Document::new_for_insert(
            code.into(),
            title.into(),
            summary.into(),
            keywords.into_iter().map(String::from).collect(),
            doc_type.into(),
            language.into(),
            publication_date,
            Some(format!("/files/{}.pdf", code.to_lowercase())),
        );
        document.base.touch();
        repository::insert(&document).await?;
    }

    Ok(())
}
