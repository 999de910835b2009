use super::repository;
use chrono::NaiveDate;
use contracts::domain::a005_auction_result::aggregate::AuctionResult;
use uuid::Uuid;

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<AuctionResult>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<AuctionResult>> {
    repository::list_all().await
}

/// Вставка тестовых данных
pub async fn insert_test_data() -> anyhow::Result<()> {
    // (код, заголовок, тип, дата, заявки, размещено, TMP, min, max)
    let rows = [
        ("RES-2024-009", "Résultat BTCT 26 semaines", "BTCT", (2024, 3, 5), 310.0, 150.0, 7.95, 7.80, 8.10),
        ("RES-2024-012", "Résultat BTA 6,3% mars 2030", "BTA", (2024, 4, 9), 260.4, 120.0, 8.35, 8.20, 8.50),
        ("RES-2023-041", "Résultat BTCT 52 semaines", "BTCT", (2023, 11, 14), 198.0, 198.0, 8.02, 7.90, 8.15),
        ("RES-2023-037", "Résultat BTZc 5 ans", "BTZc", (2023, 10, 3), 95.0, 60.0, 8.70, 8.55, 8.90),
    ];

    for (code, title, instrument_type, (y, m, d), requested, allotted, avg, min, max) in rows {
        let auction_date = NaiveDate::from_ymd_opt(y, m, d)
            .ok_or_else(|| anyhow::anyhow!("invalid date {y}-{m}-{d}"))?;
        let mut result = AuctionResult::new_for_insert(
            code.into(),
            title.into(),
            instrument_type.into(),
            auction_date,
            requested,
            allotted,
            avg,
            min,
            max,
            String::new(),
        );
        if let Some(ratio) = result.cover_ratio() {
            result.details = format!("Taux de couverture : {:.2}", ratio);
        }
        result.base.touch();
        repository::insert(&result).await?;
    }

    Ok(())
}
