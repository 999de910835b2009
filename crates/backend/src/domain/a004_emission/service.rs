use super::repository;
use chrono::NaiveDate;
use contracts::domain::a004_emission::aggregate::Emission;
use uuid::Uuid;

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Emission>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Emission>> {
    repository::list_all().await
}

fn date((y, m, d): (i32, u32, u32)) -> anyhow::Result<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| anyhow::anyhow!("invalid date {y}-{m}-{d}"))
}

/// Вставка тестовых данных
pub async fn insert_test_data() -> anyhow::Result<()> {
    let rows = [
        ("EM-BTA-2031", "BTA 7,5% avril 2031", "BTA", (2024, 4, 9), (2031, 4, 9), 850.0, 7.5),
        ("EM-BTA-2030", "BTA 6,3% mars 2030", "BTA", (2023, 3, 14), (2030, 3, 14), 1240.5, 6.3),
        ("EM-BTCT-52S", "BTCT 52 semaines", "BTCT", (2024, 5, 7), (2025, 5, 6), 320.0, 8.12),
        ("EM-BTZC-2029", "BTZc novembre 2029", "BTZc", (2022, 11, 22), (2029, 11, 22), 410.0, 0.0),
        ("EM-OTA-2034", "OTA 8% 2034", "OTA", (2024, 6, 11), (2034, 6, 11), 600.0, 8.0),
    ];

    for (code, title, instrument_type, issue, maturity, amount, rate) in rows {
        let mut emission = Emission::new_for_insert(
            code.into(),
            title.into(),
            instrument_type.into(),
            date(issue)?,
            date(maturity)?,
            amount,
            rate,
            format!("Ligne {} ouverte aux SVT", code),
        );
        emission.base.touch();
        repository::insert(&emission).await?;
    }

    Ok(())
}
