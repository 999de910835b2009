use super::repository;
use chrono::NaiveDate;
use contracts::domain::a002_auction::aggregate::{Auction, AuctionDto};
use uuid::Uuid;

use crate::shared::service_error::{ServiceError, ServiceResult};

/// Создание нового аукциона
pub async fn create(dto: AuctionDto) -> ServiceResult<Uuid> {
    let code = dto
        .code
        .clone()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| format!("ADJ-{}", &Uuid::new_v4().simple().to_string()[..8]));
    let mut aggregate = Auction::new_for_insert(
        code,
        dto.description,
        dto.instrument_type,
        dto.auction_date,
        dto.settlement_date,
        dto.maturity,
        dto.amount_offered,
        dto.status,
        dto.details,
    );
    aggregate.base.comment = dto.comment;

    aggregate.validate().map_err(ServiceError::Validation)?;

    aggregate.before_write();

    Ok(repository::insert(&aggregate).await?)
}

/// Обновление существующего аукциона
pub async fn update(dto: AuctionDto) -> ServiceResult<()> {
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

/// Мягкое удаление аукциона
pub async fn delete(id: Uuid) -> ServiceResult<()> {
    if repository::soft_delete(id).await? {
        Ok(())
    } else {
        Err(ServiceError::NotFound)
    }
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Auction>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Auction>> {
    repository::list_all().await
}

fn date(y: i32, m: u32, d: u32) -> anyhow::Result<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| anyhow::anyhow!("invalid date {y}-{m}-{d}"))
}

/// Вставка тестовых данных
pub async fn insert_test_data() -> anyhow::Result<()> {
    let rows = [
        ("ADJ-2024-009", "Adjudication BTCT 26 semaines", "BTCT", date(2024, 3, 5)?, "26 semaines", 150.0, "cloturee"),
        ("ADJ-2024-012", "Adjudication BTA 6,3% mars 2030", "BTA", date(2024, 4, 9)?, "6 ans", 120.0, "cloturee"),
        ("ADJ-2024-015", "Adjudication BTCT 52 semaines", "BTCT", date(2024, 5, 7)?, "52 semaines", 200.0, "annoncee"),
        ("ADJ-2024-016", "Adjudication BTZc 5 ans", "BTZc", date(2024, 5, 21)?, "5 ans", 80.0, "annulee"),
        ("ADJ-2024-017", "Adjudication OTA 10 ans", "OTA", date(2024, 6, 11)?, "10 ans", 250.0, "annoncee"),
    ];

    for (code, title, instrument_type, auction_date, maturity, amount, status) in rows {
        create(AuctionDto {
            id: None,
            code: Some(code.into()),
            description: title.into(),
            instrument_type: instrument_type.into(),
            auction_date,
            settlement_date: auction_date.succ_opt().and_then(|d| d.succ_opt()),
            maturity: maturity.into(),
            amount_offered: amount,
            status: status.into(),
            details: format!("Montant indicatif : {} MDT", amount),
            comment: None,
        })
        .await?;
    }

    Ok(())
}
