use crate::domain::common::reference::{is_known, INSTRUMENT_TYPES};
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::shared::list_query::{ComparatorKind, ListConfig, Listable, SortValue};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

crate::define_uuid_id!(AuctionId, "Уникальный идентификатор аукциона");

/// Статусы аукциона
pub const AUCTION_STATUSES: &[(&str, &str)] = &[
    ("annoncee", "Annoncée"),
    ("cloturee", "Clôturée"),
    ("annulee", "Annulée"),
];

// ============================================================================
// Aggregate Root
// ============================================================================

/// Аукцион (adjudication) по размещению ценных бумаг казначейства
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Auction {
    #[serde(flatten)]
    pub base: BaseAggregate<AuctionId>,

    #[serde(rename = "instrumentType")]
    pub instrument_type: String,

    #[serde(rename = "auctionDate")]
    pub auction_date: NaiveDate,

    #[serde(rename = "settlementDate")]
    pub settlement_date: Option<NaiveDate>,

    /// Срок, в свободной форме ("52 semaines", "7 ans")
    pub maturity: String,

    /// Объявленный объём, млн динаров
    #[serde(rename = "amountOffered")]
    pub amount_offered: f64,

    pub status: String,
    pub details: String,
}

impl Auction {
    /// Создать новый аукцион для вставки в БД
    #[allow(clippy::too_many_arguments)]
    pub fn new_for_insert(
        code: String,
        title: String,
        instrument_type: String,
        auction_date: NaiveDate,
        settlement_date: Option<NaiveDate>,
        maturity: String,
        amount_offered: f64,
        status: String,
        details: String,
    ) -> Self {
        Self {
            base: BaseAggregate::new(AuctionId::new_v4(), code, title),
            instrument_type,
            auction_date,
            settlement_date,
            maturity,
            amount_offered,
            status,
            details,
        }
    }

    pub fn title(&self) -> &str {
        &self.base.description
    }

    /// Получить ID как строку
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &AuctionDto) {
        if let Some(code) = &dto.code {
            self.base.code = code.clone();
        }
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.instrument_type = dto.instrument_type.clone();
        self.auction_date = dto.auction_date;
        self.settlement_date = dto.settlement_date;
        self.maturity = dto.maturity.clone();
        self.amount_offered = dto.amount_offered;
        self.status = dto.status.clone();
        self.details = dto.details.clone();
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Le titre ne peut pas être vide".into());
        }
        if self.base.code.trim().is_empty() {
            return Err("La référence ne peut pas être vide".into());
        }
        if !is_known(INSTRUMENT_TYPES, &self.instrument_type) {
            return Err(format!("Type de titre inconnu : {}", self.instrument_type));
        }
        if !is_known(AUCTION_STATUSES, &self.status) {
            return Err(format!("Statut inconnu : {}", self.status));
        }
        if !self.amount_offered.is_finite() || self.amount_offered < 0.0 {
            return Err("Le montant annoncé doit être positif".into());
        }
        if let Some(settlement) = self.settlement_date {
            if settlement < self.auction_date {
                return Err("La date de règlement précède la date d'adjudication".into());
            }
        }
        Ok(())
    }

    /// Хук перед записью
    pub fn before_write(&mut self) {
        self.base.touch();
        self.base.metadata.increment_version();
    }

    /// Конфигурация списка: админка аукционов
    pub fn list_config() -> ListConfig {
        ListConfig::new(10)
            .filter("instrument_type", "Type de titre")
            .filter("status", "Statut")
            .filter("year", "Année")
            .sort("auction_date", "Date d'adjudication", ComparatorKind::Date)
            .sort("amount_offered", "Montant annoncé", ComparatorKind::Number)
            .sort("title", "Titre", ComparatorKind::Text)
    }
}

impl Listable for Auction {
    fn record_id(&self) -> String {
        self.to_string_id()
    }

    fn search_texts(&self) -> Vec<&str> {
        vec![self.base.description.as_str(), self.details.as_str()]
    }

    fn filter_value(&self, field: &str) -> Option<String> {
        match field {
            "instrument_type" => Some(self.instrument_type.clone()),
            "status" => Some(self.status.clone()),
            "year" => Some(self.auction_date.year().to_string()),
            _ => None,
        }
    }

    fn sort_value(&self, field: &str) -> Option<SortValue> {
        match field {
            "auction_date" => Some(SortValue::Date(self.auction_date)),
            "amount_offered" => Some(SortValue::Number(self.amount_offered)),
            "title" => Some(SortValue::Text(self.base.description.clone())),
            _ => None,
        }
    }
}

impl AggregateRoot for Auction {
    type Id = AuctionId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "auction"
    }

    fn list_name() -> &'static str {
        "Adjudications"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления аукциона
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuctionDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,

    #[serde(rename = "instrumentType")]
    pub instrument_type: String,

    #[serde(rename = "auctionDate")]
    pub auction_date: NaiveDate,

    #[serde(rename = "settlementDate")]
    pub settlement_date: Option<NaiveDate>,

    pub maturity: String,

    #[serde(rename = "amountOffered")]
    pub amount_offered: f64,

    pub status: String,
    #[serde(default)]
    pub details: String,
    pub comment: Option<String>,
}

impl From<&Auction> for AuctionDto {
    fn from(a: &Auction) -> Self {
        Self {
            id: Some(a.to_string_id()),
            code: Some(a.base.code.clone()),
            description: a.base.description.clone(),
            instrument_type: a.instrument_type.clone(),
            auction_date: a.auction_date,
            settlement_date: a.settlement_date,
            maturity: a.maturity.clone(),
            amount_offered: a.amount_offered,
            status: a.status.clone(),
            details: a.details.clone(),
            comment: a.base.comment.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Auction {
        Auction::new_for_insert(
            "ADJ-2024-017".into(),
            "Adjudication BTA 6,3% mars 2030".into(),
            "BTA".into(),
            NaiveDate::from_ymd_opt(2024, 5, 14).unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 17),
            "6 ans".into(),
            120.0,
            "annoncee".into(),
            String::new(),
        )
    }

    #[test]
    fn test_valid_auction_passes_validation() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_settlement_before_auction_is_rejected() {
        let mut a = sample();
        a.settlement_date = NaiveDate::from_ymd_opt(2024, 5, 1);
        assert!(a.validate().is_err());
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let mut a = sample();
        a.amount_offered = -5.0;
        assert!(a.validate().is_err());
    }

    #[test]
    fn test_dto_roundtrip_through_update() {
        let original = sample();
        let mut copy = sample();
        copy.update(&AuctionDto::from(&original));
        assert_eq!(copy.title(), original.title());
        assert_eq!(copy.settlement_date, original.settlement_date);
        assert_eq!(copy.filter_value("year").as_deref(), Some("2024"));
    }
}
