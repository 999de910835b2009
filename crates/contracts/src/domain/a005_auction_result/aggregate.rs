use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::shared::list_query::{ComparatorKind, ListConfig, Listable, SortValue};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

crate::define_uuid_id!(AuctionResultId, "Уникальный идентификатор результата аукциона");

/// Результат аукциона (résultat d'adjudication)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuctionResult {
    #[serde(flatten)]
    pub base: BaseAggregate<AuctionResultId>,

    #[serde(rename = "instrumentType")]
    pub instrument_type: String,

    #[serde(rename = "auctionDate")]
    pub auction_date: NaiveDate,

    /// Объём заявок, млн динаров
    #[serde(rename = "amountRequested")]
    pub amount_requested: f64,

    /// Объём удовлетворённых заявок, млн динаров
    #[serde(rename = "amountAllotted")]
    pub amount_allotted: f64,

    /// Средневзвешенная ставка, %
    #[serde(rename = "weightedAvgRate")]
    pub weighted_avg_rate: f64,

    #[serde(rename = "minRate")]
    pub min_rate: f64,

    #[serde(rename = "maxRate")]
    pub max_rate: f64,

    pub details: String,
}

impl AuctionResult {
    #[allow(clippy::too_many_arguments)]
    pub fn new_for_insert(
        code: String,
        title: String,
        instrument_type: String,
        auction_date: NaiveDate,
        amount_requested: f64,
        amount_allotted: f64,
        weighted_avg_rate: f64,
        min_rate: f64,
        max_rate: f64,
        details: String,
    ) -> Self {
        Self {
            base: BaseAggregate::new(AuctionResultId::new_v4(), code, title),
            instrument_type,
            auction_date,
            amount_requested,
            amount_allotted,
            weighted_avg_rate,
            min_rate,
            max_rate,
            details,
        }
    }

    pub fn title(&self) -> &str {
        &self.base.description
    }

    /// Коэффициент покрытия (заявки / размещено); `None` если ничего не размещено
    pub fn cover_ratio(&self) -> Option<f64> {
        if self.amount_allotted > 0.0 {
            Some(self.amount_requested / self.amount_allotted)
        } else {
            None
        }
    }

    pub fn list_config() -> ListConfig {
        ListConfig::new(10)
            .filter("instrument_type", "Type de titre")
            .filter("year", "Année")
            .sort("auction_date", "Date d'adjudication", ComparatorKind::Date)
            .sort("amount_allotted", "Montant retenu", ComparatorKind::Number)
            .sort("weighted_avg_rate", "TMP", ComparatorKind::Number)
    }
}

impl Listable for AuctionResult {
    fn record_id(&self) -> String {
        self.base.id.as_string()
    }

    fn search_texts(&self) -> Vec<&str> {
        vec![self.base.description.as_str(), self.details.as_str()]
    }

    fn filter_value(&self, field: &str) -> Option<String> {
        match field {
            "instrument_type" => Some(self.instrument_type.clone()),
            "year" => Some(self.auction_date.year().to_string()),
            _ => None,
        }
    }

    fn sort_value(&self, field: &str) -> Option<SortValue> {
        match field {
            "auction_date" => Some(SortValue::Date(self.auction_date)),
            "amount_allotted" => Some(SortValue::Number(self.amount_allotted)),
            "weighted_avg_rate" => Some(SortValue::Number(self.weighted_avg_rate)),
            _ => None,
        }
    }
}

impl AggregateRoot for AuctionResult {
    type Id = AuctionResultId;

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
        "a005"
    }

    fn collection_name() -> &'static str {
        "auction_result"
    }

    fn list_name() -> &'static str {
        "Résultats des adjudications"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_ratio() {
        let mut r = AuctionResult::new_for_insert(
            "RES-1".into(),
            "Résultat BTCT 52 semaines".into(),
            "BTCT".into(),
            NaiveDate::from_ymd_opt(2024, 2, 6).unwrap(),
            300.0,
            120.0,
            8.12,
            8.0,
            8.25,
            String::new(),
        );
        assert_eq!(r.cover_ratio(), Some(2.5));
        r.amount_allotted = 0.0;
        assert_eq!(r.cover_ratio(), None);
    }
}
