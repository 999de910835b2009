use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::shared::list_query::{ComparatorKind, ListConfig, Listable, SortValue};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

crate::define_uuid_id!(EmissionId, "Уникальный идентификатор эмиссии");

/// Эмиссия (ligne de titres) на внутреннем рынке
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Emission {
    #[serde(flatten)]
    pub base: BaseAggregate<EmissionId>,

    #[serde(rename = "instrumentType")]
    pub instrument_type: String,

    #[serde(rename = "issueDate")]
    pub issue_date: NaiveDate,

    #[serde(rename = "maturityDate")]
    pub maturity_date: NaiveDate,

    /// Объём в обращении, млн динаров
    pub amount: f64,

    /// Купонная ставка, %
    pub rate: f64,

    pub details: String,
}

impl Emission {
    #[allow(clippy::too_many_arguments)]
    pub fn new_for_insert(
        code: String,
        title: String,
        instrument_type: String,
        issue_date: NaiveDate,
        maturity_date: NaiveDate,
        amount: f64,
        rate: f64,
        details: String,
    ) -> Self {
        Self {
            base: BaseAggregate::new(EmissionId::new_v4(), code, title),
            instrument_type,
            issue_date,
            maturity_date,
            amount,
            rate,
            details,
        }
    }

    pub fn title(&self) -> &str {
        &self.base.description
    }

    /// Срок до погашения в годах (округлённо вниз)
    pub fn tenor_years(&self) -> i32 {
        let mut years = self.maturity_date.year() - self.issue_date.year();
        if (self.maturity_date.month(), self.maturity_date.day())
            < (self.issue_date.month(), self.issue_date.day())
        {
            years -= 1;
        }
        years.max(0)
    }

    pub fn list_config() -> ListConfig {
        ListConfig::new(10)
            .filter("instrument_type", "Type de titre")
            .filter("year", "Année")
            .sort("issue_date", "Date d'émission", ComparatorKind::Date)
            .sort("amount", "Encours", ComparatorKind::Number)
            .sort("rate", "Taux", ComparatorKind::Number)
    }
}

impl Listable for Emission {
    fn record_id(&self) -> String {
        self.base.id.as_string()
    }

    fn search_texts(&self) -> Vec<&str> {
        vec![self.base.description.as_str(), self.details.as_str()]
    }

    fn filter_value(&self, field: &str) -> Option<String> {
        match field {
            "instrument_type" => Some(self.instrument_type.clone()),
            "year" => Some(self.issue_date.year().to_string()),
            _ => None,
        }
    }

    fn sort_value(&self, field: &str) -> Option<SortValue> {
        match field {
            "issue_date" => Some(SortValue::Date(self.issue_date)),
            "amount" => Some(SortValue::Number(self.amount)),
            "rate" => Some(SortValue::Number(self.rate)),
            _ => None,
        }
    }
}

impl AggregateRoot for Emission {
    type Id = EmissionId;

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
        "a004"
    }

    fn collection_name() -> &'static str {
        "emission"
    }

    fn list_name() -> &'static str {
        "Émissions"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emission(issue: (i32, u32, u32), maturity: (i32, u32, u32)) -> Emission {
        Emission::new_for_insert(
            "EM-1".into(),
            "BTA 7,5% 2031".into(),
            "BTA".into(),
            NaiveDate::from_ymd_opt(issue.0, issue.1, issue.2).unwrap(),
            NaiveDate::from_ymd_opt(maturity.0, maturity.1, maturity.2).unwrap(),
            850.0,
            7.5,
            String::new(),
        )
    }

    #[test]
    fn test_tenor_years() {
        assert_eq!(emission((2024, 3, 15), (2031, 3, 15)).tenor_years(), 7);
        assert_eq!(emission((2024, 3, 15), (2031, 3, 14)).tenor_years(), 6);
        assert_eq!(emission((2024, 3, 15), (2024, 9, 15)).tenor_years(), 0);
    }
}
