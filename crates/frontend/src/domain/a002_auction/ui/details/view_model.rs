use crate::shared::api_utils::upsert_dto;
use contracts::domain::a002_auction::{Auction, AuctionDto, AUCTION_STATUSES};
use contracts::domain::common::reference::INSTRUMENT_TYPES;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub fn empty_dto() -> AuctionDto {
    AuctionDto {
        id: None,
        code: None,
        description: String::new(),
        instrument_type: INSTRUMENT_TYPES[0].0.to_string(),
        auction_date: chrono::Utc::now().date_naive(),
        settlement_date: None,
        maturity: String::new(),
        amount_offered: 0.0,
        status: AUCTION_STATUSES[0].0.to_string(),
        details: String::new(),
        comment: None,
    }
}

/// Сумма во французской записи: "1 500,5" или "1500.5"
pub fn parse_amount(text: &str) -> Option<f64> {
    let normalized: String = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if normalized.is_empty() {
        return None;
    }
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Та же проверка, что выполняет backend перед записью
pub fn validate_dto(dto: &AuctionDto) -> Result<(), String> {
    let mut candidate = Auction::new_for_insert(
        "-".to_string(),
        String::new(),
        String::new(),
        dto.auction_date,
        None,
        String::new(),
        0.0,
        String::new(),
        String::new(),
    );
    candidate.update(dto);
    candidate.validate()
}

/// ViewModel for Auction details form
#[derive(Clone, Copy)]
pub struct AuctionDetailsViewModel {
    pub form: RwSignal<AuctionDto>,
    /// Сумма как введена пользователем
    pub amount_text: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl AuctionDetailsViewModel {
    pub fn new(initial: AuctionDto) -> Self {
        let amount_text = if initial.id.is_some() {
            initial.amount_offered.to_string()
        } else {
            String::new()
        };
        Self {
            form: RwSignal::new(initial),
            amount_text: RwSignal::new(amount_text),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn save_command(&self, token: Option<String>, on_saved: Callback<String>) {
        let mut dto = self.form.get_untracked();
        match parse_amount(&self.amount_text.get_untracked()) {
            Some(amount) => dto.amount_offered = amount,
            None => {
                self.error
                    .set(Some("Le montant annoncé doit être un nombre".to_string()));
                return;
            }
        }
        if let Err(e) = validate_dto(&dto) {
            self.error.set(Some(e));
            return;
        }

        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            match upsert_dto(&Auction::api_path(), &dto, token.as_deref()).await {
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
    use chrono::NaiveDate;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1 500,5"), Some(1500.5));
        assert_eq!(parse_amount("250"), Some(250.0));
        assert_eq!(parse_amount("12.75"), Some(12.75));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("beaucoup"), None);
    }

    #[test]
    fn test_validate_dto_checks_settlement_date() {
        let mut dto = empty_dto();
        dto.description = "Adjudication BTA 10 ans".into();
        dto.auction_date = NaiveDate::from_ymd_opt(2024, 5, 14).unwrap();
        assert!(validate_dto(&dto).is_ok());

        dto.settlement_date = NaiveDate::from_ymd_opt(2024, 5, 10);
        assert!(validate_dto(&dto).is_err());

        dto.settlement_date = NaiveDate::from_ymd_opt(2024, 5, 17);
        dto.amount_offered = -5.0;
        assert!(validate_dto(&dto).is_err());
    }
}
