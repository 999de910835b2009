use chrono::Utc;
use contracts::domain::a005_auction_result::aggregate::{AuctionResult, AuctionResultId};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a005_auction_result")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub instrument_type: String,
    pub auction_date: chrono::NaiveDate,
    pub amount_requested: f64,
    pub amount_allotted: f64,
    pub weighted_avg_rate: f64,
    pub min_rate: f64,
    pub max_rate: f64,
    pub details: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for AuctionResult {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        AuctionResult {
            base: BaseAggregate::with_metadata(
                AuctionResultId(uuid),
                m.code,
                m.description,
                m.comment,
                metadata,
            ),
            instrument_type: m.instrument_type,
            auction_date: m.auction_date,
            amount_requested: m.amount_requested,
            amount_allotted: m.amount_allotted,
            weighted_avg_rate: m.weighted_avg_rate,
            min_rate: m.min_rate,
            max_rate: m.max_rate,
            details: m.details,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<AuctionResult>> {
    let items = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_desc(Column::AuctionDate)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<AuctionResult>> {
    let result = Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &AuctionResult) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        instrument_type: Set(aggregate.instrument_type.clone()),
        auction_date: Set(aggregate.auction_date),
        amount_requested: Set(aggregate.amount_requested),
        amount_allotted: Set(aggregate.amount_allotted),
        weighted_avg_rate: Set(aggregate.weighted_avg_rate),
        min_rate: Set(aggregate.min_rate),
        max_rate: Set(aggregate.max_rate),
        details: Set(aggregate.details.clone()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}
