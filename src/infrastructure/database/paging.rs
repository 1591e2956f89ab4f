//! Snapshot page reads
//!
//! The page fetch and the total count run inside one read-only transaction
//! so `total` always describes the same data the page was cut from, even
//! with concurrent writers.

use sea_orm::{
    AccessMode, Condition, ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbBackend,
    DbErr, EntityTrait, IsolationLevel, Order, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, TransactionTrait,
};

use crate::domain::listing::{SortDirection, SortField};

/// Everything needed to cut one page out of an entity table.
pub struct PageQuery<E: EntityTrait> {
    pub condition: Condition,
    /// Sort columns, most significant first
    pub order: Vec<(E::Column, Order)>,
    /// Final ascending key making the order total
    pub tie_breaker: E::Column,
    pub skip: u64,
    pub take: u64,
}

/// Maps an allow-listed sort field to the columns it orders by.
pub trait SortColumns<E: EntityTrait>: SortField {
    fn columns(self) -> Vec<E::Column>;
}

pub fn order_for<E, F>(field: F, direction: SortDirection) -> Vec<(E::Column, Order)>
where
    E: EntityTrait,
    F: SortColumns<E>,
{
    let order = match direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    };
    field
        .columns()
        .into_iter()
        .map(|column| (column, order.clone()))
        .collect()
}

/// Begin a read-only transaction whose reads share one snapshot.
///
/// SQLite has no per-transaction isolation settings; its transactions are
/// serializable, so a plain `BEGIN` is enough there.
pub async fn begin_snapshot(db: &DatabaseConnection) -> Result<DatabaseTransaction, DbErr> {
    match db.get_database_backend() {
        DbBackend::Sqlite => db.begin().await,
        _ => {
            db.begin_with_config(
                Some(IsolationLevel::RepeatableRead),
                Some(AccessMode::ReadOnly),
            )
            .await
        }
    }
}

/// Read one page and the total match count from a single snapshot.
pub async fn fetch_page<E>(
    db: &DatabaseConnection,
    query: PageQuery<E>,
) -> Result<(Vec<E::Model>, u64), DbErr>
where
    E: EntityTrait,
    E::Model: Send + Sync,
{
    let txn = begin_snapshot(db).await?;

    let mut select = E::find().filter(query.condition.clone());
    for (column, order) in query.order {
        select = select.order_by(column, order);
    }
    let items = select
        .order_by_asc(query.tie_breaker)
        .offset(query.skip)
        .limit(query.take)
        .all(&txn)
        .await?;

    let total = E::find().filter(query.condition).count(&txn).await?;

    txn.commit().await?;
    Ok((items, total))
}
