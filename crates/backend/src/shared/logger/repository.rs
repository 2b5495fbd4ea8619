use chrono::Utc;
use contracts::shared::logger::{LogEntry, LogSource};
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder, QuerySelect, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "system_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub timestamp: String,
    pub source: String,
    pub category: String,
    pub message: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for LogEntry {
    fn from(m: Model) -> Self {
        LogEntry {
            id: m.id,
            timestamp: m.timestamp,
            source: LogSource::from_code(&m.source),
            category: m.category,
            message: m.message,
        }
    }
}

/// Записать событие в фоне, не блокируя обработчик
pub fn log_event_internal(source: &str, category: &str, message: &str) {
    let source = source.to_string();
    let category = category.to_string();
    let message = message.to_string();

    tokio::spawn(async move {
        if let Err(e) = log_event(get_connection(), &source, &category, &message).await {
            tracing::warn!("Failed to write system_log: {}", e);
        }
    });
}

pub async fn log_event<C: ConnectionTrait>(
    db: &C,
    source: &str,
    category: &str,
    message: &str,
) -> anyhow::Result<()> {
    let now = Utc::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();

    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        timestamp: Set(now),
        source: Set(source.to_string()),
        category: Set(category.to_string()),
        message: Set(message.to_string()),
    };

    active.insert(db).await?;
    Ok(())
}

/// Последние записи лога, новые сверху
pub async fn recent_logs<C: ConnectionTrait>(db: &C, limit: u64) -> anyhow::Result<Vec<LogEntry>> {
    let logs = Entity::find()
        .order_by_desc(Column::Id)
        .limit(limit)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(logs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::test_support::memory_db;

    #[tokio::test]
    async fn test_log_event_roundtrip() {
        let db = memory_db().await;
        log_event(&db, "client", "ui", "página aberta").await.unwrap();
        log_event(&db, "server", "startup", "ok").await.unwrap();

        let logs = recent_logs(&db, 10).await.unwrap();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].category, "startup");
        assert_eq!(logs[1].source, LogSource::Client);
    }
}
