use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};
use contracts::dashboards::d400_overview::{
    OverviewResponse, CLOSING_SOON_DAYS, RECENT_TENDERS_LIMIT,
};
use contracts::enums::TenderStatus;
use contracts::shared::options::CodeTable;
use sea_orm::ConnectionTrait;

use crate::domain::a001_tender::repository as tenders;
use crate::domain::a003_establishment::repository as establishments;
use crate::shared::data::db::get_connection;

/// Сводка для главной страницы
pub async fn get_overview() -> Result<OverviewResponse> {
    build_overview(get_connection(), Local::now().date_naive()).await
}

pub async fn build_overview<C: ConnectionTrait>(db: &C, today: NaiveDate) -> Result<OverviewResponse> {
    let open = TenderStatus::Open.code();
    let closing_until = today + Duration::days(CLOSING_SOON_DAYS);

    let (open_tenders, closing_soon, establishments_total, active_establishments, recent_tenders) = tokio::try_join!(
        tenders::count_by_status(db, open),
        tenders::count_closing_between(db, open, today, closing_until),
        establishments::count(db, false),
        establishments::count(db, true),
        tenders::latest(db, RECENT_TENDERS_LIMIT),
    )?;

    Ok(OverviewResponse {
        open_tenders,
        closing_soon,
        establishments_total,
        active_establishments,
        recent_tenders,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::test_support::{exec, memory_db, seed_directory};

    #[tokio::test]
    async fn test_overview_counters() {
        let db = memory_db().await;
        seed_directory(&db).await;
        exec(
            &db,
            "INSERT INTO a001_tenders (number, agency, object, modality, status, opening_at, closing_at) VALUES \
             ('PE 1', 'Órgão A', 'Objeto A', 'Pregão Eletrônico', 'aberta', '2024-06-01T09:00:00', '2024-06-12T18:00:00'), \
             ('PE 2', 'Órgão B', 'Objeto B', 'Pregão Eletrônico', 'aberta', '2024-06-02T09:00:00', '2024-07-30T18:00:00'), \
             ('CC 3', 'Órgão C', 'Objeto C', 'Concorrência', 'cancelada', '2024-06-03T09:00:00', '2024-06-11T18:00:00')",
        )
        .await;

        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let overview = build_overview(&db, today).await.unwrap();
        assert_eq!(overview.open_tenders, 2);
        assert_eq!(overview.closing_soon, 1);
        assert_eq!(overview.establishments_total, 3);
        assert_eq!(overview.active_establishments, 2);
        assert_eq!(overview.recent_tenders.len(), 3);
        assert_eq!(overview.recent_tenders[0].number, "CC 3");
    }
}
