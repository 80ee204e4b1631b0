use engine::{Engine, EngineError, Scripted, Stage, StageSelector, Uniform};
use migration::MigratorTrait;
use sea_orm::Database;

async fn engine_with_fanout(counts: Vec<u32>) -> Engine {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    Engine::builder()
        .database(db)
        .fanout(Box::new(Scripted::new(counts)))
        .build()
        .await
        .unwrap()
}

// An empty script makes every cut yield the range minimum (2 blanks).
async fn engine_with_db() -> Engine {
    engine_with_fanout(Vec::new()).await
}

#[tokio::test]
async fn migration_seeds_initial_capital() {
    let engine = engine_with_db().await;
    assert_eq!(engine.balance().await.unwrap(), 300.0);
}

#[tokio::test]
async fn buy_creates_log_and_charges_ledger() {
    let engine = engine_with_db().await;

    let log_id = engine.buy_log("Ash").await.unwrap();

    assert_eq!(engine.balance().await.unwrap(), 280.0);
    let summary = engine.summary().await.unwrap();
    assert_eq!(summary.logs, 1);

    let inventory = engine.inventory().await.unwrap();
    assert_eq!(inventory.logs.len(), 1);
    assert_eq!(inventory.logs[0].id, log_id);
    assert_eq!(inventory.logs[0].species, "Ash");
    assert!(!inventory.logs[0].consumed);
}

#[tokio::test]
async fn buy_without_funds_is_rejected_without_mutation() {
    let engine = engine_with_db().await;
    engine.record(-290.0).await.unwrap();

    let err = engine.buy_log("Maple").await.unwrap_err();
    assert_eq!(
        err,
        EngineError::InsufficientFunds {
            cost: 20.0,
            available: 10.0
        }
    );

    assert_eq!(engine.balance().await.unwrap(), 10.0);
    assert_eq!(engine.summary().await.unwrap().logs, 0);
}

#[tokio::test]
async fn cut_consumes_log_and_creates_scripted_blank_count() {
    let engine = engine_with_fanout(vec![4]).await;
    let log_id = engine.buy_log("Ash").await.unwrap();

    let blank_ids = engine
        .cut_log(StageSelector::Id(log_id), 38.0)
        .await
        .unwrap();
    assert_eq!(blank_ids.len(), 4);
    assert!(blank_ids.windows(2).all(|pair| pair[0] < pair[1]));

    let summary = engine.summary().await.unwrap();
    assert_eq!(summary.logs, 0);
    assert_eq!(summary.blanks, 4);

    // The consumed flag and the blanks appear together or not at all.
    let records = engine.records().await.unwrap();
    assert!(records.logs[0].consumed);
    assert_eq!(records.blanks.len(), 4);
    for blank in &records.blanks {
        assert_eq!(blank.log_id, log_id);
        assert_eq!(blank.length, 38.0);
        assert!(!blank.consumed);
    }
}

#[tokio::test]
async fn cut_count_stays_within_bounds_with_random_fanout() {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder()
        .database(db)
        .fanout(Box::new(Uniform::seeded(7)))
        .build()
        .await
        .unwrap();

    for _ in 0..6 {
        engine.buy_log("Ash").await.unwrap();
    }
    for _ in 0..6 {
        let blank_ids = engine
            .cut_log(StageSelector::Oldest, 34.5)
            .await
            .unwrap();
        assert!((2..=5).contains(&blank_ids.len()));
    }
}

#[tokio::test]
async fn cut_missing_id_is_not_found() {
    let engine = engine_with_db().await;

    let err = engine.cut_log(StageSelector::Id(99), 38.0).await.unwrap_err();
    assert_eq!(
        err,
        EngineError::NotFound {
            stage: Stage::Log,
            id: 99
        }
    );
}

#[tokio::test]
async fn cut_twice_is_already_consumed_and_leaves_blanks_unchanged() {
    let engine = engine_with_fanout(vec![2, 5]).await;
    let log_id = engine.buy_log("Ash").await.unwrap();
    engine
        .cut_log(StageSelector::Id(log_id), 38.0)
        .await
        .unwrap();
    let blanks_before = engine.summary().await.unwrap().blanks;

    let err = engine
        .cut_log(StageSelector::Id(log_id), 38.0)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::AlreadyConsumed {
            stage: Stage::Log,
            id: log_id
        }
    );
    assert_eq!(engine.summary().await.unwrap().blanks, blanks_before);
}

#[tokio::test]
async fn oldest_selection_visits_logs_in_id_order_until_exhausted() {
    let engine = engine_with_db().await;
    let first = engine.buy_log("Ash").await.unwrap();
    let second = engine.buy_log("Oak").await.unwrap();
    let third = engine.buy_log("Maple").await.unwrap();
    assert!(first < second && second < third);

    engine.cut_log(StageSelector::Oldest, 38.0).await.unwrap();
    let remaining: Vec<i32> = engine
        .inventory()
        .await
        .unwrap()
        .logs
        .iter()
        .map(|log| log.id)
        .collect();
    assert_eq!(remaining, vec![second, third]);

    engine.cut_log(StageSelector::Oldest, 38.0).await.unwrap();
    engine.cut_log(StageSelector::Oldest, 38.0).await.unwrap();
    assert!(engine.inventory().await.unwrap().logs.is_empty());

    let err = engine.cut_log(StageSelector::Oldest, 38.0).await.unwrap_err();
    assert_eq!(err, EngineError::NoneAvailable { stage: Stage::Log });
}

#[tokio::test]
async fn turn_and_finish_are_one_to_one() {
    let engine = engine_with_db().await;
    engine.buy_log("Ash").await.unwrap();
    let blank_ids = engine.cut_log(StageSelector::Oldest, 38.0).await.unwrap();

    let turning_id = engine
        .turn_blank(StageSelector::Id(blank_ids[0]), "AL")
        .await
        .unwrap();
    let records = engine.records().await.unwrap();
    assert_eq!(records.turnings.len(), 1);
    assert_eq!(records.turnings[0].blank_id, blank_ids[0]);
    assert_eq!(records.turnings[0].league, "AL");
    // Only the turned blank is consumed; its sibling stays available.
    assert!(records.blanks[0].consumed);
    assert!(!records.blanks[1].consumed);

    let err = engine
        .turn_blank(StageSelector::Id(blank_ids[0]), "NL")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::AlreadyConsumed {
            stage: Stage::Blank,
            id: blank_ids[0]
        }
    );

    let bat_id = engine
        .finish_turning(StageSelector::Id(turning_id), "Cobb")
        .await
        .unwrap();
    let records = engine.records().await.unwrap();
    assert_eq!(records.bats.len(), 1);
    assert_eq!(records.bats[0].id, bat_id);
    assert_eq!(records.bats[0].turning_id, turning_id);
    assert_eq!(records.bats[0].model, "Cobb");
    assert!(records.turnings[0].consumed);
}

#[tokio::test]
async fn sell_credits_ledger_and_consumes_bat() {
    let engine = engine_with_db().await;
    engine.buy_log("Ash").await.unwrap();
    engine.cut_log(StageSelector::Oldest, 38.0).await.unwrap();
    engine.turn_blank(StageSelector::Oldest, "AL").await.unwrap();
    let bat_id = engine
        .finish_turning(StageSelector::Oldest, "Cobb")
        .await
        .unwrap();
    let before = engine.balance().await.unwrap();

    let sold = engine.sell_bat(StageSelector::Oldest).await.unwrap();
    assert_eq!(sold, bat_id);
    assert_eq!(engine.balance().await.unwrap(), before + 10.0);

    let err = engine.sell_bat(StageSelector::Id(bat_id)).await.unwrap_err();
    assert_eq!(
        err,
        EngineError::AlreadyConsumed {
            stage: Stage::Bat,
            id: bat_id
        }
    );
}

#[tokio::test]
async fn sell_with_no_bats_leaves_ledger_unchanged() {
    let engine = engine_with_db().await;

    let err = engine.sell_bat(StageSelector::Oldest).await.unwrap_err();
    assert_eq!(err, EngineError::NoneAvailable { stage: Stage::Bat });
    assert_eq!(engine.balance().await.unwrap(), 300.0);
}

#[tokio::test]
async fn full_pipeline_nets_minus_ten() {
    let engine = engine_with_db().await;

    engine.buy_log("Ash").await.unwrap();
    engine.cut_log(StageSelector::Oldest, 38.0).await.unwrap();
    engine.turn_blank(StageSelector::Oldest, "AL").await.unwrap();
    engine
        .finish_turning(StageSelector::Oldest, "Cobb")
        .await
        .unwrap();
    engine.sell_bat(StageSelector::Oldest).await.unwrap();

    assert_eq!(engine.balance().await.unwrap(), 290.0);

    let summary = engine.summary().await.unwrap();
    assert_eq!(summary.logs, 0);
    assert_eq!(summary.blanks, 1);
    assert_eq!(summary.turnings, 0);
    assert_eq!(summary.bats, 0);

    // Nothing is ever deleted: the tables keep the whole lineage.
    let records = engine.records().await.unwrap();
    assert_eq!(records.logs.len(), 1);
    assert_eq!(records.blanks.len(), 2);
    assert_eq!(records.turnings.len(), 1);
    assert_eq!(records.bats.len(), 1);
    assert!(records.logs[0].consumed);
    assert_eq!(records.blanks.iter().filter(|b| b.consumed).count(), 1);
    assert!(records.turnings[0].consumed);
    assert!(records.bats[0].consumed);
}

#[tokio::test]
async fn ledger_follows_the_buy_sell_formula() {
    let engine = engine_with_db().await;

    for species in ["Ash", "Oak", "Maple"] {
        engine.buy_log(species).await.unwrap();
    }
    engine.cut_log(StageSelector::Oldest, 38.0).await.unwrap();
    for _ in 0..2 {
        engine.turn_blank(StageSelector::Oldest, "AL").await.unwrap();
        engine
            .finish_turning(StageSelector::Oldest, "Cobb")
            .await
            .unwrap();
        engine.sell_bat(StageSelector::Oldest).await.unwrap();
    }

    // 300 - 3 buys * 20 + 2 sells * 10
    assert_eq!(engine.balance().await.unwrap(), 260.0);
}

#[tokio::test]
async fn record_appends_unconditionally() {
    let engine = engine_with_db().await;

    let first = engine.record(-1000.0).await.unwrap();
    let second = engine.record(5.25).await.unwrap();
    assert!(first < second);
    assert_eq!(engine.balance().await.unwrap(), -694.75);
}

#[tokio::test]
async fn records_survive_engine_rebuild() {
    let root =
        std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../target/test_dbs");
    std::fs::create_dir_all(&root).unwrap();
    let path = root.join(format!("pipeline_{}.db", uuid::Uuid::new_v4()));
    let url = format!("sqlite:{}?mode=rwc", path.display());

    let db = Database::connect(&url).await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();

    {
        let engine = Engine::builder()
            .database(db.clone())
            .fanout(Box::new(Scripted::new([3])))
            .build()
            .await
            .unwrap();
        engine.buy_log("Ash").await.unwrap();
        engine.cut_log(StageSelector::Oldest, 36.0).await.unwrap();
    }

    let rebuilt = Engine::builder().database(db).build().await.unwrap();
    let summary = rebuilt.summary().await.unwrap();
    assert_eq!(summary.logs, 0);
    assert_eq!(summary.blanks, 3);
    assert_eq!(rebuilt.balance().await.unwrap(), 280.0);
}
