use bhub_database::seed::{SeedOp, Seeder, run_then_disconnect};
use bhub_database::{Database, DatabaseError};

async fn mem_db(name: &str) -> Database {
    Database::builder()
        .url("mem://")
        .session("seed_tests", name)
        .init()
        .await
        .expect("connect to mem://")
}

#[tokio::test]
async fn empty_seeder_is_a_successful_noop() {
    let db = mem_db("noop").await;
    let seeder = Seeder::new();
    assert!(seeder.is_empty());

    let report = run_then_disconnect(db, &seeder).await.expect("no-op seed should succeed");
    assert!(report.applied.is_empty());
}

#[tokio::test]
async fn ops_apply_in_registration_order() {
    let db = mem_db("ordered").await;
    let seeder = Seeder::new()
        .register(SeedOp::new("categories", "CREATE category:groceries SET name = 'Groceries';"))
        .register(SeedOp::new("budgets", "CREATE budget:demo SET amount = 100;"));

    let report = run_then_disconnect(db, &seeder).await.expect("seed should succeed");
    assert_eq!(report.applied, vec!["categories", "budgets"]);
}

#[tokio::test]
async fn failing_op_reports_its_name_and_still_disconnects() {
    let db = mem_db("failing").await;
    let seeder = Seeder::new()
        .register(SeedOp::new("broken", "THIS IS NOT SURREALQL;"))
        .register(SeedOp::new("never_reached", "CREATE budget:x SET amount = 1;"));

    // run_then_disconnect consumes the handle, so the disconnect happens
    // on this path too; the error must carry the failing op's name.
    let err = run_then_disconnect(db, &seeder).await.expect_err("seed should fail");
    match err {
        DatabaseError::Seed { op, .. } => assert_eq!(op, "broken"),
        other => panic!("unexpected error: {other}"),
    }
}
