//! Integration tests for the repository layer.
//!
//! Exercises queries against a real database:
//! - Client listing with search, program filter and ordering
//! - Enrollment insert guarded by the unique pairing constraint
//! - Enrollment projections joined to programs
//! - Aggregate counts

use chrono::NaiveDate;
use clinic_core::client::{ClientListQuery, Gender, NewClient};
use clinic_core::program::{NewProgram, ProgramStatus};
use clinic_core::types::DbId;
use clinic_db::models::enrollment::{CreateEnrollment, EnrollmentFilter};
use clinic_db::repositories::enrollment_repo::UNIQUE_PAIR_CONSTRAINT;
use clinic_db::repositories::{ClientRepo, EnrollmentRepo, ProgramRepo, StatsRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_client(first_name: &str, last_name: &str) -> NewClient {
    NewClient {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        gender: Gender::Female,
        contact_number: "555-0100".to_string(),
        email: None,
        address: "1 Elm St".to_string(),
        medical_history: None,
    }
}

fn new_program(name: &str, status: ProgramStatus) -> NewProgram {
    NewProgram {
        name: name.to_string(),
        description: format!("{name} program"),
        status,
    }
}

fn new_enrollment(client_id: DbId, program_id: DbId) -> CreateEnrollment {
    CreateEnrollment {
        client_id,
        program_id,
        notes: String::new(),
    }
}

fn list_query(search: Option<&str>, program_id: Option<DbId>) -> ClientListQuery {
    ClientListQuery {
        search: search.map(str::to_string),
        program_id,
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Clients
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_client_round_trip(pool: PgPool) {
    let created = ClientRepo::create(&pool, &new_client("Jane", "Doe"))
        .await
        .unwrap();
    assert_eq!(created.gender, Gender::Female);
    assert_eq!(created.email, None);

    let found = ClientRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("client should exist");
    assert_eq!(found.first_name, "Jane");
    assert_eq!(found.date_of_birth, NaiveDate::from_ymd_opt(1990, 1, 1).unwrap());

    assert!(ClientRepo::exists(&pool, created.id).await.unwrap());
    assert!(!ClientRepo::exists(&pool, DbId::new_v4()).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_invalid_gender_rejected_by_check_constraint(pool: PgPool) {
    let result = sqlx::query(
        "INSERT INTO clients (first_name, last_name, date_of_birth, gender, contact_number, address)
         VALUES ('A', 'B', '1990-01-01', 'unknown', '1', 'x')",
    )
    .execute(&pool)
    .await;

    let err = result.unwrap_err();
    let db_err = err.as_database_error().expect("database error");
    assert_eq!(db_err.code().as_deref(), Some("23514"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_client_list_newest_first_and_search(pool: PgPool) {
    let jane = ClientRepo::create(&pool, &new_client("Jane", "Doe")).await.unwrap();
    let john = ClientRepo::create(&pool, &new_client("John", "Smith")).await.unwrap();

    let all = ClientRepo::list(&pool, &list_query(None, None)).await.unwrap();
    let ids: Vec<DbId> = all.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![john.id, jane.id]);

    let smith = ClientRepo::list(&pool, &list_query(Some("SMI"), None)).await.unwrap();
    assert_eq!(smith.len(), 1);
    assert_eq!(smith[0].id, john.id);

    let none = ClientRepo::list(&pool, &list_query(Some("%"), None)).await.unwrap();
    assert!(none.is_empty(), "'%' must match literally");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_client_list_program_filter(pool: PgPool) {
    let jane = ClientRepo::create(&pool, &new_client("Jane", "Doe")).await.unwrap();
    ClientRepo::create(&pool, &new_client("John", "Smith")).await.unwrap();
    let tb = ProgramRepo::create(&pool, &new_program("TB", ProgramStatus::Active))
        .await
        .unwrap();
    let hiv = ProgramRepo::create(&pool, &new_program("HIV", ProgramStatus::Active))
        .await
        .unwrap();
    EnrollmentRepo::create(&pool, &new_enrollment(jane.id, tb.id))
        .await
        .unwrap();

    let enrolled = ClientRepo::list(&pool, &list_query(None, Some(tb.id))).await.unwrap();
    assert_eq!(enrolled.len(), 1);
    assert_eq!(enrolled[0].id, jane.id);

    let empty = ClientRepo::list(&pool, &list_query(None, Some(hiv.id))).await.unwrap();
    assert!(empty.is_empty());

    let both = ClientRepo::list(&pool, &list_query(Some("john"), Some(tb.id)))
        .await
        .unwrap();
    assert!(both.is_empty(), "filters combine with AND");
}

// ---------------------------------------------------------------------------
// Enrollments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_enrollment_returns_none(pool: PgPool) {
    let jane = ClientRepo::create(&pool, &new_client("Jane", "Doe")).await.unwrap();
    let tb = ProgramRepo::create(&pool, &new_program("TB", ProgramStatus::Active))
        .await
        .unwrap();

    let first = EnrollmentRepo::create(&pool, &new_enrollment(jane.id, tb.id))
        .await
        .unwrap();
    assert!(first.is_some());
    assert!(EnrollmentRepo::exists_for_pair(&pool, jane.id, tb.id).await.unwrap());

    let second = EnrollmentRepo::create(&pool, &new_enrollment(jane.id, tb.id))
        .await
        .unwrap();
    assert!(second.is_none());
    assert_eq!(EnrollmentRepo::count_for_program(&pool, tb.id).await.unwrap(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_raw_duplicate_insert_violates_unique_constraint(pool: PgPool) {
    let jane = ClientRepo::create(&pool, &new_client("Jane", "Doe")).await.unwrap();
    let tb = ProgramRepo::create(&pool, &new_program("TB", ProgramStatus::Active))
        .await
        .unwrap();
    EnrollmentRepo::create(&pool, &new_enrollment(jane.id, tb.id))
        .await
        .unwrap();

    let err = sqlx::query("INSERT INTO client_programs (client_id, program_id) VALUES ($1, $2)")
        .bind(jane.id)
        .bind(tb.id)
        .execute(&pool)
        .await
        .unwrap_err();
    let db_err = err.as_database_error().expect("database error");
    assert_eq!(db_err.code().as_deref(), Some("23505"));
    assert_eq!(db_err.constraint(), Some(UNIQUE_PAIR_CONSTRAINT));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_enrollment_requires_existing_rows(pool: PgPool) {
    let err = EnrollmentRepo::create(&pool, &new_enrollment(DbId::new_v4(), DbId::new_v4()))
        .await
        .unwrap_err();
    let db_err = err.as_database_error().expect("database error");
    assert_eq!(db_err.code().as_deref(), Some("23503"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_programs_for_client_match_enrollments(pool: PgPool) {
    let jane = ClientRepo::create(&pool, &new_client("Jane", "Doe")).await.unwrap();
    let tb = ProgramRepo::create(&pool, &new_program("TB", ProgramStatus::Active))
        .await
        .unwrap();
    let hiv = ProgramRepo::create(&pool, &new_program("HIV", ProgramStatus::Inactive))
        .await
        .unwrap();
    EnrollmentRepo::create(&pool, &new_enrollment(jane.id, tb.id))
        .await
        .unwrap();
    EnrollmentRepo::create(&pool, &new_enrollment(jane.id, hiv.id))
        .await
        .unwrap();

    let programs = EnrollmentRepo::list_programs_for_client(&pool, jane.id)
        .await
        .unwrap();
    let enrollments = EnrollmentRepo::list(
        &pool,
        &EnrollmentFilter {
            client_id: Some(jane.id),
            program_id: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(programs.len(), enrollments.len());

    // Most recent enrollment first.
    assert_eq!(programs[0].id, hiv.id);
    assert_eq!(programs[0].status, ProgramStatus::Inactive);
    assert_eq!(programs[1].id, tb.id);
    assert!(programs.iter().all(|p| p.notes.is_empty()));
}

// ---------------------------------------------------------------------------
// Counts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_counts(pool: PgPool) {
    let jane = ClientRepo::create(&pool, &new_client("Jane", "Doe")).await.unwrap();
    let tb = ProgramRepo::create(&pool, &new_program("TB", ProgramStatus::Active))
        .await
        .unwrap();
    ProgramRepo::create(&pool, &new_program("Old", ProgramStatus::Inactive))
        .await
        .unwrap();
    EnrollmentRepo::create(&pool, &new_enrollment(jane.id, tb.id))
        .await
        .unwrap();

    assert_eq!(StatsRepo::count_clients(&pool).await.unwrap(), 1);
    assert_eq!(StatsRepo::count_enrollments(&pool).await.unwrap(), 1);
    assert_eq!(
        ProgramRepo::count_with_status(&pool, ProgramStatus::Active).await.unwrap(),
        1
    );
    assert_eq!(ProgramRepo::list(&pool).await.unwrap().len(), 2);
}
