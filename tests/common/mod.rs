//! Helpers para tests contra PostgreSQL
//!
//! Cada test crea su propio schema temporal con las tablas `vehicles` y
//! `drivers` y lo borra al terminar. Sin `DATABASE_URL` los tests se saltan.

#![allow(dead_code)]

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};

const SCHEMA_SQL: &str = include_str!("../fixtures/schema.sql");

pub struct TestDb {
    pub pool: PgPool,
    admin: PgPool,
    schema: String,
}

impl TestDb {
    /// Crea un schema aislado; `None` si no hay base de datos disponible
    pub async fn setup() -> Option<Self> {
        let url = match std::env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                println!("⚠️ Skipping test: DATABASE_URL not set");
                return None;
            }
        };

        let admin = PgPoolOptions::new()
            .max_connections(1)
            .connect(&url)
            .await
            .expect("connect to DATABASE_URL");

        let schema = format!("driver_test_{}", uuid::Uuid::new_v4().simple());
        sqlx::query(&format!("CREATE SCHEMA {}", schema))
            .execute(&admin)
            .await
            .expect("create test schema");

        let options: PgConnectOptions = url.parse().expect("parse DATABASE_URL");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_with(options.options([("search_path", schema.as_str())]))
            .await
            .expect("connect test pool");

        for statement in SCHEMA_SQL.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            sqlx::query(statement)
                .execute(&pool)
                .await
                .expect("create test tables");
        }

        Some(Self { pool, admin, schema })
    }

    pub async fn seed_vehicle(&self, vehicle_type: &str, vendor: &str, model: &str) -> i64 {
        let row: (i64,) = sqlx::query_as(
            "INSERT INTO vehicles (type, vendor, model) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(vehicle_type)
        .bind(vendor)
        .bind(model)
        .fetch_one(&self.pool)
        .await
        .expect("seed vehicle");
        row.0
    }

    pub async fn driver_rows(&self) -> i64 {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM drivers")
            .fetch_one(&self.pool)
            .await
            .expect("count drivers");
        row.0
    }

    pub async fn teardown(self) {
        self.pool.close().await;
        sqlx::query(&format!("DROP SCHEMA {} CASCADE", self.schema))
            .execute(&self.admin)
            .await
            .expect("drop test schema");
        self.admin.close().await;
    }
}
