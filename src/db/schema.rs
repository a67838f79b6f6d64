//! Database schema and migrations for the mail relay.
//!
//! Migrations are applied sequentially when the database is first opened
//! or upgraded.

/// Database migrations.
///
/// Each migration is a SQL script that will be executed in order.
/// The schema_version table tracks which migrations have been applied.
pub const MIGRATIONS: &[&str] = &[
    // v1: Registered applications
    r#"
CREATE TABLE applications (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    api_key     TEXT NOT NULL UNIQUE,
    name        TEXT NOT NULL,           -- not unique, secondary lookup key
    created_at  TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX idx_applications_name ON applications(name);
"#,
];
