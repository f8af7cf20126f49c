// Copyright 2025 Alexandre D. Díaz
use rusqlite::{params, Result, ToSql};
use serde::{Deserialize, Serialize};

use crate::models::{individual, Connection};

pub static TABLE_NAME: &str = "users";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Model {
    pub id: i64,
    pub email: String,
    pub hashed_password: String,
    pub is_active: bool,
}

pub fn create_table(conn: &Connection) -> Result<usize, rusqlite::Error> {
    conn.execute(
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
            id integer primary key,
            email text not null,
            hashed_password text not null,
            is_active boolean not null default 1
        )",
            &TABLE_NAME
        )
        .as_str(),
        params![],
    )?;
    conn.execute(
        format!(
            "CREATE UNIQUE INDEX IF NOT EXISTS ix_users_email ON {}(email)",
            &TABLE_NAME
        )
        .as_str(),
        params![],
    )
}

fn query(
    conn: &Connection,
    extra_sql: &str,
    params: &[&dyn ToSql],
) -> Result<Vec<Model>, rusqlite::Error> {
    let sql: String = format!(
        "SELECT usr.id, usr.email, usr.hashed_password, usr.is_active \
    FROM {} as usr \
    {}",
        &TABLE_NAME, &extra_sql
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params, |row| {
        Ok(Model {
            id: row.get(0)?,
            email: row.get(1)?,
            hashed_password: row.get(2)?,
            is_active: row.get(3)?,
        })
    })?;
    rows.collect::<Result<Vec<Model>, rusqlite::Error>>()
}

pub fn get_by_id(conn: &Connection, user_id: &i64) -> Result<Option<Model>, rusqlite::Error> {
    let users = query(conn, "WHERE usr.id = ?1 LIMIT 1", params![&user_id])?;
    Ok(users.into_iter().next())
}

pub fn get_by_email(conn: &Connection, email: &str) -> Result<Option<Model>, rusqlite::Error> {
    let users = query(conn, "WHERE usr.email = ?1 LIMIT 1", params![&email])?;
    Ok(users.into_iter().next())
}

/// Inserts a new active user. The password must already be hashed.
pub fn add(conn: &Connection, email: &str, hashed_password: &str) -> Result<Model, rusqlite::Error> {
    conn.execute(
        format!(
            "INSERT INTO {}(email, hashed_password, is_active) VALUES (?1, ?2, 1)",
            &TABLE_NAME
        )
        .as_str(),
        params![&email, &hashed_password],
    )?;
    Ok(Model {
        id: conn.last_insert_rowid(),
        email: email.to_string(),
        hashed_password: hashed_password.to_string(),
        is_active: true,
    })
}

/// Individuals owned by the user.
pub fn get_individuals(
    conn: &Connection,
    user_id: &i64,
) -> Result<Vec<individual::Model>, rusqlite::Error> {
    individual::get_by_user_id(conn, user_id)
}
