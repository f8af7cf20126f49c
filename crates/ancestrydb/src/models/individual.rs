// Copyright 2025 Alexandre D. Díaz
use rusqlite::{params, Result, ToSql};
use serde::{Deserialize, Serialize};

use crate::models::{user, Connection};

pub static TABLE_NAME: &str = "individuals";

/// A person as read from a family tree. Dates stay as free text because
/// genealogy sources use irregular formats ("ABT 1850", "BET 1900 AND 1910").
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Model {
    pub id: i64,
    pub gedcom_id: Option<String>,
    pub name: String,
    pub sex: Option<String>,
    pub birth_date: Option<String>,
    pub birth_place: Option<String>,
    pub death_date: Option<String>,
    pub death_place: Option<String>,
    /// Owner as (user id, email)
    pub user_id: Option<(i64, String)>,
}

#[derive(Debug, Default, Clone)]
pub struct NewIndividual<'a> {
    pub gedcom_id: Option<&'a str>,
    pub name: &'a str,
    pub sex: Option<&'a str>,
    pub birth_date: Option<&'a str>,
    pub birth_place: Option<&'a str>,
    pub death_date: Option<&'a str>,
    pub death_place: Option<&'a str>,
    pub user_id: Option<i64>,
}

pub fn create_table(conn: &Connection) -> Result<usize, rusqlite::Error> {
    conn.execute(
        format!(
            "CREATE TABLE IF NOT EXISTS {0} (
            id integer primary key,
            gedcom_id text,
            name text not null,
            sex text,
            birth_date text,
            birth_place text,
            death_date text,
            death_place text,
            user_id integer,
            CONSTRAINT fk_owner
                FOREIGN KEY (user_id)
                REFERENCES {1}(id)
        )",
            &TABLE_NAME,
            &user::TABLE_NAME
        )
        .as_str(),
        params![],
    )?;
    conn.execute(
        format!(
            "CREATE INDEX IF NOT EXISTS ix_individuals_gedcom_id ON {}(gedcom_id)",
            &TABLE_NAME
        )
        .as_str(),
        params![],
    )?;
    conn.execute(
        format!(
            "CREATE INDEX IF NOT EXISTS ix_individuals_name ON {}(name)",
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
        "SELECT ind.id, ind.gedcom_id, ind.name, ind.sex, \
    ind.birth_date, ind.birth_place, ind.death_date, ind.death_place, \
    ind.user_id, usr.email \
    FROM {} as ind \
    LEFT JOIN {} as usr \
    ON usr.id = ind.user_id \
    {}",
        &TABLE_NAME,
        &user::TABLE_NAME,
        &extra_sql
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params, |row| {
        let owner_id: Option<i64> = row.get(8)?;
        let owner_email: Option<String> = row.get(9)?;
        Ok(Model {
            id: row.get(0)?,
            gedcom_id: row.get(1)?,
            name: row.get(2)?,
            sex: row.get(3)?,
            birth_date: row.get(4)?,
            birth_place: row.get(5)?,
            death_date: row.get(6)?,
            death_place: row.get(7)?,
            user_id: owner_id.zip(owner_email),
        })
    })?;
    rows.collect::<Result<Vec<Model>, rusqlite::Error>>()
}

pub fn get_by_id(conn: &Connection, individual_id: &i64) -> Result<Option<Model>, rusqlite::Error> {
    let individuals = query(conn, "WHERE ind.id = ?1 LIMIT 1", params![&individual_id])?;
    Ok(individuals.into_iter().next())
}

pub fn get_by_user_id(conn: &Connection, user_id: &i64) -> Result<Vec<Model>, rusqlite::Error> {
    query(conn, "WHERE ind.user_id = ?1 ORDER BY ind.id", params![&user_id])
}

/// Inserts an individual. `user_id` may be `None`; when set it must point
/// to an existing user or the foreign key rejects the row.
pub fn add(conn: &Connection, new: &NewIndividual) -> Result<Model, rusqlite::Error> {
    conn.execute(
        format!(
            "INSERT INTO {}(gedcom_id, name, sex, birth_date, birth_place, \
            death_date, death_place, user_id) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            &TABLE_NAME
        )
        .as_str(),
        params![
            &new.gedcom_id,
            &new.name,
            &new.sex,
            &new.birth_date,
            &new.birth_place,
            &new.death_date,
            &new.death_place,
            &new.user_id,
        ],
    )?;
    let last_id = conn.last_insert_rowid();
    get_by_id(conn, &last_id)?.ok_or(rusqlite::Error::QueryReturnedNoRows)
}
