//! Users table: provisioning and email lookup.

use rusqlite::{params, Connection, OptionalExtension, Result};

use crate::domain::User;

/// Look up a user id through the email index. First match wins.
pub fn find_user_id_by_email(conn: &Connection, email: &str) -> Result<Option<String>> {
    conn.query_row(
        "SELECT id FROM users WHERE email = ?1 ORDER BY created_at LIMIT 1",
        params![email],
        |row| row.get(0),
    )
    .optional()
}

/// Insert the user unless one with the same email already exists.
///
/// Returns true when a new row was written.
pub fn insert_user_if_absent(conn: &Connection, user: &User) -> Result<bool> {
    let inserted = conn.execute(
        r#"
        INSERT INTO users (id, email, name, created_at, provider)
        VALUES (?1, ?2, ?3, ?4, ?5)
        ON CONFLICT(email) DO NOTHING
        "#,
        params![
            user.id,
            user.email,
            user.name,
            user.created_at.to_rfc3339(),
            user.provider,
        ],
    )?;
    Ok(inserted > 0)
}
