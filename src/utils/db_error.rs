//! Helpers for classifying PostgreSQL constraint violations.

/// Returns the violated constraint name if `e` is a unique violation.
pub fn unique_violation(e: &sqlx::Error) -> Option<String> {
    let db_err = e.as_database_error()?;

    if !db_err.is_unique_violation() {
        return None;
    }

    Some(db_err.constraint().unwrap_or("unknown").to_string())
}

/// Returns the violated constraint name if `e` is a foreign key violation.
pub fn foreign_key_violation(e: &sqlx::Error) -> Option<String> {
    let db_err = e.as_database_error()?;

    if !db_err.is_foreign_key_violation() {
        return None;
    }

    Some(db_err.constraint().unwrap_or("unknown").to_string())
}

/// Returns `true` if `e` is a numeric overflow (SQLSTATE `22003`).
pub fn numeric_out_of_range(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .and_then(|db_err| db_err.code())
        .is_some_and(|code| code == "22003")
}
