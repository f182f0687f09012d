use rusqlite::{params, OptionalExtension};

use crate::core::persistence::db::DbPool;
use crate::errors::AppError;

use super::user_entity::UserEntity;

#[derive(Clone)]
pub struct UserRepository {
    pool: DbPool,
}

impl UserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn create(&self, email: &str, password: &str) -> Result<UserEntity, AppError> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO users (email, password) VALUES (?1, ?2)",
            params![email, password],
        )?;

        Ok(UserEntity {
            id: conn.last_insert_rowid(),
            email: email.to_string(),
            password: password.to_string(),
        })
    }

    pub fn find_by_email(&self, email: &str) -> Result<Option<UserEntity>, AppError> {
        let conn = self.pool.get()?;
        let user = conn
            .query_row(
                "SELECT id, email, password FROM users WHERE email = ?1",
                params![email],
                |row| {
                    Ok(UserEntity {
                        id: row.get(0)?,
                        email: row.get(1)?,
                        password: row.get(2)?,
                    })
                },
            )
            .optional()?;

        Ok(user)
    }
}
