use rusqlite::{params, OptionalExtension, Row};

use crate::core::persistence::db::DbPool;
use crate::core::persistence::query::{ListRequest, Page};
use crate::errors::AppError;

use super::department_entity::{DepartmentEntity, NewDepartment};

const COLUMNS: &str = "id, name, description, location";

#[derive(Clone)]
pub struct DepartmentRepository {
    pool: DbPool,
}

impl DepartmentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn create(&self, data: &NewDepartment) -> Result<DepartmentEntity, AppError> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO departments (name, description, location) VALUES (?1, ?2, ?3)",
            params![data.name, data.description, data.location],
        )?;
        let id = conn.last_insert_rowid();

        Ok(DepartmentEntity {
            id,
            name: data.name.clone(),
            description: data.description.clone(),
            location: data.location.clone(),
        })
    }

    pub fn list(&self, req: &ListRequest) -> Result<Page<DepartmentEntity>, AppError> {
        let conn = self.pool.get()?;
        req.fetch_page(&conn, "departments", COLUMNS, map_row)
    }

    pub fn find(&self, id: i64) -> Result<Option<DepartmentEntity>, AppError> {
        let conn = self.pool.get()?;
        let department = conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM departments WHERE id = ?1"),
                params![id],
                map_row,
            )
            .optional()?;
        Ok(department)
    }

    /// Returns `false` when no row has this id.
    pub fn update(&self, id: i64, data: &NewDepartment) -> Result<bool, AppError> {
        let conn = self.pool.get()?;
        let changed = conn.execute(
            "UPDATE departments SET name = ?1, description = ?2, location = ?3 WHERE id = ?4",
            params![data.name, data.description, data.location, id],
        )?;
        Ok(changed > 0)
    }

    pub fn delete(&self, id: i64) -> Result<bool, AppError> {
        let conn = self.pool.get()?;
        let changed = conn.execute("DELETE FROM departments WHERE id = ?1", params![id])?;
        Ok(changed > 0)
    }
}

fn map_row(row: &Row<'_>) -> rusqlite::Result<DepartmentEntity> {
    Ok(DepartmentEntity {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        location: row.get(3)?,
    })
}
