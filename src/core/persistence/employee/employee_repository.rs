use rusqlite::{params, OptionalExtension, Row};

use crate::core::persistence::db::DbPool;
use crate::core::persistence::query::{ListRequest, Page};
use crate::errors::AppError;

use super::employee_entity::{EmployeeEntity, NewEmployee};

const COLUMNS: &str = "id, first_name, last_name, email, phone_number, \
                       date_of_joining, position, salary, department_id";

#[derive(Clone)]
pub struct EmployeeRepository {
    pool: DbPool,
}

impl EmployeeRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn create(&self, data: &NewEmployee) -> Result<EmployeeEntity, AppError> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO employees (first_name, last_name, email, phone_number,
                 date_of_joining, position, salary, department_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                data.first_name,
                data.last_name,
                data.email,
                data.phone_number,
                data.date_of_joining,
                data.position,
                data.salary,
                data.department_id
            ],
        )?;
        let id = conn.last_insert_rowid();

        Ok(entity_from(id, data))
    }

    pub fn list(&self, req: &ListRequest) -> Result<Page<EmployeeEntity>, AppError> {
        let conn = self.pool.get()?;
        req.fetch_page(&conn, "employees", COLUMNS, map_row)
    }

    pub fn find(&self, id: i64) -> Result<Option<EmployeeEntity>, AppError> {
        let conn = self.pool.get()?;
        let employee = conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM employees WHERE id = ?1"),
                params![id],
                map_row,
            )
            .optional()?;
        Ok(employee)
    }

    /// Returns `false` when no row has this id.
    pub fn update(&self, id: i64, data: &NewEmployee) -> Result<bool, AppError> {
        let conn = self.pool.get()?;
        let changed = conn.execute(
            "UPDATE employees SET first_name = ?1, last_name = ?2, email = ?3,
                 phone_number = ?4, date_of_joining = ?5, position = ?6,
                 salary = ?7, department_id = ?8
             WHERE id = ?9",
            params![
                data.first_name,
                data.last_name,
                data.email,
                data.phone_number,
                data.date_of_joining,
                data.position,
                data.salary,
                data.department_id,
                id
            ],
        )?;
        Ok(changed > 0)
    }

    pub fn delete(&self, id: i64) -> Result<bool, AppError> {
        let conn = self.pool.get()?;
        let changed = conn.execute("DELETE FROM employees WHERE id = ?1", params![id])?;
        Ok(changed > 0)
    }
}

fn entity_from(id: i64, data: &NewEmployee) -> EmployeeEntity {
    EmployeeEntity {
        id,
        first_name: data.first_name.clone(),
        last_name: data.last_name.clone(),
        email: data.email.clone(),
        phone_number: data.phone_number.clone(),
        date_of_joining: data.date_of_joining,
        position: data.position.clone(),
        salary: data.salary,
        department_id: data.department_id,
    }
}

pub(crate) fn map_row(row: &Row<'_>) -> rusqlite::Result<EmployeeEntity> {
    Ok(EmployeeEntity {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        email: row.get(3)?,
        phone_number: row.get(4)?,
        date_of_joining: row.get(5)?,
        position: row.get(6)?,
        salary: row.get(7)?,
        department_id: row.get(8)?,
    })
}
