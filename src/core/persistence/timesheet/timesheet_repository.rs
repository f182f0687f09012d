use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::core::persistence::db::DbPool;
use crate::core::persistence::employee::employee_repository;
use crate::core::persistence::project::project_entity::ProjectEntity;
use crate::core::persistence::query::{ListRequest, Page};
use crate::errors::AppError;

use super::timesheet_entity::{NewTimesheet, TimesheetDetails, TimesheetEntity};

const COLUMNS: &str = "id, employee_id, project_id, date, hours_worked, description";

#[derive(Clone)]
pub struct TimesheetRepository {
    pool: DbPool,
}

impl TimesheetRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn create(&self, data: &NewTimesheet) -> Result<TimesheetEntity, AppError> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO timesheets (employee_id, project_id, date, hours_worked, description)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                data.employee_id,
                data.project_id,
                data.date,
                data.hours_worked,
                data.description
            ],
        )?;
        let id = conn.last_insert_rowid();

        Ok(TimesheetEntity {
            id,
            employee_id: data.employee_id,
            project_id: data.project_id,
            date: data.date,
            hours_worked: data.hours_worked,
            description: data.description.clone(),
        })
    }

    pub fn list(&self, req: &ListRequest) -> Result<Page<TimesheetDetails>, AppError> {
        let conn = self.pool.get()?;
        let page = req.fetch_page(&conn, "timesheets", COLUMNS, map_row)?;

        let mut items = Vec::with_capacity(page.items.len());
        for timesheet in page.items {
            items.push(hydrate(&conn, timesheet)?);
        }

        Ok(Page {
            items,
            total: page.total,
            page: page.page,
            page_size: page.page_size,
        })
    }

    pub fn find(&self, id: i64) -> Result<Option<TimesheetDetails>, AppError> {
        let conn = self.pool.get()?;
        let timesheet = conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM timesheets WHERE id = ?1"),
                params![id],
                map_row,
            )
            .optional()?;

        match timesheet {
            Some(t) => Ok(Some(hydrate(&conn, t)?)),
            None => Ok(None),
        }
    }

    /// Returns `false` when no row has this id.
    pub fn update(&self, id: i64, data: &NewTimesheet) -> Result<bool, AppError> {
        let conn = self.pool.get()?;
        let changed = conn.execute(
            "UPDATE timesheets SET employee_id = ?1, project_id = ?2, date = ?3,
                 hours_worked = ?4, description = ?5
             WHERE id = ?6",
            params![
                data.employee_id,
                data.project_id,
                data.date,
                data.hours_worked,
                data.description,
                id
            ],
        )?;
        Ok(changed > 0)
    }

    pub fn delete(&self, id: i64) -> Result<bool, AppError> {
        let conn = self.pool.get()?;
        let changed = conn.execute("DELETE FROM timesheets WHERE id = ?1", params![id])?;
        Ok(changed > 0)
    }
}

fn hydrate(conn: &Connection, timesheet: TimesheetEntity) -> Result<TimesheetDetails, AppError> {
    let employee = conn.query_row(
        "SELECT id, first_name, last_name, email, phone_number,
                date_of_joining, position, salary, department_id
         FROM employees WHERE id = ?1",
        params![timesheet.employee_id],
        employee_repository::map_row,
    )?;

    let project = conn.query_row(
        "SELECT id, name, description, start_date, end_date, department_id
         FROM projects WHERE id = ?1",
        params![timesheet.project_id],
        |row| {
            Ok(ProjectEntity {
                id: row.get(0)?,
                name: row.get(1)?,
                description: row.get(2)?,
                start_date: row.get(3)?,
                end_date: row.get(4)?,
                department_id: row.get(5)?,
            })
        },
    )?;

    Ok(TimesheetDetails {
        timesheet,
        employee,
        project,
    })
}

fn map_row(row: &Row<'_>) -> rusqlite::Result<TimesheetEntity> {
    Ok(TimesheetEntity {
        id: row.get(0)?,
        employee_id: row.get(1)?,
        project_id: row.get(2)?,
        date: row.get(3)?,
        hours_worked: row.get(4)?,
        description: row.get(5)?,
    })
}
