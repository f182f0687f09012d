use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::core::persistence::db::DbPool;
use crate::core::persistence::department::department_entity::DepartmentEntity;
use crate::core::persistence::employee::employee_entity::EmployeeEntity;
use crate::core::persistence::employee::employee_repository;
use crate::core::persistence::query::{ListRequest, Page};
use crate::errors::AppError;

use super::project_entity::{NewProject, ProjectDetails, ProjectEntity};

const COLUMNS: &str = "id, name, description, start_date, end_date, department_id";

#[derive(Clone)]
pub struct ProjectRepository {
    pool: DbPool,
}

impl ProjectRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn create(
        &self,
        data: &NewProject,
        employee_ids: &[i64],
    ) -> Result<ProjectEntity, AppError> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        verify_employees_exist(&tx, employee_ids)?;

        tx.execute(
            "INSERT INTO projects (name, description, start_date, end_date, department_id)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                data.name,
                data.description,
                data.start_date,
                data.end_date,
                data.department_id
            ],
        )?;
        let id = tx.last_insert_rowid();

        insert_assignments(&tx, id, employee_ids)?;
        tx.commit()?;

        Ok(ProjectEntity {
            id,
            name: data.name.clone(),
            description: data.description.clone(),
            start_date: data.start_date,
            end_date: data.end_date,
            department_id: data.department_id,
        })
    }

    pub fn list(&self, req: &ListRequest) -> Result<Page<ProjectDetails>, AppError> {
        let conn = self.pool.get()?;
        let page = req.fetch_page(&conn, "projects", COLUMNS, map_row)?;

        let mut items = Vec::with_capacity(page.items.len());
        for project in page.items {
            items.push(hydrate(&conn, project)?);
        }

        Ok(Page {
            items,
            total: page.total,
            page: page.page,
            page_size: page.page_size,
        })
    }

    pub fn find(&self, id: i64) -> Result<Option<ProjectDetails>, AppError> {
        let conn = self.pool.get()?;
        let project = conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM projects WHERE id = ?1"),
                params![id],
                map_row,
            )
            .optional()?;

        match project {
            Some(p) => Ok(Some(hydrate(&conn, p)?)),
            None => Ok(None),
        }
    }

    /// Full-row update that also replaces the employee assignments.
    /// Returns `false` when no row has this id.
    pub fn update(
        &self,
        id: i64,
        data: &NewProject,
        employee_ids: &[i64],
    ) -> Result<bool, AppError> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        let changed = tx.execute(
            "UPDATE projects SET name = ?1, description = ?2, start_date = ?3,
                 end_date = ?4, department_id = ?5
             WHERE id = ?6",
            params![
                data.name,
                data.description,
                data.start_date,
                data.end_date,
                data.department_id,
                id
            ],
        )?;
        if changed == 0 {
            return Ok(false);
        }

        verify_employees_exist(&tx, employee_ids)?;

        // Drop the current associations and rebuild from the request.
        tx.execute(
            "DELETE FROM employee_projects WHERE project_id = ?1",
            params![id],
        )?;
        insert_assignments(&tx, id, employee_ids)?;
        tx.commit()?;

        Ok(true)
    }

    pub fn delete(&self, id: i64) -> Result<bool, AppError> {
        let conn = self.pool.get()?;
        let changed = conn.execute("DELETE FROM projects WHERE id = ?1", params![id])?;
        Ok(changed > 0)
    }
}

fn verify_employees_exist(conn: &Connection, employee_ids: &[i64]) -> Result<(), AppError> {
    if employee_ids.is_empty() {
        return Ok(());
    }

    let placeholders = vec!["?"; employee_ids.len()].join(", ");
    let sql = format!(
        "SELECT COUNT(DISTINCT id) FROM employees WHERE id IN ({placeholders})"
    );
    let found: i64 = conn.query_row(
        &sql,
        rusqlite::params_from_iter(employee_ids.iter()),
        |row| row.get(0),
    )?;

    let mut distinct = employee_ids.to_vec();
    distinct.sort_unstable();
    distinct.dedup();

    if found != distinct.len() as i64 {
        return Err(AppError::Validation(
            "One or more employee IDs do not exist".to_string(),
        ));
    }
    Ok(())
}

fn insert_assignments(
    conn: &Connection,
    project_id: i64,
    employee_ids: &[i64],
) -> Result<(), AppError> {
    let mut stmt = conn.prepare(
        "INSERT OR IGNORE INTO employee_projects (employee_id, project_id) VALUES (?1, ?2)",
    )?;
    for employee_id in employee_ids {
        stmt.execute(params![employee_id, project_id])?;
    }
    Ok(())
}

fn hydrate(conn: &Connection, project: ProjectEntity) -> Result<ProjectDetails, AppError> {
    let department = conn.query_row(
        "SELECT id, name, description, location FROM departments WHERE id = ?1",
        params![project.department_id],
        |row| {
            Ok(DepartmentEntity {
                id: row.get(0)?,
                name: row.get(1)?,
                description: row.get(2)?,
                location: row.get(3)?,
            })
        },
    )?;

    let mut stmt = conn.prepare(
        "SELECT e.id, e.first_name, e.last_name, e.email, e.phone_number,
                e.date_of_joining, e.position, e.salary, e.department_id
         FROM employees e
         JOIN employee_projects ep ON ep.employee_id = e.id
         WHERE ep.project_id = ?1
         ORDER BY e.id",
    )?;
    let employees = stmt
        .query_map(params![project.id], employee_repository::map_row)?
        .collect::<rusqlite::Result<Vec<EmployeeEntity>>>()?;

    Ok(ProjectDetails {
        project,
        department,
        employees,
    })
}

fn map_row(row: &Row<'_>) -> rusqlite::Result<ProjectEntity> {
    Ok(ProjectEntity {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        start_date: row.get(3)?,
        end_date: row.get(4)?,
        department_id: row.get(5)?,
    })
}
