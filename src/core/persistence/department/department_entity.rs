use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentEntity {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
}

/// Column values for an insert or full-row update.
#[derive(Debug, Clone)]
pub struct NewDepartment {
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
}
