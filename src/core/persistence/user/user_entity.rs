use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEntity {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}
