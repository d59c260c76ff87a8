use crate::utils::error::Result;

/// Raw shape of a `users` row, before license labels are joined in.
#[derive(Debug, Clone)]
pub struct ClientRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub national_id: String,
    pub age: i64,
}

/// Row-level access to the relational store. The repository owns one of these
/// and layers validation and uniqueness checks on top; everything here is a
/// single parameterized statement.
pub trait ClientStore {
    fn find_user_id(&self, national_id: &str) -> Result<Option<i64>>;
    fn insert_user(
        &mut self,
        first_name: &str,
        last_name: &str,
        national_id: &str,
        age: i64,
    ) -> Result<i64>;
    fn fetch_user(&self, national_id: &str) -> Result<Option<ClientRow>>;
    fn all_users(&self) -> Result<Vec<ClientRow>>;
    fn delete_user(&mut self, user_id: i64) -> Result<()>;
    fn license_type_id(&self, label: &str) -> Result<Option<i64>>;
    fn attach_license(&mut self, user_id: i64, license_id: i64) -> Result<()>;
    fn licenses_for(&self, user_id: i64) -> Result<Vec<String>>;
}

pub trait ConfigProvider {
    fn db_path(&self) -> &str;
}
