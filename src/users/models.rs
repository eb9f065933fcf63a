use serde::Serialize;

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub fullname: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub hashed_password: String,
}

/// A user about to be stored; the id is assigned by the repository.
#[derive(Clone, Debug)]
pub struct NewUser {
    pub fullname: String,
    pub email: String,
    pub hashed_password: String,
}
