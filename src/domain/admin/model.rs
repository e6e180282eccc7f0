/// Administrator principal, authenticated by email + password
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Admin {
    pub id: i32,
    pub email: String,
    /// bcrypt hash; the plaintext password is never stored
    pub password_hash: String,
}

#[derive(Debug, Clone)]
pub struct CreateAdminDto {
    pub email: String,
    pub password_hash: String,
}
