use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct CreateUserDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub registered_on: NaiveDate,
}
