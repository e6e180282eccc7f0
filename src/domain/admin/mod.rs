//! Admin aggregate

pub mod model;
pub mod repository;

pub use model::{Admin, CreateAdminDto};
pub use repository::AdminRepositoryInterface;
