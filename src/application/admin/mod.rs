//! Admin module — admin registration, login and user/key management

pub mod service;

pub use service::AdminService;
