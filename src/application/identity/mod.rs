//! Identity module — end-user self-registration

pub mod service;

pub use service::UserService;
