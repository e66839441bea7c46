//! Value Object Module

pub mod age;
pub mod email;
pub mod profile;
pub mod user_id;
pub mod user_name;
pub mod user_password;
pub mod user_role;
