pub mod datetime;
pub mod expiration;
pub mod validation;
