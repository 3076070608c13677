
pub mod connection;
pub use connection::Connection;

pub mod results;
pub use results::ClientError;

pub mod members;

pub mod store;
pub use store::{RosterStore, SaveError};

#[cfg(test)]
mod testing;
