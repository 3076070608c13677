use anyhow::Result;
use inquire::Confirm;

mod members;
pub use members::*;

mod expiration;
pub use expiration::*;

/// Ask for confirmation unless the user already agreed.
pub fn confirm(message: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    let ok = Confirm::new(message).with_default(true).prompt()?;
    Ok(ok)
}
