
use clap::{Parser, Subcommand};

use crate::commands::{
    AddMember,
    UpdateMember,
    DeleteMember,
    ListMembers,
    ShowMember,
    CalculateExpiration,
};

#[derive(Parser, Debug)]
#[clap(name = "gym", version=env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Base url of the roster api
    #[clap(long, env = "GYM_API_URL", default_value = "http://127.0.0.1:5000")]
    pub api_url: String,

    /// Request timeout in seconds
    #[clap(long, env = "GYM_API_TIMEOUT", default_value_t = 10)]
    pub timeout: u64,

    /// Log requests
    #[clap(short, long, global = true)]
    pub verbose: bool,

    /// Do not ask for confirmation
    #[clap(short, long, global = true)]
    pub yes: bool,

    #[clap(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn init() -> Self {
        Self::parse()
    }
}


#[derive(Subcommand, Debug)]
pub enum Command {
    /// List or search members
    #[clap(name = "list")]
    List(ListMembers),
    /// Show a member
    #[clap(name = "show")]
    Show(ShowMember),
    /// Register a member
    #[clap(name = "add")]
    Add(AddMember),
    /// Update a member
    #[clap(name = "set")]
    Update(UpdateMember),
    /// Delete a member
    #[clap(name = "delete")]
    Delete(DeleteMember),

    /// Calculate a membership expiration date
    #[clap(name = "expiration")]
    Expiration(CalculateExpiration),
}
