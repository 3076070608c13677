use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

use gym_data::PlanType;
use gym_membership::{datetime, expiration::expiration_date};

#[derive(Args, Debug)]
pub struct CalculateExpiration {
    /// First day of the membership
    #[clap(short, long, default_value_t=datetime::today())]
    pub start: NaiveDate,
    /// One of mensual, trimestral, semestral, anual
    #[clap(short, long)]
    pub plan: PlanType,
}

impl CalculateExpiration {
    /// Print the expiration date for a plan
    pub fn run(self) -> Result<()> {
        let end = expiration_date(self.start, &self.plan)?;
        println!("{} membership from {} expires {}", self.plan, self.start, end);
        Ok(())
    }
}
