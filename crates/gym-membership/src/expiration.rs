use chrono::{Months, NaiveDate};
use thiserror::Error as ThisError;

use gym_data::{Member, MemberForm, PlanType};

use crate::datetime::{parse_date, DaysUntil};

/// Memberships expiring within this many days are
/// about to lapse.
pub const EXPIRING_SOON_DAYS: i64 = 7;

#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum MembershipError {
    #[error("expiration of a {plan} membership starting {start} is out of range")]
    OutOfRange { start: NaiveDate, plan: PlanType },
    #[error("unknown membership type: {0}")]
    UnknownPlan(PlanType),
}

/// Calculate the expiration date of a membership.
///
/// The plan duration is added in calendar months (a year
/// counts as twelve). When the start day does not exist in
/// the target month, the date is clamped to the last day of
/// that month: 2024-01-31 plus one month is 2024-02-29.
pub fn expiration_date(start: NaiveDate, plan: &PlanType) -> Result<NaiveDate, MembershipError> {
    let months = plan
        .months()
        .ok_or_else(|| MembershipError::UnknownPlan(plan.clone()))?;
    start
        .checked_add_months(Months::new(months))
        .ok_or_else(|| MembershipError::OutOfRange {
            start,
            plan: plan.clone(),
        })
}

/// Derive the expiration date of a form from its start
/// date and membership type.
pub trait FillExpiration {
    /// Returns false and leaves the form untouched when no
    /// calculation could be performed.
    fn fill_expiration(&mut self) -> bool;
}

impl FillExpiration for MemberForm {
    fn fill_expiration(&mut self) -> bool {
        let Ok(start) = parse_date(&self.fecha_inicio) else {
            return false;
        };
        let Ok(plan) = self.tipo_membresia.parse::<PlanType>() else {
            return false;
        };
        match expiration_date(start, &plan) {
            Ok(end) => {
                self.fecha_vencimiento = end.to_string();
                true
            }
            Err(_) => false,
        }
    }
}

/// How close a membership is to lapsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpirationStatus {
    Expired,
    ExpiringSoon,
    Current,
}

impl ExpirationStatus {
    /// Classify an expiration date relative to today.
    pub fn of(end: NaiveDate, today: NaiveDate) -> Self {
        let days = today.days_until(&end);
        if days < 0 {
            ExpirationStatus::Expired
        } else if days <= EXPIRING_SOON_DAYS {
            ExpirationStatus::ExpiringSoon
        } else {
            ExpirationStatus::Current
        }
    }

    /// Single character marker for tabular output
    pub fn marker(&self) -> &'static str {
        match self {
            ExpirationStatus::Expired => "!",
            ExpirationStatus::ExpiringSoon => "~",
            ExpirationStatus::Current => "",
        }
    }
}

pub trait Expiration {
    fn expiration_status(&self, today: NaiveDate) -> ExpirationStatus;
}

impl Expiration for Member {
    fn expiration_status(&self, today: NaiveDate) -> ExpirationStatus {
        ExpirationStatus::of(self.membership_end, today)
    }
}
