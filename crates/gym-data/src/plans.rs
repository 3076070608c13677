use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

/// Parse errors for the closed value sets of a member record
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown membership type: {0}")]
    UnknownPlan(String),
    #[error("unknown member status: {0}")]
    UnknownStatus(String),
}

/// Subscription duration of a membership. Stored
/// records may carry values outside the known plans,
/// those decode as `Other` and are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    #[default]
    Mensual,
    Trimestral,
    Semestral,
    Anual,
    #[serde(untagged)]
    Other(String),
}

impl PlanType {
    pub const ALL: [PlanType; 4] = [
        PlanType::Mensual,
        PlanType::Trimestral,
        PlanType::Semestral,
        PlanType::Anual,
    ];

    /// Number of calendar months covered by the plan,
    /// none for unknown plans.
    pub fn months(&self) -> Option<u32> {
        match self {
            PlanType::Mensual => Some(1),
            PlanType::Trimestral => Some(3),
            PlanType::Semestral => Some(6),
            PlanType::Anual => Some(12),
            PlanType::Other(_) => None,
        }
    }

    /// Wire name as used by the backend
    pub fn as_str(&self) -> &str {
        match self {
            PlanType::Mensual => "mensual",
            PlanType::Trimestral => "trimestral",
            PlanType::Semestral => "semestral",
            PlanType::Anual => "anual",
            PlanType::Other(value) => value,
        }
    }

    /// Human readable label. Unknown plans show their
    /// stored value.
    pub fn label(&self) -> &str {
        match self {
            PlanType::Mensual => "Mensual",
            PlanType::Trimestral => "Trimestral",
            PlanType::Semestral => "Semestral",
            PlanType::Anual => "Anual",
            PlanType::Other(value) => value,
        }
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for PlanType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        PlanType::ALL
            .into_iter()
            .find(|plan| plan.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::UnknownPlan(s.to_string()))
    }
}

/// Membership state of a member
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Activo,
    Inactivo,
    Suspendido,
    #[serde(untagged)]
    Other(String),
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Activo, Status::Inactivo, Status::Suspendido];

    pub fn as_str(&self) -> &str {
        match self {
            Status::Activo => "activo",
            Status::Inactivo => "inactivo",
            Status::Suspendido => "suspendido",
            Status::Other(value) => value,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Status::Activo => "Activo",
            Status::Inactivo => "Inactivo",
            Status::Suspendido => "Suspendido",
            Status::Other(value) => value,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Status {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Status::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::UnknownStatus(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_from_str() {
        assert_eq!("mensual".parse::<PlanType>().unwrap(), PlanType::Mensual);
        assert_eq!(" Anual ".parse::<PlanType>().unwrap(), PlanType::Anual);
        assert_eq!(
            "semanal".parse::<PlanType>(),
            Err(ParseError::UnknownPlan("semanal".to_string()))
        );
    }

    #[test]
    fn test_plan_months() {
        let months: Vec<u32> = PlanType::ALL.iter().filter_map(|p| p.months()).collect();
        assert_eq!(months, vec![1, 3, 6, 12]);
        assert_eq!(PlanType::Other("semanal".to_string()).months(), None);
    }

    #[test]
    fn test_plan_wire_name() {
        let json = serde_json::to_string(&PlanType::Trimestral).unwrap();
        assert_eq!(json, "\"trimestral\"");
        let plan: PlanType = serde_json::from_str("\"semestral\"").unwrap();
        assert_eq!(plan, PlanType::Semestral);
    }

    #[test]
    fn test_unknown_wire_values_are_kept() {
        let plan: PlanType = serde_json::from_str("\"Mensual Plus\"").unwrap();
        assert_eq!(plan, PlanType::Other("Mensual Plus".to_string()));
        assert_eq!(plan.label(), "Mensual Plus");
        assert_eq!(serde_json::to_string(&plan).unwrap(), "\"Mensual Plus\"");

        let status: Status = serde_json::from_str("\"moroso\"").unwrap();
        assert_eq!(status, Status::Other("moroso".to_string()));
        assert_eq!(status.to_string(), "moroso");

        // Parsing user input stays strict
        assert!("Mensual Plus".parse::<PlanType>().is_err());
        assert!("moroso".parse::<Status>().is_err());
    }

    #[test]
    fn test_status_default_and_labels() {
        assert_eq!(Status::default(), Status::Activo);
        assert_eq!(Status::Suspendido.to_string(), "Suspendido");
        assert_eq!("INACTIVO".parse::<Status>().unwrap(), Status::Inactivo);
        assert!("borrado".parse::<Status>().is_err());
    }
}
