use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::{PlanType, Status};

/// Members can be searched by a substring of their
/// first name, last name, dni or email.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MemberFilter {
    pub search: Option<String>,
}

impl MemberFilter {
    /// Create a filter from a search term.
    pub fn search(term: &str) -> Self {
        Self {
            search: Some(term.to_string()),
        }
    }

    /// The effective search term. Blank terms select
    /// the full roster.
    pub fn term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Member {
    #[serde(default)]
    pub id: u32,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    pub dni: String,
    pub email: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "fecha_nacimiento")]
    pub birth_date: NaiveDate,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "tipo_membresia")]
    pub plan: PlanType,
    #[serde(rename = "fecha_inicio")]
    pub membership_start: NaiveDate,
    #[serde(rename = "fecha_vencimiento")]
    pub membership_end: NaiveDate,
    #[serde(rename = "estado", default)]
    pub status: Status,
    #[serde(
        rename = "fecha_registro",
        default,
        with = "registered_at",
        skip_serializing_if = "Option::is_none"
    )]
    pub registered_at: Option<NaiveDateTime>,
}

impl Member {
    /// Full name for display
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Compare the editable data of two records, ignoring
    /// the id and server generated timestamps.
    pub fn same_data(&self, other: &Member) -> bool {
        let strip = |m: &Member| Member {
            id: 0,
            registered_at: None,
            ..m.clone()
        };
        strip(self) == strip(other)
    }
}

/// The backend reports the registration time as
/// `YYYY-MM-DD HH:MM:SS` without timezone.
mod registered_at {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_str(&ts.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<String> = Option::deserialize(deserializer)?;
        value
            .map(|s| NaiveDateTime::parse_from_str(&s, FORMAT))
            .transpose()
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn member_json() -> serde_json::Value {
        json!({
            "id": 7,
            "nombre": "Ana",
            "apellido": "Pérez",
            "dni": "12345678",
            "email": "ana@gym.test",
            "telefono": "555-0101",
            "fecha_nacimiento": "1990-05-04",
            "direccion": "Calle 1",
            "tipo_membresia": "trimestral",
            "fecha_inicio": "2024-01-10",
            "fecha_vencimiento": "2024-04-10",
            "estado": "suspendido",
            "fecha_registro": "2024-01-10 09:15:00"
        })
    }

    #[test]
    fn test_member_from_backend_json() {
        let member: Member = serde_json::from_value(member_json()).unwrap();
        assert_eq!(member.id, 7);
        assert_eq!(member.full_name(), "Ana Pérez");
        assert_eq!(member.plan, PlanType::Trimestral);
        assert_eq!(member.status, Status::Suspendido);
        assert_eq!(
            member.membership_end,
            NaiveDate::from_ymd_opt(2024, 4, 10).unwrap()
        );
        assert_eq!(
            member.registered_at.unwrap().to_string(),
            "2024-01-10 09:15:00"
        );
    }

    #[test]
    fn test_member_status_defaults_to_active() {
        let mut value = member_json();
        let obj = value.as_object_mut().unwrap();
        obj.remove("estado");
        obj.remove("fecha_registro");
        let member: Member = serde_json::from_value(value).unwrap();
        assert_eq!(member.status, Status::Activo);
        assert_eq!(member.registered_at, None);
    }

    #[test]
    fn test_member_with_unknown_plan_and_status() {
        let mut value = member_json();
        value["tipo_membresia"] = json!("Mensual Plus");
        value["estado"] = json!("moroso");
        let member: Member = serde_json::from_value(value).unwrap();
        assert_eq!(member.plan, PlanType::Other("Mensual Plus".to_string()));
        assert_eq!(member.status, Status::Other("moroso".to_string()));
    }

    #[test]
    fn test_member_serializes_wire_names() {
        let member: Member = serde_json::from_value(member_json()).unwrap();
        let value = serde_json::to_value(&member).unwrap();
        assert_eq!(value, member_json());
    }

    #[test]
    fn test_member_same_data() {
        let a: Member = serde_json::from_value(member_json()).unwrap();
        let mut b = a.clone();
        b.id = 99;
        b.registered_at = None;
        assert!(a.same_data(&b));
        b.phone = "555-0102".to_string();
        assert!(!a.same_data(&b));
    }

    #[test]
    fn test_member_filter_term() {
        assert_eq!(MemberFilter::default().term(), None);
        assert_eq!(MemberFilter::search("").term(), None);
        assert_eq!(MemberFilter::search("   ").term(), None);
        assert_eq!(MemberFilter::search(" ana ").term(), Some("ana"));
    }
}
