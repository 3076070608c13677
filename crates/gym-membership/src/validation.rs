use std::fmt;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error as ThisError;

use gym_data::{Field, Member, MemberForm, PlanType, Status};

use crate::datetime::parse_date;

/// local@domain.tld without whitespace
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

const DNI_LENGTHS: [usize; 2] = [7, 8];

/// Date fields in form order
const DATE_FIELDS: [Field; 3] = [
    Field::FechaNacimiento,
    Field::FechaInicio,
    Field::FechaVencimiento,
];

#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum FieldErrorKind {
    #[error("is required")]
    Required,
    #[error("is not a valid email address")]
    InvalidEmail,
    #[error("must have 7 or 8 digits, got {0}")]
    DniLength(usize),
    #[error("must be a date formatted as YYYY-MM-DD")]
    InvalidDate,
    #[error("must be one of mensual, trimestral, semestral or anual")]
    UnknownPlan,
    #[error("must be one of activo, inactivo or suspendido")]
    UnknownStatus,
    #[error("must be later than the start date")]
    NotAfterStart,
}

/// A rule violation on a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(field: Field, kind: FieldErrorKind) -> Self {
        Self { field, kind }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.kind)
    }
}

/// All rule violations of a rejected form
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
#[error("invalid member record: {}", join(.0))]
pub struct ValidationErrors(pub Vec<FieldError>);

fn join(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Errors reported for a single field
    pub fn for_field(&self, field: Field) -> impl Iterator<Item = &FieldError> {
        self.0.iter().filter(move |e| e.field == field)
    }
}

pub trait ValidateForm {
    /// Check all rules and report every violation. An
    /// empty result means the record can be submitted.
    fn validate(&self) -> Vec<FieldError>;

    /// Convert a valid form into a member record without id.
    fn to_member(&self) -> Result<Member, ValidationErrors>;
}

impl ValidateForm for MemberForm {
    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        let value = |field: Field| self.get(field).trim();

        for field in Field::REQUIRED {
            if value(field).is_empty() {
                errors.push(FieldError::new(field, FieldErrorKind::Required));
            }
        }

        let email = value(Field::Email);
        if !email.is_empty() && !EMAIL.is_match(email) {
            errors.push(FieldError::new(Field::Email, FieldErrorKind::InvalidEmail));
        }

        let dni = value(Field::Dni);
        let dni_len = dni.chars().count();
        if !dni.is_empty() && !DNI_LENGTHS.contains(&dni_len) {
            errors.push(FieldError::new(Field::Dni, FieldErrorKind::DniLength(dni_len)));
        }

        for field in DATE_FIELDS {
            let date = value(field);
            if !date.is_empty() && parse_date(date).is_err() {
                errors.push(FieldError::new(field, FieldErrorKind::InvalidDate));
            }
        }

        let plan = value(Field::TipoMembresia);
        if !plan.is_empty() && plan.parse::<PlanType>().is_err() {
            errors.push(FieldError::new(Field::TipoMembresia, FieldErrorKind::UnknownPlan));
        }

        if parse_status(value(Field::Estado)).is_none() {
            errors.push(FieldError::new(Field::Estado, FieldErrorKind::UnknownStatus));
        }

        let start = parse_date(value(Field::FechaInicio));
        let end = parse_date(value(Field::FechaVencimiento));
        if let (Ok(start), Ok(end)) = (start, end) {
            if end <= start {
                errors.push(FieldError::new(
                    Field::FechaVencimiento,
                    FieldErrorKind::NotAfterStart,
                ));
            }
        }

        errors
    }

    fn to_member(&self) -> Result<Member, ValidationErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(ValidationErrors(errors));
        }

        let text = |field: Field| self.get(field).trim().to_string();
        let date = |field: Field| -> Result<NaiveDate, ValidationErrors> {
            parse_date(self.get(field)).map_err(|_| {
                ValidationErrors(vec![FieldError::new(field, FieldErrorKind::InvalidDate)])
            })
        };
        let plan = self.tipo_membresia.parse::<PlanType>().map_err(|_| {
            ValidationErrors(vec![FieldError::new(
                Field::TipoMembresia,
                FieldErrorKind::UnknownPlan,
            )])
        })?;
        let status = parse_status(&self.estado).ok_or_else(|| {
            ValidationErrors(vec![FieldError::new(
                Field::Estado,
                FieldErrorKind::UnknownStatus,
            )])
        })?;

        Ok(Member {
            first_name: text(Field::Nombre),
            last_name: text(Field::Apellido),
            dni: text(Field::Dni),
            email: text(Field::Email),
            phone: text(Field::Telefono),
            birth_date: date(Field::FechaNacimiento)?,
            address: text(Field::Direccion),
            plan,
            membership_start: date(Field::FechaInicio)?,
            membership_end: date(Field::FechaVencimiento)?,
            status,
            ..Default::default()
        })
    }
}

/// A blank status means active.
fn parse_status(value: &str) -> Option<Status> {
    let value = value.trim();
    if value.is_empty() {
        return Some(Status::default());
    }
    value.parse().ok()
}
