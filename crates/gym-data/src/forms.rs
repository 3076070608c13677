use std::fmt;

use chrono::NaiveDate;

use crate::{Member, Status};

/// Editable fields of a member record. Display
/// yields the wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Nombre,
    Apellido,
    Dni,
    Email,
    Telefono,
    FechaNacimiento,
    Direccion,
    TipoMembresia,
    FechaInicio,
    FechaVencimiento,
    Estado,
}

impl Field {
    /// Fields which must not be blank, in form order
    pub const REQUIRED: [Field; 10] = [
        Field::Nombre,
        Field::Apellido,
        Field::Dni,
        Field::Email,
        Field::Telefono,
        Field::FechaNacimiento,
        Field::Direccion,
        Field::TipoMembresia,
        Field::FechaInicio,
        Field::FechaVencimiento,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Nombre => "nombre",
            Field::Apellido => "apellido",
            Field::Dni => "dni",
            Field::Email => "email",
            Field::Telefono => "telefono",
            Field::FechaNacimiento => "fecha_nacimiento",
            Field::Direccion => "direccion",
            Field::TipoMembresia => "tipo_membresia",
            Field::FechaInicio => "fecha_inicio",
            Field::FechaVencimiento => "fecha_vencimiento",
            Field::Estado => "estado",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A candidate member record as entered by a user.
/// Every value is kept as raw text and may be blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberForm {
    pub nombre: String,
    pub apellido: String,
    pub dni: String,
    pub email: String,
    pub telefono: String,
    pub fecha_nacimiento: String,
    pub direccion: String,
    pub tipo_membresia: String,
    pub fecha_inicio: String,
    pub fecha_vencimiento: String,
    pub estado: String,
}

impl MemberForm {
    /// A blank form for a new member, starting today.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            fecha_inicio: today.to_string(),
            estado: Status::default().as_str().to_string(),
            ..Default::default()
        }
    }

    /// Raw value of a field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Nombre => &self.nombre,
            Field::Apellido => &self.apellido,
            Field::Dni => &self.dni,
            Field::Email => &self.email,
            Field::Telefono => &self.telefono,
            Field::FechaNacimiento => &self.fecha_nacimiento,
            Field::Direccion => &self.direccion,
            Field::TipoMembresia => &self.tipo_membresia,
            Field::FechaInicio => &self.fecha_inicio,
            Field::FechaVencimiento => &self.fecha_vencimiento,
            Field::Estado => &self.estado,
        }
    }

    /// Set the raw value of a field
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Nombre => self.nombre = value,
            Field::Apellido => self.apellido = value,
            Field::Dni => self.dni = value,
            Field::Email => self.email = value,
            Field::Telefono => self.telefono = value,
            Field::FechaNacimiento => self.fecha_nacimiento = value,
            Field::Direccion => self.direccion = value,
            Field::TipoMembresia => self.tipo_membresia = value,
            Field::FechaInicio => self.fecha_inicio = value,
            Field::FechaVencimiento => self.fecha_vencimiento = value,
            Field::Estado => self.estado = value,
        }
    }
}

/// Fill a form from an existing record for editing.
impl From<&Member> for MemberForm {
    fn from(member: &Member) -> Self {
        Self {
            nombre: member.first_name.clone(),
            apellido: member.last_name.clone(),
            dni: member.dni.clone(),
            email: member.email.clone(),
            telefono: member.phone.clone(),
            fecha_nacimiento: member.birth_date.to_string(),
            direccion: member.address.clone(),
            tipo_membresia: member.plan.as_str().to_string(),
            fecha_inicio: member.membership_start.to_string(),
            fecha_vencimiento: member.membership_end.to_string(),
            estado: member.status.as_str().to_string(),
        }
    }
}
