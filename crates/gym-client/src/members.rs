use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Method;
use serde::Serialize;
use tracing::{debug, info};

use gym_data::{
    Delete,
    Insert,
    Member,
    MemberFilter,
    PlanType,
    Query,
    Retrieve,
    Saved,
    Status,
    Update,
};

use crate::{results::ClientError, Connection};

const MEMBERS: &str = "api/members";

fn member_path(id: u32) -> String {
    format!("{}/{}", MEMBERS, id)
}

/// Request body for create and update: the editable
/// fields of a member, without id.
#[derive(Debug, Serialize)]
struct MemberBody<'a> {
    nombre: &'a str,
    apellido: &'a str,
    dni: &'a str,
    email: &'a str,
    telefono: &'a str,
    fecha_nacimiento: NaiveDate,
    direccion: &'a str,
    tipo_membresia: &'a PlanType,
    fecha_inicio: NaiveDate,
    fecha_vencimiento: NaiveDate,
    estado: &'a Status,
}

impl<'a> From<&'a Member> for MemberBody<'a> {
    fn from(member: &'a Member) -> Self {
        Self {
            nombre: &member.first_name,
            apellido: &member.last_name,
            dni: &member.dni,
            email: &member.email,
            telefono: &member.phone,
            fecha_nacimiento: member.birth_date,
            direccion: &member.address,
            tipo_membresia: &member.plan,
            fecha_inicio: member.membership_start,
            fecha_vencimiento: member.membership_end,
            estado: &member.status,
        }
    }
}

#[async_trait]
impl Query<Member> for Connection {
    type Filter = MemberFilter;
    async fn query(&self, filter: &Self::Filter) -> Result<Vec<Member>> {
        let mut request = self.request(Method::GET, MEMBERS)?;
        if let Some(term) = filter.term() {
            request = request.query(&[("search", term)]);
        }
        let reply = self.send(request, None).await?;
        Ok(reply.members.unwrap_or_default())
    }
}

#[async_trait]
impl Retrieve<Member> for Connection {
    type Key = u32;
    async fn retrieve(&self, member_id: Self::Key) -> Result<Member> {
        let request = self.request(Method::GET, &member_path(member_id))?;
        let member = self
            .send(request, Some(member_id))
            .await?
            .member
            .ok_or(ClientError::MissingMember)?;
        Ok(member)
    }
}

impl Connection {
    /// Find a member by dni. The backend keeps dni unique.
    async fn find_by_dni(&self, dni: &str) -> Result<Member> {
        let members: Vec<Member> = self.query(&MemberFilter::search(dni)).await?;
        let member = members
            .into_iter()
            .find(|m| m.dni == dni)
            .ok_or(ClientError::MissingMember)?;
        Ok(member)
    }
}

#[async_trait]
impl Insert<Member> for Connection {
    /// Create member, the id is assigned by the backend.
    /// A reply without the stored record is resolved by
    /// looking the member up by dni.
    async fn insert(&self, member: Member) -> Result<Saved<Member>> {
        let request = self
            .request(Method::POST, MEMBERS)?
            .json(&MemberBody::from(&member));
        let reply = self.send(request, None).await?;
        let record = match reply.member {
            Some(record) => record,
            None => {
                debug!(dni = %member.dni, "create reply without member");
                self.find_by_dni(&member.dni).await?
            }
        };
        let message = reply
            .message
            .unwrap_or_else(|| format!("Member {} created", record.id));
        info!(id = record.id, %message, "member created");
        Ok(Saved { record, message })
    }
}

#[async_trait]
impl Update<Member> for Connection {
    /// Replace the editable fields of a member
    async fn update(&self, member: Member) -> Result<Saved<Member>> {
        let request = self
            .request(Method::PUT, &member_path(member.id))?
            .json(&MemberBody::from(&member));
        let reply = self.send(request, Some(member.id)).await?;
        let record = match reply.member {
            Some(record) => record,
            None => self.retrieve(member.id).await?,
        };
        let message = reply
            .message
            .unwrap_or_else(|| format!("Member {} updated", member.id));
        info!(id = member.id, %message, "member updated");
        Ok(Saved { record, message })
    }
}

#[async_trait]
impl Delete<Member> for Connection {
    type Key = u32;
    /// Delete member
    async fn delete(&self, member_id: Self::Key) -> Result<String> {
        let request = self.request(Method::DELETE, &member_path(member_id))?;
        let reply = self.send(request, Some(member_id)).await?;
        let message = reply
            .message
            .unwrap_or_else(|| format!("Member {} deleted", member_id));
        info!(id = member_id, %message, "member deleted");
        Ok(message)
    }
}
