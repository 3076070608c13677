use anyhow::{bail, Result};
use clap::Args;

use gym_client::{Connection, RosterStore};
use gym_data::{Field, Member, MemberForm, Retrieve};
use gym_membership::{
    datetime,
    expiration::FillExpiration,
    validation::{ValidateForm, ValidationErrors},
};

use crate::commands::confirm;
use crate::formatting::PrintFormatted;

#[derive(Args, Debug)]
pub struct ShowMember {
    #[clap(short, long)]
    pub id: u32,
}

impl ShowMember {
    /// Run the command and show a member
    pub async fn run(self, db: &Connection) -> Result<()> {
        let member: Member = db.retrieve(self.id).await?;
        println!();
        member.print_formatted();
        println!();
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct ListMembers {
    /// Substring of name, dni or email
    #[clap(short, long)]
    pub search: Option<String>,
}

impl ListMembers {
    /// Run the command and list members
    pub async fn run(self, db: &Connection) -> Result<()> {
        let mut store = RosterStore::new();
        store.load(db, self.search.as_deref()).await?;
        store.members().print_formatted();
        println!("{}", store.summary());
        Ok(())
    }
}

/// Member fields as given on the command line. Values are
/// kept as text, the form validation reports bad input.
#[derive(Args, Debug, Default)]
pub struct MemberArgs {
    #[clap(short = 'n', long)]
    pub first_name: Option<String>,
    #[clap(short = 'l', long)]
    pub last_name: Option<String>,
    #[clap(short, long)]
    pub dni: Option<String>,
    #[clap(short, long)]
    pub email: Option<String>,
    #[clap(short = 't', long)]
    pub phone: Option<String>,
    #[clap(short, long)]
    pub birth_date: Option<String>,
    #[clap(short, long)]
    pub address: Option<String>,
    /// One of mensual, trimestral, semestral, anual
    #[clap(short, long)]
    pub plan: Option<String>,
    /// Start date, defaults to today for new members
    #[clap(short, long)]
    pub start: Option<String>,
    /// Expiration date, derived from start and plan if omitted
    #[clap(long)]
    pub end: Option<String>,
    /// One of activo, inactivo, suspendido
    #[clap(long)]
    pub status: Option<String>,
}

impl MemberArgs {
    /// Overlay the given values on a form. The expiration
    /// date is recalculated when the start date or plan
    /// changed and no expiration was given.
    pub fn apply(self, form: &mut MemberForm) {
        let recalculate = self.end.is_none() && (self.start.is_some() || self.plan.is_some());
        let values = [
            (Field::Nombre, self.first_name),
            (Field::Apellido, self.last_name),
            (Field::Dni, self.dni),
            (Field::Email, self.email),
            (Field::Telefono, self.phone),
            (Field::FechaNacimiento, self.birth_date),
            (Field::Direccion, self.address),
            (Field::TipoMembresia, self.plan),
            (Field::FechaInicio, self.start),
            (Field::FechaVencimiento, self.end),
            (Field::Estado, self.status),
        ];
        for (field, value) in values {
            if let Some(value) = value {
                form.set(field, value);
            }
        }
        if recalculate {
            form.fill_expiration();
        }
    }
}

/// Convert a form or print why it was rejected.
fn checked_member(form: &MemberForm) -> Result<Member> {
    match form.to_member() {
        Ok(member) => Ok(member),
        Err(errors) => {
            report(&errors);
            bail!("member record has {} invalid fields", errors.errors().len());
        }
    }
}

fn report(errors: &ValidationErrors) {
    println!();
    errors.print_formatted();
    println!();
}

#[derive(Args, Debug)]
pub struct AddMember {
    #[clap(flatten)]
    pub fields: MemberArgs,
}

impl AddMember {
    /// Run the command and register a member
    pub async fn run(self, db: &Connection, yes: bool) -> Result<()> {
        let mut form = MemberForm::new(datetime::today());
        self.fields.apply(&mut form);

        let member = checked_member(&form)?;
        println!();
        member.print_formatted();
        println!();

        if !confirm("Add member?", yes)? {
            return Ok(());
        }

        let mut store = RosterStore::new();
        let saved = store.save(db, &form, None).await?;
        println!("{} (id {})", saved.message, saved.record.id);
        println!("{}", store.summary());

        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct UpdateMember {
    #[clap(short, long)]
    pub id: u32,
    #[clap(flatten)]
    pub fields: MemberArgs,
}

impl UpdateMember {
    /// Run command and update a member
    pub async fn run(self, db: &Connection, yes: bool) -> Result<()> {
        let member: Member = db.retrieve(self.id).await?;
        let mut form = MemberForm::from(&member);
        self.fields.apply(&mut form);

        let update = Member {
            id: member.id,
            registered_at: member.registered_at,
            ..checked_member(&form)?
        };

        println!();
        (member.clone(), update).print_formatted();
        println!();
        if !confirm("Update member?", yes)? {
            return Ok(());
        }

        let mut store = RosterStore::new();
        let saved = store.save(db, &form, Some(member.id)).await?;
        println!("{}", saved.message);

        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct DeleteMember {
    #[clap(short, long)]
    pub id: u32,
}

impl DeleteMember {
    pub async fn run(&self, db: &Connection, yes: bool) -> Result<()> {
        let member: Member = db.retrieve(self.id).await?;
        println!();
        member.print_formatted();
        println!();
        let question = format!("Delete {} from the roster?", member.full_name());
        if !confirm(&question, yes)? {
            return Ok(());
        }
        let mut store = RosterStore::new();
        let message = store.remove(db, member.id).await?;
        println!("{}", message);
        println!("{}", store.summary());
        Ok(())
    }
}
