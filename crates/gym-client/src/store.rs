use anyhow::{Context, Result};
use thiserror::Error as ThisError;
use tracing::debug;

use gym_data::{
    Delete,
    Insert,
    Member,
    MemberFilter,
    MemberForm,
    Query,
    Saved,
    Update,
};
use gym_membership::validation::{ValidateForm, ValidationErrors};

/// SaveError type
#[derive(ThisError, Debug)]
pub enum SaveError {
    /// The form was rejected locally, nothing was sent.
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),

    #[error(transparent)]
    Failed(#[from] anyhow::Error),
}

/// Snapshot of the roster as shown by a view. The
/// snapshot is replaced as a whole on every successful
/// listing and reloaded after each change.
#[derive(Debug, Default, Clone)]
pub struct RosterStore {
    members: Vec<Member>,
}

impl RosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn count(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member count line for the roster view
    pub fn summary(&self) -> String {
        let count = self.count();
        let plural = if count == 1 { "" } else { "s" };
        format!("Total: {} miembro{}", count, plural)
    }

    /// Lookup a member of the current snapshot
    pub fn find(&self, id: u32) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Form prefilled for editing a listed member
    pub fn edit_form(&self, id: u32) -> Option<MemberForm> {
        self.find(id).map(MemberForm::from)
    }

    /// List or search members. On failure the previous
    /// snapshot is kept.
    pub async fn load<DB>(&mut self, db: &DB, search: Option<&str>) -> Result<&[Member]>
    where
        DB: Query<Member, Filter = MemberFilter> + Sync,
    {
        let filter = MemberFilter {
            search: search.map(str::to_string),
        };
        let members: Vec<Member> = db.query(&filter).await?;
        debug!(count = members.len(), "roster loaded");
        self.members = members;
        Ok(&self.members)
    }

    /// Validate a form and create a new member, or update
    /// the member given by `editing`. The full roster is
    /// reloaded afterwards.
    pub async fn save<DB>(
        &mut self,
        db: &DB,
        form: &MemberForm,
        editing: Option<u32>,
    ) -> Result<Saved<Member>, SaveError>
    where
        DB: Query<Member, Filter = MemberFilter> + Insert<Member> + Update<Member> + Sync,
    {
        let member = form.to_member()?;
        let saved = match editing {
            Some(id) => db.update(Member { id, ..member }).await?,
            None => db.insert(member).await?,
        };
        self.load(db, None)
            .await
            .context("member saved, but the roster could not be reloaded")?;
        Ok(saved)
    }

    /// Delete a member and reload the full roster.
    /// Returns the backend acknowledgement.
    pub async fn remove<DB>(&mut self, db: &DB, id: u32) -> Result<String>
    where
        DB: Query<Member, Filter = MemberFilter> + Delete<Member, Key = u32> + Sync,
    {
        let message = db.delete(id).await?;
        self.load(db, None)
            .await
            .context("member deleted, but the roster could not be reloaded")?;
        Ok(message)
    }
}
