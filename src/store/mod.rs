//! Storage contract for the content management layer.
//!
//! The app holds an `Arc<dyn ContentStore>`; the shipped backend is the
//! in-memory [`memory::MemoryStore`], but nothing above this trait depends on
//! that — a database-backed implementation only has to honor the same
//! contract (absence is `Ok(None)`/`Ok(false)`, backend failures are `Err`).

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use crate::auth::user::{NewUser, User};
use crate::contact::dto::ContactInput;
use crate::contact::model::Contact;
use crate::content::model::{Partner, Project, Service, Testimonial};
use crate::validate::Validate;

pub mod memory;

/// An admin-managed content entity: knows how to materialize itself from its
/// insert schema and how to merge a partial update (shallow, lists replaced
/// wholesale).
pub trait Record: Clone + Serialize + Send + Sync + 'static {
    type Create: DeserializeOwned + Validate + Send + 'static;
    type Update: DeserializeOwned + Validate + Send + 'static;

    /// Lowercase kind name, used in logs and not-found messages.
    const KIND: &'static str;

    fn id(&self) -> i64;
    fn build(id: i64, input: Self::Create) -> Self;
    fn apply(&mut self, patch: Self::Update);
}

/// Uniform CRUD contract over one entity kind.
#[async_trait]
pub trait Crud<R: Record>: Send + Sync {
    /// All rows, in insertion order.
    async fn list(&self) -> anyhow::Result<Vec<R>>;
    async fn get(&self, id: i64) -> anyhow::Result<Option<R>>;
    /// Assigns a fresh id, applies kind defaults, stores, returns the row.
    async fn create(&self, input: R::Create) -> anyhow::Result<R>;
    /// Shallow merge of the supplied fields; `None` when the id is missing.
    async fn update(&self, id: i64, patch: R::Update) -> anyhow::Result<Option<R>>;
    /// `false` means there was nothing to delete — a valid outcome, not an error.
    async fn delete(&self, id: i64) -> anyhow::Result<bool>;
}

#[async_trait]
pub trait ContentStore:
    Crud<Service> + Crud<Project> + Crud<Testimonial> + Crud<Partner> + Send + Sync
{
    /// Exact-match filter on `Project.category`; the sentinel
    /// [`crate::content::model::ALL_CATEGORIES`] returns the unfiltered list.
    async fn projects_by_category(&self, category: &str) -> anyhow::Result<Vec<Project>>;

    /// Used by login and by duplicate-prevention in `create_user`.
    async fn user_by_username(&self, username: &str) -> anyhow::Result<Option<User>>;

    /// Rejects duplicate usernames. Not reachable from any route; only the
    /// startup seeding path creates users.
    async fn create_user(&self, new_user: NewUser) -> anyhow::Result<User>;

    async fn list_contacts(&self) -> anyhow::Result<Vec<Contact>>;

    /// Stores the submission and stamps `created_at` server-side.
    async fn create_contact(&self, input: ContactInput) -> anyhow::Result<Contact>;

    async fn get_contact(&self, id: i64) -> anyhow::Result<Option<Contact>>;

    async fn delete_contact(&self, id: i64) -> anyhow::Result<bool>;
}
