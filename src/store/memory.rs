//! Process-local storage backend.
//!
//! Each entity kind gets its own table: a `BTreeMap` keyed by id behind an
//! async `RwLock`, plus an atomic id counter. Ids are unique per kind for the
//! process lifetime and monotonically increasing, so iterating the map yields
//! insertion order. Updates clone-merge the whole record under the write
//! lock, which gives last-write-wins atomicity per record.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use anyhow::bail;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::auth::user::{NewUser, User};
use crate::contact::dto::ContactInput;
use crate::contact::model::Contact;
use crate::content::model::{Partner, Project, Service, Testimonial, ALL_CATEGORIES};

use super::{ContentStore, Crud, Record};

struct Table<T> {
    rows: RwLock<BTreeMap<i64, T>>,
    next_id: AtomicI64,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(0),
        }
    }

    fn fresh_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::Relaxed) + 1
    }

    async fn list(&self) -> Vec<T> {
        self.rows.read().await.values().cloned().collect()
    }

    async fn get(&self, id: i64) -> Option<T> {
        self.rows.read().await.get(&id).cloned()
    }

    async fn insert(&self, make: impl FnOnce(i64) -> T) -> T {
        let id = self.fresh_id();
        let row = make(id);
        self.rows.write().await.insert(id, row.clone());
        row
    }

    async fn modify(&self, id: i64, apply: impl FnOnce(&mut T)) -> Option<T> {
        let mut rows = self.rows.write().await;
        let row = rows.get_mut(&id)?;
        apply(row);
        Some(row.clone())
    }

    async fn remove(&self, id: i64) -> bool {
        self.rows.write().await.remove(&id).is_some()
    }
}

pub struct MemoryStore {
    services: Table<Service>,
    projects: Table<Project>,
    testimonials: Table<Testimonial>,
    partners: Table<Partner>,
    users: Table<User>,
    contacts: Table<Contact>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            services: Table::new(),
            projects: Table::new(),
            testimonials: Table::new(),
            partners: Table::new(),
            users: Table::new(),
            contacts: Table::new(),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a `Record` kind to its table, so one blanket `Crud` impl covers all
/// four admin-managed kinds.
trait HasTable<R: Record> {
    fn table(&self) -> &Table<R>;
}

impl HasTable<Service> for MemoryStore {
    fn table(&self) -> &Table<Service> {
        &self.services
    }
}

impl HasTable<Project> for MemoryStore {
    fn table(&self) -> &Table<Project> {
        &self.projects
    }
}

impl HasTable<Testimonial> for MemoryStore {
    fn table(&self) -> &Table<Testimonial> {
        &self.testimonials
    }
}

impl HasTable<Partner> for MemoryStore {
    fn table(&self) -> &Table<Partner> {
        &self.partners
    }
}

#[async_trait]
impl<S, R> Crud<R> for S
where
    S: HasTable<R> + Send + Sync,
    R: Record,
{
    async fn list(&self) -> anyhow::Result<Vec<R>> {
        Ok(self.table().list().await)
    }

    async fn get(&self, id: i64) -> anyhow::Result<Option<R>> {
        Ok(self.table().get(id).await)
    }

    async fn create(&self, input: R::Create) -> anyhow::Result<R> {
        Ok(self.table().insert(|id| R::build(id, input)).await)
    }

    async fn update(&self, id: i64, patch: R::Update) -> anyhow::Result<Option<R>> {
        Ok(self.table().modify(id, |row| row.apply(patch)).await)
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        Ok(self.table().remove(id).await)
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn projects_by_category(&self, category: &str) -> anyhow::Result<Vec<Project>> {
        let projects = self.projects.list().await;
        if category == ALL_CATEGORIES {
            return Ok(projects);
        }
        Ok(projects
            .into_iter()
            .filter(|p| p.category == category)
            .collect())
    }

    async fn user_by_username(&self, username: &str) -> anyhow::Result<Option<User>> {
        Ok(self
            .users
            .rows
            .read()
            .await
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create_user(&self, new_user: NewUser) -> anyhow::Result<User> {
        // Check and insert under one write lock so concurrent seeds cannot
        // slip in a duplicate username.
        let mut rows = self.users.rows.write().await;
        if rows.values().any(|u| u.username == new_user.username) {
            bail!("username '{}' already taken", new_user.username);
        }
        let id = self.users.fresh_id();
        let user = User {
            id,
            username: new_user.username,
            password_hash: new_user.password_hash,
            is_admin: new_user.is_admin,
        };
        rows.insert(id, user.clone());
        Ok(user)
    }

    async fn list_contacts(&self) -> anyhow::Result<Vec<Contact>> {
        Ok(self.contacts.list().await)
    }

    async fn create_contact(&self, input: ContactInput) -> anyhow::Result<Contact> {
        Ok(self.contacts.insert(|id| Contact::new(id, input)).await)
    }

    async fn get_contact(&self, id: i64) -> anyhow::Result<Option<Contact>> {
        Ok(self.contacts.get(id).await)
    }

    async fn delete_contact(&self, id: i64) -> anyhow::Result<bool> {
        Ok(self.contacts.remove(id).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::dto::{
        ProjectInput, ProjectPatch, ServiceInput, ServicePatch, TestimonialInput,
    };

    fn service_input(title: &str) -> ServiceInput {
        ServiceInput {
            title: title.into(),
            description: "Y".into(),
            icon: "fa-code".into(),
            color: "blue".into(),
        }
    }

    fn project_input(title: &str, category: &str) -> ProjectInput {
        ProjectInput {
            title: title.into(),
            description: "desc".into(),
            image: "/img.png".into(),
            category: category.into(),
            link: "https://example.com".into(),
            technologies: vec![],
            key_results: vec![],
        }
    }

    fn contact_input(name: &str) -> ContactInput {
        ContactInput {
            name: name.into(),
            email: "ana@x.com".into(),
            phone: None,
            subject: "Autre".into(),
            message: "Bonjour, ceci est un test.".into(),
        }
    }

    #[tokio::test]
    async fn create_then_get_roundtrip() {
        let store = MemoryStore::new();
        let created: Service = store.create(service_input("X")).await.unwrap();
        assert_eq!(created.id, 1);
        let fetched: Service = store.get(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.title, "X");
        assert_eq!(fetched.icon, "fa-code");
        assert_eq!(fetched.color, "blue");
    }

    #[tokio::test]
    async fn testimonial_roundtrip() {
        let store = MemoryStore::new();
        let created: Testimonial = store
            .create(TestimonialInput {
                name: "Marie Dupont".into(),
                position: "Directrice".into(),
                company: "ACME".into(),
                content: "Une équipe réactive et sérieuse.".into(),
                image: "/img/marie.png".into(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, 1);
        let fetched: Testimonial = store.get(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.company, "ACME");
        assert_eq!(Crud::<Testimonial>::list(&store).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn ids_are_monotonic_per_kind() {
        let store = MemoryStore::new();
        let a: Service = store.create(service_input("a")).await.unwrap();
        let b: Service = store.create(service_input("b")).await.unwrap();
        let p: Project = store.create(project_input("p", "Web")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));
        // Each kind has its own counter.
        assert_eq!(p.id, 1);
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = MemoryStore::new();
        for title in ["one", "two", "three"] {
            let _: Service = store.create(service_input(title)).await.unwrap();
        }
        let titles: Vec<String> = Crud::<Service>::list(&store)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(titles, vec!["one", "two", "three"]);
    }

    #[tokio::test]
    async fn delete_semantics() {
        let store = MemoryStore::new();
        let created: Service = store.create(service_input("X")).await.unwrap();
        assert!(!Crud::<Service>::delete(&store, 999).await.unwrap());
        assert!(Crud::<Service>::delete(&store, created.id).await.unwrap());
        assert!(Crud::<Service>::get(&store, created.id)
            .await
            .unwrap()
            .is_none());
        // Second delete of the same id is a no-op, not an error.
        assert!(!Crud::<Service>::delete(&store, created.id).await.unwrap());
    }

    #[tokio::test]
    async fn empty_patch_is_a_noop_that_returns_the_row() {
        let store = MemoryStore::new();
        let created: Service = store.create(service_input("X")).await.unwrap();
        let updated: Service = store
            .update(created.id, ServicePatch::default())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.title, created.title);
        assert_eq!(updated.description, created.description);
    }

    #[tokio::test]
    async fn partial_update_merges_shallowly() {
        let store = MemoryStore::new();
        let mut input = project_input("Site", "Web");
        input.technologies = vec!["React".into(), "Express".into()];
        let created: Project = store.create(input).await.unwrap();

        let patch = ProjectPatch {
            title: Some("Site v2".into()),
            technologies: Some(vec!["Rust".into()]),
            ..Default::default()
        };
        let updated: Project = store.update(created.id, patch).await.unwrap().unwrap();
        assert_eq!(updated.title, "Site v2");
        // Untouched fields survive; list fields are replaced wholesale.
        assert_eq!(updated.category, "Web");
        assert_eq!(updated.technologies, vec!["Rust".to_string()]);
    }

    #[tokio::test]
    async fn update_missing_id_is_absent() {
        let store = MemoryStore::new();
        let result = Crud::<Service>::update(&store, 42, ServicePatch::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn category_filter_and_all_sentinel() {
        let store = MemoryStore::new();
        let _: Project = store.create(project_input("a", "Web")).await.unwrap();
        let _: Project = store.create(project_input("b", "Mobile")).await.unwrap();
        let _: Project = store.create(project_input("c", "Web")).await.unwrap();

        let web = store.projects_by_category("Web").await.unwrap();
        assert_eq!(web.len(), 2);

        let all = store.projects_by_category(ALL_CATEGORIES).await.unwrap();
        assert_eq!(all.len(), Crud::<Project>::list(&store).await.unwrap().len());

        let none = store.projects_by_category("Inconnu").await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn contact_gets_server_assigned_timestamp() {
        let store = MemoryStore::new();
        let first = store.create_contact(contact_input("Ana")).await.unwrap();
        let second = store.create_contact(contact_input("Bob")).await.unwrap();
        assert!(first.id < second.id);
        assert!(first.created_at <= second.created_at);
        assert!(store.delete_contact(first.id).await.unwrap());
        assert!(store.get_contact(first.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let store = MemoryStore::new();
        let new_user = NewUser {
            username: "admin".into(),
            password_hash: "hash".into(),
            is_admin: true,
        };
        store.create_user(new_user.clone()).await.unwrap();
        assert!(store.create_user(new_user).await.is_err());
        let found = store.user_by_username("admin").await.unwrap().unwrap();
        assert!(found.is_admin);
        assert!(store.user_by_username("ghost").await.unwrap().is_none());
    }
}
