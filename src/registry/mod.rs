//! The user registry: CRUD keyed by username over one paged collection,
//! cursor-relative navigation, and deduplicating bulk import.

mod import;

use tracing::{info, warn};

use crate::domain::User;
use crate::error::RegistryError;
use crate::paged_collection::PagedCollection;

pub use import::MAX_FRUITLESS_BATCHES;

/// Page size the registry uses unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Owns every stored [`User`] and the generator used for bulk import.
///
/// Not synchronised. Shared access goes through
/// [`RegistryActor`](crate::registry_actor::RegistryActor), which serialises
/// requests.
pub struct Registry<G> {
    users: PagedCollection<User>,
    generator: G,
}

impl<G> Registry<G> {
    /// # Errors
    /// Returns [`RegistryError::InvalidInput`] if `page_size` is zero.
    pub fn new(page_size: usize, generator: G) -> Result<Self, RegistryError> {
        Self::with_users(Vec::new(), page_size, generator)
    }

    /// Preloads `users` as given. Uniqueness is not checked here; duplicated
    /// usernames surface later as [`RegistryError::AmbiguousState`].
    ///
    /// # Errors
    /// Returns [`RegistryError::InvalidInput`] if `page_size` is zero.
    pub fn with_users(
        users: impl IntoIterator<Item = User>,
        page_size: usize,
        generator: G,
    ) -> Result<Self, RegistryError> {
        Ok(Self {
            users: PagedCollection::from_elements(users, page_size)?,
            generator,
        })
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn users(&self) -> &[User] {
        self.users.all_elements()
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Reads the page under the cursor and advances the cursor.
    pub fn current_page(&mut self) -> Option<Vec<User>> {
        self.users.current_page().map(<[User]>::to_vec)
    }

    /// Moves `offset + 1` pages forward from the cursor and reads that page.
    pub fn page_forward(&mut self, offset: usize) -> Option<Vec<User>> {
        let target = self.users.cursor().saturating_add(to_isize(offset));
        self.users.set_cursor(target);
        self.users.next_page().map(<[User]>::to_vec)
    }

    /// Moves `offset + 1` pages backward from the cursor and reads that page.
    pub fn page_backward(&mut self, offset: usize) -> Option<Vec<User>> {
        let target = self.users.cursor().saturating_sub(to_isize(offset));
        self.users.set_cursor(target);
        self.users.prev_page().map(<[User]>::to_vec)
    }

    /// Looks up the single user with `username`.
    ///
    /// # Errors
    /// Returns [`RegistryError::AmbiguousState`] if more than one stored user
    /// carries that username.
    pub fn find_by_username(&self, username: &str) -> Result<Option<&User>, RegistryError> {
        let mut matches = self.users.iter().filter(|u| u.username() == username);
        let found = matches.next();
        if matches.next().is_some() {
            return Err(RegistryError::AmbiguousState(username.to_string()));
        }
        Ok(found)
    }

    pub fn create(&mut self, user: User) -> Result<User, RegistryError> {
        if self.find_by_username(user.username())?.is_some() {
            warn!(username = %user.username(), "Rejected duplicate username");
            return Err(RegistryError::AlreadyExists(user.username().to_string()));
        }
        self.users.push(user.clone());
        info!(username = %user.username(), "User created");
        Ok(user)
    }

    /// Overwrites the descriptive fields of the stored user with the same
    /// username. The stored record keeps its slot and its username.
    pub fn update(&mut self, user: &User) -> Result<User, RegistryError> {
        if self.find_by_username(user.username())?.is_none() {
            return Err(RegistryError::NotFound(user.username().to_string()));
        }
        let stored = self
            .users
            .iter_mut()
            .find(|stored| stored.username() == user.username())
            .ok_or_else(|| RegistryError::NotFound(user.username().to_string()))?;
        stored.apply_update(user);
        info!(username = %user.username(), "User updated");
        Ok(stored.clone())
    }

    pub fn delete(&mut self, username: &str) -> Result<User, RegistryError> {
        let Some(existing) = self.find_by_username(username)?.cloned() else {
            return Err(RegistryError::NotFound(username.to_string()));
        };
        let removed = self
            .users
            .remove(&existing)
            .ok_or_else(|| RegistryError::NotFound(username.to_string()))?;
        info!(username = %username, "User deleted");
        Ok(removed)
    }
}

fn to_isize(offset: usize) -> isize {
    isize::try_from(offset).unwrap_or(isize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Gender;
    use crate::mock_framework::ScriptedGenerator;
    use rstest::{fixture, rstest};

    fn user(username: &str) -> User {
        User::new(username)
            .unwrap()
            .with_name("Test")
            .with_email(format!("{username}@example.com"))
    }

    fn usernames(page: &[User]) -> Vec<&str> {
        page.iter().map(User::username).collect()
    }

    /// Two users on a single page, like a freshly seeded service.
    #[fixture]
    fn seeded() -> Registry<ScriptedGenerator> {
        let users = vec![
            User::new("test")
                .unwrap()
                .with_name("Test")
                .with_email("test@gmail.com")
                .with_gender(Gender::Male)
                .with_picture("https://test.com/image.jpg"),
            User::new("test2")
                .unwrap()
                .with_name("Test 2")
                .with_email("test2@gmail.com")
                .with_gender(Gender::Female)
                .with_picture("https://test2.com/image.jpg"),
        ];
        Registry::with_users(users, DEFAULT_PAGE_SIZE, ScriptedGenerator::new()).unwrap()
    }

    /// Twenty-five users over three pages of ten.
    #[fixture]
    fn three_pages() -> Registry<ScriptedGenerator> {
        let users = (0..25).map(|i| user(&format!("user{i:02}")));
        Registry::with_users(users, DEFAULT_PAGE_SIZE, ScriptedGenerator::new()).unwrap()
    }

    #[rstest]
    fn current_page_returns_seeded_users(mut seeded: Registry<ScriptedGenerator>) {
        let page = seeded.current_page().unwrap();
        assert_eq!(usernames(&page), vec!["test", "test2"]);
        assert_eq!(seeded.current_page(), None);
    }

    #[rstest]
    fn page_forward_moves_offset_plus_one(mut three_pages: Registry<ScriptedGenerator>) {
        let page = three_pages.page_forward(0).unwrap();
        assert_eq!(page.first().map(User::username), Some("user10"));

        assert_eq!(three_pages.page_forward(0).map(|p| p.len()), Some(5));
        assert_eq!(three_pages.page_forward(0), None);
        assert_eq!(three_pages.page_forward(0), None);
    }

    #[rstest]
    fn page_forward_with_offset_skips_pages(mut three_pages: Registry<ScriptedGenerator>) {
        let page = three_pages.page_forward(1).unwrap();
        assert_eq!(page.first().map(User::username), Some("user20"));
    }

    #[rstest]
    fn page_forward_overshoot_is_none(mut three_pages: Registry<ScriptedGenerator>) {
        assert_eq!(three_pages.page_forward(5), None);
        assert_eq!(three_pages.page_forward(usize::MAX), None);
    }

    #[rstest]
    fn page_backward_moves_offset_plus_one(mut three_pages: Registry<ScriptedGenerator>) {
        three_pages.page_forward(1);
        let page = three_pages.page_backward(1).unwrap();
        assert_eq!(page.first().map(User::username), Some("user00"));
        assert_eq!(three_pages.page_backward(0), None);
        assert_eq!(three_pages.page_backward(usize::MAX), None);
    }

    #[rstest]
    fn single_page_navigation_misses_both_ways(mut seeded: Registry<ScriptedGenerator>) {
        assert_eq!(seeded.page_forward(0), None);
        assert_eq!(seeded.page_backward(0).map(|p| p.len()), Some(2));
        assert_eq!(seeded.page_backward(0), None);
    }

    #[rstest]
    fn finds_user_by_username(seeded: Registry<ScriptedGenerator>) {
        let found = seeded.find_by_username("test").unwrap().unwrap();
        assert_eq!(found.email.as_deref(), Some("test@gmail.com"));
        assert_eq!(seeded.find_by_username("nobody").unwrap(), None);
    }

    #[test]
    fn duplicated_username_is_ambiguous() {
        let mut registry = Registry::with_users(
            vec![user("twin"), user("twin")],
            DEFAULT_PAGE_SIZE,
            ScriptedGenerator::new(),
        )
        .unwrap();

        assert_eq!(
            registry.find_by_username("twin"),
            Err(RegistryError::AmbiguousState("twin".into()))
        );
        assert_eq!(
            registry.delete("twin"),
            Err(RegistryError::AmbiguousState("twin".into()))
        );
        assert_eq!(
            registry.update(&user("twin")),
            Err(RegistryError::AmbiguousState("twin".into()))
        );
    }

    #[rstest]
    fn create_stores_and_returns_user(mut seeded: Registry<ScriptedGenerator>) {
        let created = seeded.create(user("create")).unwrap();
        assert_eq!(created.username(), "create");
        assert_eq!(seeded.len(), 3);
        assert!(seeded.find_by_username("create").unwrap().is_some());
    }

    #[rstest]
    fn create_twice_fails_with_already_exists(mut seeded: Registry<ScriptedGenerator>) {
        seeded.create(user("dup")).unwrap();
        assert_eq!(
            seeded.create(user("dup")),
            Err(RegistryError::AlreadyExists("dup".into()))
        );
        assert_eq!(seeded.len(), 3);
    }

    #[rstest]
    fn create_resets_cursor(mut three_pages: Registry<ScriptedGenerator>) {
        three_pages.page_forward(1);
        three_pages.create(user("late")).unwrap();
        let page = three_pages.current_page().unwrap();
        assert_eq!(page.first().map(User::username), Some("user00"));
    }

    #[rstest]
    fn update_changes_fields_in_place(mut seeded: Registry<ScriptedGenerator>) {
        let changes = User::new("test")
            .unwrap()
            .with_name("Modified Name")
            .with_email("modif@mail.com")
            .with_gender(Gender::Female)
            .with_picture("picture.mod");

        let updated = seeded.update(&changes).unwrap();

        assert_eq!(updated.name.as_deref(), Some("Modified Name"));
        assert_eq!(updated.email.as_deref(), Some("modif@mail.com"));
        assert_eq!(updated.gender, Gender::Female);
        assert_eq!(updated.picture.as_deref(), Some("picture.mod"));
        // Same slot: still the first stored user.
        assert_eq!(seeded.users()[0].name.as_deref(), Some("Modified Name"));
        assert_eq!(seeded.len(), 2);
    }

    #[rstest]
    fn update_unknown_user_fails(mut seeded: Registry<ScriptedGenerator>) {
        assert_eq!(
            seeded.update(&user("error")),
            Err(RegistryError::NotFound("error".into()))
        );
    }

    #[rstest]
    fn update_keeps_cursor(mut three_pages: Registry<ScriptedGenerator>) {
        three_pages.page_forward(0);
        three_pages.update(&user("user03")).unwrap();
        let page = three_pages.current_page().unwrap();
        assert_eq!(page.first().map(User::username), Some("user10"));
    }

    #[rstest]
    fn delete_removes_and_returns_user(mut seeded: Registry<ScriptedGenerator>) {
        let removed = seeded.delete("test").unwrap();
        assert_eq!(removed.username(), "test");
        assert_eq!(seeded.len(), 1);
        assert_eq!(seeded.find_by_username("test").unwrap(), None);
    }

    #[rstest]
    fn delete_unknown_user_fails(mut seeded: Registry<ScriptedGenerator>) {
        assert_eq!(
            seeded.delete("error"),
            Err(RegistryError::NotFound("error".into()))
        );
    }

    #[test]
    fn rejects_zero_page_size() {
        let result = Registry::new(0, ScriptedGenerator::new());
        assert!(matches!(result, Err(RegistryError::InvalidInput(_))));
    }
}
