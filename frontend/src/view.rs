//! Headless user list view with an edit modal.
//!
//! State changes only after the matching API call succeeds, so a failed call
//! leaves the view exactly as it was.

use tracing::debug;

use crate::api::UsersApi;
use crate::error::ClientError;
use crate::model::{NewUser, User, UserPatch};

/// List of users, a new-user name input, and an optional edit modal.
///
/// # Examples
/// ```no_run
/// use roster_frontend::{HttpUsersApi, UserListView};
///
/// # async fn demo() -> Result<(), roster_frontend::ClientError> {
/// let mut view = UserListView::new(HttpUsersApi::from_default_base()?);
/// view.load().await?;
/// view.set_new_name("Ann");
/// view.add().await?;
/// print!("{}", view.render());
/// # Ok(())
/// # }
/// ```
pub struct UserListView<A: UsersApi> {
    api: A,
    users: Vec<User>,
    new_name: String,
    selected: Option<User>,
    edit_name: String,
}

impl<A: UsersApi> UserListView<A> {
    /// Empty view over `api`; call [`load`](Self::load) to populate it.
    pub fn new(api: A) -> Self {
        Self {
            api,
            users: Vec::new(),
            new_name: String::new(),
            selected: None,
            edit_name: String::new(),
        }
    }

    /// Users currently shown.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Contents of the new-user name input.
    #[must_use]
    pub fn new_name(&self) -> &str {
        &self.new_name
    }

    /// Replace the new-user name input.
    pub fn set_new_name(&mut self, name: impl Into<String>) {
        self.new_name = name.into();
    }

    /// User open in the edit modal.
    #[must_use]
    pub fn selected(&self) -> Option<&User> {
        self.selected.as_ref()
    }

    /// Contents of the edit modal's name field.
    #[must_use]
    pub fn edit_name(&self) -> &str {
        &self.edit_name
    }

    /// Replace the edit modal's name field.
    pub fn set_edit_name(&mut self, name: impl Into<String>) {
        self.edit_name = name.into();
    }

    /// Fetch the full list, replacing what is shown.
    ///
    /// # Errors
    ///
    /// Propagates the client failure; the previous list stays in place.
    pub async fn load(&mut self) -> Result<(), ClientError> {
        self.users = self.api.get_users().await?;
        debug!(count = self.users.len(), "user list loaded");
        Ok(())
    }

    /// Create a user from the name input and append it.
    ///
    /// The email is derived as `{name}@mail.com` and the age fixed at 25.
    ///
    /// # Errors
    ///
    /// Propagates the client failure; the input is kept for another attempt.
    pub async fn add(&mut self) -> Result<&User, ClientError> {
        let created = self
            .api
            .add_user(&NewUser::from_name(&self.new_name))
            .await?;
        self.new_name.clear();
        self.users.push(created);
        self.users
            .last()
            .ok_or_else(|| ClientError::decode("created user vanished from the list"))
    }

    /// Delete a user, then drop it from the list.
    ///
    /// # Errors
    ///
    /// Propagates the client failure; the list is unchanged.
    pub async fn delete(&mut self, id: &str) -> Result<(), ClientError> {
        self.api.delete_user(id).await?;
        self.users.retain(|user| user.id != id);
        if self.selected.as_ref().is_some_and(|user| user.id == id) {
            self.cancel_edit();
        }
        Ok(())
    }

    /// Open the edit modal for `id`, pre-filling its name.
    ///
    /// Returns `false` when no listed user has that id.
    pub fn open_editor(&mut self, id: &str) -> bool {
        let Some(user) = self.users.iter().find(|user| user.id == id) else {
            return false;
        };
        self.edit_name.clone_from(&user.name);
        self.selected = Some(user.clone());
        true
    }

    /// Close the edit modal without saving.
    pub fn cancel_edit(&mut self) {
        self.selected = None;
        self.edit_name.clear();
    }

    /// Save the edited name and close the modal.
    ///
    /// Returns the server's record, which also replaces the listed entry with
    /// the same id when there is one. Does nothing and returns `Ok(None)` when
    /// the modal is closed.
    ///
    /// # Errors
    ///
    /// Propagates the client failure; the modal stays open.
    pub async fn confirm_edit(&mut self) -> Result<Option<User>, ClientError> {
        let Some(selected) = &self.selected else {
            return Ok(None);
        };
        let updated = self
            .api
            .update_user(&selected.id, &UserPatch::rename(self.edit_name.clone()))
            .await?;
        self.cancel_edit();
        if let Some(slot) = self.users.iter_mut().find(|user| user.id == updated.id) {
            slot.clone_from(&updated);
        }
        Ok(Some(updated))
    }

    /// Plain-text rendering of the list and, when open, the edit modal.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from("Users\n");
        if self.users.is_empty() {
            out.push_str("  (no users)\n");
        }
        for user in &self.users {
            out.push_str(&format!(
                "  {id}  {name} <{email}>, {age}\n",
                id = user.id,
                name = user.name,
                email = user.email,
                age = user.age
            ));
        }
        out.push_str(&format!("Name: {}\n", self.new_name));
        if let Some(user) = &self.selected {
            out.push_str(&format!("\n[Edit User {}]\n", user.id));
            out.push_str(&format!("  name: {}\n", self.edit_name));
            out.push_str("  (save | cancel)\n");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockUsersApi;
    use crate::model::DeleteConfirmation;
    use rstest::{fixture, rstest};

    fn user(id: &str, name: &str) -> User {
        User {
            id: id.to_owned(),
            name: name.to_owned(),
            email: format!("{name}@mail.com"),
            age: NewUser::DEFAULT_AGE.into(),
        }
    }

    #[fixture]
    fn listed() -> Vec<User> {
        vec![user("a1", "Ann"), user("b2", "Bob")]
    }

    async fn loaded_view(mut api: MockUsersApi, users: Vec<User>) -> UserListView<MockUsersApi> {
        api.expect_get_users().times(1).return_once(move || Ok(users));
        let mut view = UserListView::new(api);
        view.load().await.expect("load succeeds");
        view
    }

    #[rstest]
    #[tokio::test]
    async fn load_replaces_the_list(listed: Vec<User>) {
        let view = loaded_view(MockUsersApi::new(), listed.clone()).await;
        assert_eq!(view.users(), listed.as_slice());
    }

    #[rstest]
    #[tokio::test]
    async fn add_derives_email_and_age_and_clears_input(listed: Vec<User>) {
        let mut api = MockUsersApi::new();
        api.expect_add_user()
            .withf(|new| {
                new.name == "Cy" && new.email == "Cy@mail.com" && new.age.as_u64() == Some(25)
            })
            .times(1)
            .return_once(|_| Ok(user("c3", "Cy")));
        let mut view = loaded_view(api, listed).await;
        view.set_new_name("Cy");

        let added = view.add().await.expect("add succeeds").clone();

        assert_eq!(added, user("c3", "Cy"));
        assert_eq!(view.users().len(), 3);
        assert_eq!(view.users().last(), Some(&added));
        assert_eq!(view.new_name(), "");
    }

    #[rstest]
    #[tokio::test]
    async fn failed_add_keeps_state(listed: Vec<User>) {
        let mut api = MockUsersApi::new();
        api.expect_add_user()
            .return_once(|_| Err(ClientError::transport("connection refused")));
        let mut view = loaded_view(api, listed.clone()).await;
        view.set_new_name("Cy");

        assert!(view.add().await.is_err());

        assert_eq!(view.users(), listed.as_slice());
        assert_eq!(view.new_name(), "Cy");
    }

    #[rstest]
    #[tokio::test]
    async fn delete_removes_the_entry_after_the_call(listed: Vec<User>) {
        let mut api = MockUsersApi::new();
        api.expect_delete_user()
            .withf(|id| id == "a1")
            .times(1)
            .return_once(|_| {
                Ok(DeleteConfirmation {
                    message: "User deleted".to_owned(),
                })
            });
        let mut view = loaded_view(api, listed).await;

        view.delete("a1").await.expect("delete succeeds");

        assert_eq!(view.users(), &[user("b2", "Bob")]);
    }

    #[rstest]
    #[tokio::test]
    async fn editor_opens_prefilled_and_cancels_without_a_call(listed: Vec<User>) {
        let mut view = loaded_view(MockUsersApi::new(), listed).await;

        assert!(view.open_editor("b2"));
        assert_eq!(view.selected().map(|u| u.id.as_str()), Some("b2"));
        assert_eq!(view.edit_name(), "Bob");
        assert!(!view.open_editor("zz"));

        view.cancel_edit();

        assert!(view.selected().is_none());
        assert_eq!(view.edit_name(), "");
    }

    #[rstest]
    #[tokio::test]
    async fn confirm_edit_replaces_the_entry_and_closes(listed: Vec<User>) {
        let mut api = MockUsersApi::new();
        api.expect_update_user()
            .withf(|id, patch| id == "a1" && patch.name.as_deref() == Some("Annie"))
            .times(1)
            .return_once(|_, _| {
                Ok(User {
                    id: "a1".to_owned(),
                    name: "Annie".to_owned(),
                    email: "Ann@mail.com".to_owned(),
                    age: 25.into(),
                })
            });
        let mut view = loaded_view(api, listed).await;
        view.open_editor("a1");
        view.set_edit_name("Annie");

        let updated = view.confirm_edit().await.expect("update succeeds");

        assert_eq!(updated.map(|u| u.name), Some("Annie".to_owned()));
        assert_eq!(view.users().first().map(|u| u.name.as_str()), Some("Annie"));
        assert_eq!(view.users().first().map(|u| u.email.as_str()), Some("Ann@mail.com"));
        assert!(view.selected().is_none());
        assert_eq!(view.edit_name(), "");
    }

    #[rstest]
    #[tokio::test]
    async fn confirm_edit_returns_a_record_missing_from_the_list(listed: Vec<User>) {
        let mut api = MockUsersApi::new();
        api.expect_update_user()
            .times(1)
            .return_once(|_, _| Ok(user("x9", "Annie")));
        let mut view = loaded_view(api, listed.clone()).await;
        view.open_editor("a1");
        view.set_edit_name("Annie");

        let saved = view.confirm_edit().await.expect("update succeeds");

        assert_eq!(saved, Some(user("x9", "Annie")));
        assert_eq!(view.users(), listed.as_slice());
        assert!(view.selected().is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn confirm_edit_without_selection_is_a_no_op(listed: Vec<User>) {
        let mut view = loaded_view(MockUsersApi::new(), listed.clone()).await;

        let result = view.confirm_edit().await.expect("no call made");

        assert!(result.is_none());
        assert_eq!(view.users(), listed.as_slice());
    }

    #[rstest]
    #[tokio::test]
    async fn render_shows_list_and_modal(listed: Vec<User>) {
        let mut view = loaded_view(MockUsersApi::new(), listed).await;
        view.open_editor("a1");

        let text = view.render();

        assert!(text.contains("a1  Ann <Ann@mail.com>, 25"));
        assert!(text.contains("b2  Bob <Bob@mail.com>, 25"));
        assert!(text.contains("[Edit User a1]"));
        assert!(text.contains("name: Ann"));
    }

    #[rstest]
    fn render_marks_an_empty_list() {
        let view = UserListView::new(MockUsersApi::new());
        assert!(view.render().contains("(no users)"));
    }
}
