//! User list state: records, ordering, selection

use user_console_core::User;

/// The user records and the current selection.
///
/// Records are kept in display order at all times; every mutation re-sorts
/// and re-anchors the selection by id so a reshuffle never silently moves
/// the operator onto a different user.
#[derive(Debug, Default)]
pub struct UsersState {
    /// Records, sorted (see [`sort_users`]).
    pub users: Vec<User>,
    /// Index of the selected record, if any.
    pub selected: Option<usize>,
}

impl UsersState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected record.
    pub fn selected_user(&self) -> Option<&User> {
        self.selected.and_then(|i| self.users.get(i))
    }

    /// Id of the selected record.
    pub fn selected_id(&self) -> Option<&str> {
        self.selected_user().map(|u| u.id.as_str())
    }

    /// Replace all records, keeping the selection on the same logical user
    /// when it survived the refresh, else selecting the first.
    pub fn set_users(&mut self, users: Vec<User>) {
        let previous = self.selected_id().map(str::to_string);

        self.users = users;
        sort_users(&mut self.users);

        if self.users.is_empty() {
            self.selected = None;
            return;
        }
        self.selected = previous
            .and_then(|id| self.position_of(&id))
            .or(Some(0));
    }

    /// Insert a freshly created record and select it.
    pub fn insert(&mut self, user: User) {
        let id = user.id.clone();
        self.users.push(user);
        sort_users(&mut self.users);
        self.selected = self.position_of(&id).or(Some(0));
    }

    /// Remove the record with `id`, keeping the selection sensible.
    pub fn remove(&mut self, id: &str) {
        let previous = self
            .selected_id()
            .filter(|selected| *selected != id)
            .map(str::to_string);

        self.users.retain(|u| u.id != id);

        if self.users.is_empty() {
            self.selected = None;
            return;
        }
        self.selected = previous
            .and_then(|kept| self.position_of(&kept))
            .or_else(|| Some(self.selected.unwrap_or(0).min(self.users.len() - 1)));
    }

    /// Select the previous record.
    pub fn select_previous(&mut self) {
        if let Some(i) = self.selected {
            if i > 0 {
                self.selected = Some(i - 1);
            }
        }
    }

    /// Select the next record.
    pub fn select_next(&mut self) {
        if let Some(i) = self.selected {
            if i + 1 < self.users.len() {
                self.selected = Some(i + 1);
            }
        }
    }

    fn position_of(&self, id: &str) -> Option<usize> {
        self.users.iter().position(|u| u.id == id)
    }
}

/// Sort records into the display order: case-insensitive trimmed name, then
/// case-insensitive trimmed email, then raw id. The id tie-break makes the
/// order total, so selection-by-id survives re-sorts deterministically.
pub fn sort_users(users: &mut [User]) {
    users.sort_by_cached_key(|u| {
        (
            u.name.trim().to_lowercase(),
            u.email.trim().to_lowercase(),
            u.id.clone(),
        )
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, name: &str, email: &str) -> User {
        User {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role: "User".to_string(),
            ..User::default()
        }
    }

    #[test]
    fn sort_is_case_insensitive_with_id_tiebreak() {
        let mut users = vec![
            user("3", "bob", "bob@x.com"),
            user("2", "Bob", "bob@x.com"),
            user("1", "alice", "alice@x.com"),
        ];
        sort_users(&mut users);

        let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names[0], "alice");
        // "Bob" and "bob" tie on name and email; id ascending breaks it.
        assert_eq!(users[1].id, "2");
        assert_eq!(users[2].id, "3");
    }

    #[test]
    fn sort_treats_blank_names_as_empty() {
        let mut users = vec![user("1", "zed", "z@x.com"), user("2", "   ", "a@x.com")];
        sort_users(&mut users);
        assert_eq!(users[0].id, "2");
    }

    #[test]
    fn set_users_selects_first_by_default() {
        let mut state = UsersState::new();
        state.set_users(vec![user("1", "b", "b@x"), user("2", "a", "a@x")]);
        assert_eq!(state.selected, Some(0));
        assert_eq!(state.selected_id(), Some("2"));
    }

    #[test]
    fn set_users_reselects_by_id_after_resort() {
        let mut state = UsersState::new();
        state.set_users(vec![user("1", "alice", "a@x"), user("2", "bob", "b@x")]);
        state.select_next();
        assert_eq!(state.selected_id(), Some("2"));

        // A refresh renames users so bob now sorts first.
        state.set_users(vec![user("1", "zoe", "a@x"), user("2", "bob", "b@x")]);
        assert_eq!(state.selected_id(), Some("2"));
        assert_eq!(state.selected, Some(0));
    }

    #[test]
    fn set_users_empty_clears_selection() {
        let mut state = UsersState::new();
        state.set_users(vec![user("1", "a", "a@x")]);
        state.set_users(Vec::new());
        assert_eq!(state.selected, None);
    }

    #[test]
    fn insert_selects_the_new_record() {
        let mut state = UsersState::new();
        state.set_users(vec![user("1", "bob", "b@x")]);
        state.insert(user("2", "alice", "a@x"));
        assert_eq!(state.selected_id(), Some("2"));
        assert_eq!(state.selected, Some(0));
    }

    #[test]
    fn remove_keeps_selection_on_surviving_user() {
        let mut state = UsersState::new();
        state.set_users(vec![
            user("1", "alice", "a@x"),
            user("2", "bob", "b@x"),
            user("3", "carol", "c@x"),
        ]);
        state.select_next();
        assert_eq!(state.selected_id(), Some("2"));

        state.remove("1");
        assert_eq!(state.selected_id(), Some("2"));
    }

    #[test]
    fn remove_selected_clamps_to_a_neighbor() {
        let mut state = UsersState::new();
        state.set_users(vec![user("1", "alice", "a@x"), user("2", "bob", "b@x")]);
        state.select_next();
        state.remove("2");
        assert_eq!(state.selected, Some(0));

        state.remove("1");
        assert_eq!(state.selected, None);
    }

    #[test]
    fn selection_does_not_wrap() {
        let mut state = UsersState::new();
        state.set_users(vec![user("1", "a", "a@x"), user("2", "b", "b@x")]);
        state.select_previous();
        assert_eq!(state.selected, Some(0));
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, Some(1));
    }
}
