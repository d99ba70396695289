//! New-user input form state

/// Number of input fields: name, email, role.
pub const FIELD_COUNT: usize = 3;

/// Role pre-filled when the form opens.
const PREFILLED_ROLE: &str = "Administrator";

/// The three-field new-user form and its focus.
#[derive(Debug, Clone)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub role: String,
    /// Focused field index, clamped to `0..FIELD_COUNT` — no wraparound.
    pub focus: usize,
}

impl UserForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role: PREFILLED_ROLE.to_string(),
            focus: 0,
        }
    }

    /// Back to pristine: empty name/email, pre-filled role, focus on name.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Move focus down one field, stopping at the last.
    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1).min(FIELD_COUNT - 1);
    }

    /// Move focus up one field, stopping at the first.
    pub fn focus_previous(&mut self) {
        self.focus = self.focus.saturating_sub(1);
    }

    /// Whether focus sits on the last field (enter submits from here).
    pub fn is_last_field(&self) -> bool {
        self.focus == FIELD_COUNT - 1
    }

    /// Type a character into the focused field.
    pub fn insert(&mut self, c: char) {
        self.focused_field_mut().push(c);
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        self.focused_field_mut().pop();
    }

    /// Field value by index, for rendering.
    pub fn field(&self, index: usize) -> &str {
        match index {
            0 => &self.name,
            1 => &self.email,
            _ => &self.role,
        }
    }

    fn focused_field_mut(&mut self) -> &mut String {
        match self.focus {
            0 => &mut self.name,
            1 => &mut self.email,
            _ => &mut self.role,
        }
    }
}

impl Default for UserForm {
    fn default() -> Self {
        Self::new()
    }
}
