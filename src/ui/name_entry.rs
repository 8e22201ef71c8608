use crate::game::Player;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Longest accepted display name, in characters.
const MAX_NAME_LEN: usize = 20;

/// Display names chosen on the start screen or supplied via config/CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerNames {
    pub one: String,
    pub two: String,
}

impl PlayerNames {
    pub fn name_of(&self, player: Player) -> &str {
        match player {
            Player::One => &self.one,
            Player::Two => &self.two,
        }
    }
}

/// State of the start screen: two name fields, a focus marker, and the
/// warning shown when submission is rejected.
pub struct NameEntry {
    fields: [String; 2],
    focus: usize,
    warning: Option<String>,
}

impl NameEntry {
    pub fn new(one: &str, two: &str) -> Self {
        let focus = usize::from(!one.trim().is_empty() && two.trim().is_empty());
        NameEntry {
            fields: [one.to_string(), two.to_string()],
            focus,
            warning: None,
        }
    }

    /// Current text of a field (0 = player one, 1 = player two).
    pub fn field(&self, index: usize) -> &str {
        &self.fields[index]
    }

    /// Index of the focused field.
    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    /// Handle a key press. Returns the chosen names once both fields are
    /// submitted with non-empty text; otherwise the entry keeps collecting.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<PlayerNames> {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.fields[self.focus].chars().count() < MAX_NAME_LEN {
                    self.fields[self.focus].push(c);
                }
                self.warning = None;
            }
            KeyCode::Backspace => {
                self.fields[self.focus].pop();
                self.warning = None;
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focus = (self.focus + 1) % self.fields.len();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.checked_sub(1).unwrap_or(self.fields.len() - 1);
            }
            KeyCode::Enter => {
                if self.focus == 0 {
                    self.focus = 1;
                } else {
                    return self.try_submit();
                }
            }
            _ => {}
        }
        None
    }

    fn try_submit(&mut self) -> Option<PlayerNames> {
        let one = self.fields[0].trim();
        let two = self.fields[1].trim();
        if one.is_empty() || two.is_empty() {
            self.warning = Some("Please enter names for both players.".to_string());
            self.focus = usize::from(!one.is_empty());
            return None;
        }
        Some(PlayerNames {
            one: one.to_string(),
            two: two.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(entry: &mut NameEntry, text: &str) {
        for c in text.chars() {
            assert!(entry.handle_key(key(KeyCode::Char(c))).is_none());
        }
    }

    #[test]
    fn test_typing_fills_focused_field() {
        let mut entry = NameEntry::new("", "");
        type_text(&mut entry, "Alice");
        assert_eq!(entry.field(0), "Alice");
        assert_eq!(entry.field(1), "");
    }

    #[test]
    fn test_tab_switches_focus() {
        let mut entry = NameEntry::new("", "");
        assert_eq!(entry.focus(), 0);
        entry.handle_key(key(KeyCode::Tab));
        assert_eq!(entry.focus(), 1);
        entry.handle_key(key(KeyCode::Tab));
        assert_eq!(entry.focus(), 0);
        entry.handle_key(key(KeyCode::BackTab));
        assert_eq!(entry.focus(), 1);
    }

    #[test]
    fn test_backspace_deletes_from_focused_field() {
        let mut entry = NameEntry::new("Alice", "");
        entry.handle_key(key(KeyCode::Backspace));
        assert_eq!(entry.field(0), "Alic");
    }

    #[test]
    fn test_enter_advances_then_submits() {
        let mut entry = NameEntry::new("", "");
        type_text(&mut entry, "Alice");
        assert!(entry.handle_key(key(KeyCode::Enter)).is_none());
        assert_eq!(entry.focus(), 1);
        type_text(&mut entry, "Bob");

        let names = entry.handle_key(key(KeyCode::Enter)).expect("should submit");
        assert_eq!(names.one, "Alice");
        assert_eq!(names.two, "Bob");
    }

    #[test]
    fn test_empty_names_are_rejected() {
        let mut entry = NameEntry::new("", "");
        entry.handle_key(key(KeyCode::Enter)); // advance
        assert!(entry.handle_key(key(KeyCode::Enter)).is_none());
        assert_eq!(
            entry.warning(),
            Some("Please enter names for both players.")
        );
        // Focus returns to the first missing field.
        assert_eq!(entry.focus(), 0);
    }

    #[test]
    fn test_whitespace_only_name_is_rejected() {
        let mut entry = NameEntry::new("Alice", "   ");
        entry.handle_key(key(KeyCode::Enter));
        assert!(entry.handle_key(key(KeyCode::Enter)).is_none());
        assert!(entry.warning().is_some());
        assert_eq!(entry.focus(), 1);
    }

    #[test]
    fn test_submitted_names_are_trimmed() {
        let mut entry = NameEntry::new("  Alice ", " Bob  ");
        entry.handle_key(key(KeyCode::Enter));
        let names = entry.handle_key(key(KeyCode::Enter)).expect("should submit");
        assert_eq!(names.one, "Alice");
        assert_eq!(names.two, "Bob");
    }

    #[test]
    fn test_typing_clears_warning() {
        let mut entry = NameEntry::new("", "");
        entry.handle_key(key(KeyCode::Enter));
        entry.handle_key(key(KeyCode::Enter));
        assert!(entry.warning().is_some());
        entry.handle_key(key(KeyCode::Char('B')));
        assert!(entry.warning().is_none());
    }

    #[test]
    fn test_name_length_is_capped() {
        let mut entry = NameEntry::new("", "");
        type_text(&mut entry, &"x".repeat(MAX_NAME_LEN + 5));
        assert_eq!(entry.field(0).chars().count(), MAX_NAME_LEN);
    }

    #[test]
    fn test_control_chords_do_not_type() {
        let mut entry = NameEntry::new("", "");
        entry.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(entry.field(0), "");
    }

    #[test]
    fn test_prefilled_entry_focuses_missing_field() {
        let entry = NameEntry::new("Alice", "");
        assert_eq!(entry.focus(), 1);

        let entry = NameEntry::new("", "Bob");
        assert_eq!(entry.focus(), 0);
    }

    #[test]
    fn test_name_lookup_by_player() {
        let names = PlayerNames {
            one: "Alice".to_string(),
            two: "Bob".to_string(),
        };
        assert_eq!(names.name_of(Player::One), "Alice");
        assert_eq!(names.name_of(Player::Two), "Bob");
    }
}
