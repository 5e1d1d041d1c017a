use serde::Deserialize;
use tracing::trace;

use crate::listener::Listener;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl User {
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    #[must_use]
    pub fn notification_line(&self, message: &str) -> String {
        format!("[Notification for {}]: {}", self.name, message)
    }
}

impl Listener for User {
    fn receive(&self, message: &str) {
        trace!(user = %self.name, "notification received");
        println!("{}", self.notification_line(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_line_contains_name_and_verbatim_message() {
        let user = User::new("Ana", "ana@example.com", "+52-55-1111");
        let line = user.notification_line("  Spaced  Message ");

        assert_eq!(line, "[Notification for Ana]:   Spaced  Message ");
    }

    #[test]
    fn test_users_with_equal_fields_are_equal_values() {
        let a = User::new("Carlos", "carlos@example.com", "+52-55-2222");
        let b = a.clone();

        assert_eq!(a, b);
    }
}
