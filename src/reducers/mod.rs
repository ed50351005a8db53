//! Domain reducers.
//!
//! Each module handles the messages of one area of the dashboard and returns
//! `true` when it consumed the message.  None of them touch the DOM, storage
//! or the network directly; they push [`crate::messages::Command`]s instead.

pub mod comments;
pub mod facebook;
pub mod metrics;
pub mod navigation;
pub mod session;
pub mod users;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::messages::Command;
    use crate::models::{FacebookPage, Role, User};

    pub fn user(id: u64, role: Role, pages: &[&str]) -> User {
        User {
            id,
            username: format!("user{}", id),
            email: format!("user{}@example.com", id),
            role,
            authorized_pages: Some(pages.iter().map(|p| page(p)).collect()),
        }
    }

    pub fn page(id: &str) -> FacebookPage {
        FacebookPage {
            id: id.into(),
            name: format!("Página {}", id),
            category: None,
            link: None,
        }
    }

    pub fn has(commands: &[Command], pred: impl Fn(&Command) -> bool) -> bool {
        commands.iter().any(pred)
    }
}
