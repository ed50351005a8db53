//! Client-side session: the bearer credential plus the resolved profile.
//!
//! The session is a plain value owned by `AppState`.  Persisting the token and
//! talking to the backend are side effects performed by the command executor;
//! everything here is pure so the lifecycle rules can be unit-tested.

use crate::models::{Role, User};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    token: Option<String>,
    user: Option<User>,
}

impl Session {
    /// Rebuild the session from a token read out of client storage.  Empty
    /// strings are treated as "no token".
    pub fn restore(stored_token: Option<String>) -> Self {
        Self {
            token: stored_token.filter(|t| !t.is_empty()),
            user: None,
        }
    }

    /// True iff a non-empty credential is held.  Whether the profile fetch
    /// succeeded does not matter.
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().map_or(false, |t| !t.is_empty())
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Whether `token` is the credential currently held.  Responses to
    /// requests made with an older credential fail this check.
    pub fn holds(&self, token: &str) -> bool {
        !token.is_empty() && self.token.as_deref() == Some(token)
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn username(&self) -> &str {
        self.user.as_ref().map(|u| u.username.as_str()).unwrap_or("")
    }

    /// Store a freshly issued credential.  Any profile belonging to a previous
    /// credential is dropped.
    pub fn begin(&mut self, token: String) {
        if self.token.as_deref() != Some(token.as_str()) {
            self.user = None;
        }
        self.token = Some(token);
    }

    /// Attach the profile resolved for the current credential.  Ignored when
    /// the session was cleared while the request was in flight.
    pub fn set_user(&mut self, user: User) -> bool {
        if !self.is_authenticated() {
            return false;
        }
        self.user = Some(user);
        true
    }

    /// Drop credential and profile.  Returns the credential that was held so
    /// the caller can still notify the backend with it.
    pub fn clear(&mut self) -> Option<String> {
        self.user = None;
        self.token.take().filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> User {
        User {
            id: 1,
            username: "ana".into(),
            email: "ana@example.com".into(),
            role,
            authorized_pages: None,
        }
    }

    #[test]
    fn authenticated_iff_token_held() {
        assert!(!Session::default().is_authenticated());
        assert!(!Session::restore(Some(String::new())).is_authenticated());

        let restored = Session::restore(Some("abc".into()));
        assert!(restored.is_authenticated());
        // No profile yet, still authenticated.
        assert!(restored.user().is_none());
    }

    #[test]
    fn clear_drops_token_and_profile() {
        let mut s = Session::default();
        s.begin("abc".into());
        assert!(s.set_user(user(Role::Admin)));
        assert_eq!(s.role(), Some(Role::Admin));

        assert_eq!(s.clear(), Some("abc".into()));
        assert!(!s.is_authenticated());
        assert!(s.user().is_none());
        assert_eq!(s.clear(), None);
    }

    #[test]
    fn late_profile_after_logout_is_ignored() {
        let mut s = Session::restore(Some("abc".into()));
        s.clear();
        assert!(!s.set_user(user(Role::GestorDeLives)));
        assert!(s.user().is_none());
    }

    #[test]
    fn holds_only_the_current_token() {
        let mut s = Session::restore(Some("old".into()));
        assert!(s.holds("old"));
        s.begin("new".into());
        assert!(!s.holds("old"));
        assert!(s.holds("new"));
        s.clear();
        assert!(!s.holds("new"));
        assert!(!s.holds(""));
    }

    #[test]
    fn new_token_discards_old_profile() {
        let mut s = Session::default();
        s.begin("one".into());
        s.set_user(user(Role::Admin));
        s.begin("two".into());
        assert!(s.user().is_none());
        assert_eq!(s.token(), Some("two"));
    }
}
