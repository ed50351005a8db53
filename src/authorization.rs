//! Who may see and edit what.
//!
//! ADMIN has access to every Facebook page and the per-user page list is not
//! enforced for it.  Every other role needs an explicit, non-empty list of
//! authorized pages.

use crate::errors::FormError;
use crate::models::{FacebookPage, Role, User};

/// User management (list, create, edit, delete) is ADMIN-only.
pub fn can_manage_users(role: Option<Role>) -> bool {
    role == Some(Role::Admin)
}

/// Only ADMIN may replace the Facebook access token used by the backend.
pub fn can_configure_facebook_token(role: Option<Role>) -> bool {
    role == Some(Role::Admin)
}

/// The page checklist of the user form is read-only for ADMIN.
pub fn page_selection_locked(role: Role) -> bool {
    role == Role::Admin
}

/// Whether a checkbox in the page checklist renders as checked.  ADMIN rows
/// are forced on.
pub fn page_checked(role: Role, selected: &[String], page_id: &str) -> bool {
    page_selection_locked(role) || selected.iter().any(|id| id == page_id)
}

/// Page part of the user form validation.
pub fn validate_page_selection(role: Role, selected: &[String]) -> Result<(), FormError> {
    if role != Role::Admin && selected.is_empty() {
        return Err(FormError::NoPagesSelected);
    }
    Ok(())
}

/// Whether the submit button of the user form is enabled.
pub fn can_submit_user_form(role: Role, selected: &[String], saving: bool) -> bool {
    !saving && validate_page_selection(role, selected).is_ok()
}

/// List-membership check for a single page.
pub fn can_view_page(user: &User, page_id: &str) -> bool {
    if user.is_admin() {
        return true;
    }
    user.authorized_pages
        .as_deref()
        .unwrap_or_default()
        .iter()
        .any(|p| p.id == page_id)
}

/// Narrow `pages` down to those `user` is allowed to see.
pub fn visible_pages<'a>(user: &User, pages: &'a [FacebookPage]) -> Vec<&'a FacebookPage> {
    pages.iter().filter(|p| can_view_page(user, &p.id)).collect()
}

/// Toggle `page_id` in `selected`, keeping the order in which pages were
/// picked.
pub fn toggle_page(selected: &mut Vec<String>, page_id: &str) {
    if let Some(pos) = selected.iter().position(|id| id == page_id) {
        selected.remove(pos);
    } else {
        selected.push(page_id.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn page(id: &str) -> FacebookPage {
        FacebookPage {
            id: id.into(),
            name: format!("Página {}", id),
            category: None,
            link: None,
        }
    }

    fn user(role: Role, pages: &[&str]) -> User {
        User {
            id: 3,
            username: "bia".into(),
            email: "bia@example.com".into(),
            role,
            authorized_pages: Some(pages.iter().map(|id| page(id)).collect()),
        }
    }

    #[test]
    fn non_admin_with_no_pages_is_rejected() {
        for role in [Role::GestorDeLives, Role::EquipeDeProducao] {
            assert_eq!(
                validate_page_selection(role, &[]),
                Err(FormError::NoPagesSelected)
            );
            assert!(!can_submit_user_form(role, &[], false));
            assert!(can_submit_user_form(role, &["p1".into()], false));
        }
    }

    #[test]
    fn admin_always_passes_and_checklist_is_locked() {
        assert!(validate_page_selection(Role::Admin, &[]).is_ok());
        assert!(can_submit_user_form(Role::Admin, &[], false));
        assert!(page_selection_locked(Role::Admin));
        assert!(page_checked(Role::Admin, &[], "anything"));
        assert!(!page_selection_locked(Role::GestorDeLives));
    }

    #[test]
    fn saving_disables_submit() {
        assert!(!can_submit_user_form(Role::Admin, &[], true));
    }

    #[test]
    fn visibility_follows_authorized_pages() {
        let pages = vec![page("p1"), page("p2"), page("p3")];

        let admin = user(Role::Admin, &[]);
        assert_eq!(visible_pages(&admin, &pages).len(), 3);

        let staff = user(Role::EquipeDeProducao, &["p2"]);
        let visible: Vec<&str> = visible_pages(&staff, &pages)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(visible, vec!["p2"]);
        assert!(!can_view_page(&staff, "p1"));
    }

    #[test]
    fn management_rights_are_admin_only() {
        assert!(can_manage_users(Some(Role::Admin)));
        assert!(!can_manage_users(Some(Role::GestorDeLives)));
        assert!(!can_manage_users(None));
        assert!(can_configure_facebook_token(Some(Role::Admin)));
        assert!(!can_configure_facebook_token(Some(Role::EquipeDeProducao)));
    }

    #[test]
    fn toggle_keeps_pick_order() {
        let mut selected = Vec::new();
        toggle_page(&mut selected, "b");
        toggle_page(&mut selected, "a");
        toggle_page(&mut selected, "c");
        toggle_page(&mut selected, "a");
        assert_eq!(selected, vec!["b".to_string(), "c".to_string()]);
    }

    fn role_strategy() -> impl Strategy<Value = Role> {
        prop_oneof![
            Just(Role::Admin),
            Just(Role::GestorDeLives),
            Just(Role::EquipeDeProducao),
        ]
    }

    proptest! {
        #[test]
        fn submission_rule_holds_for_any_selection(
            role in role_strategy(),
            selected in prop::collection::vec("[a-z0-9]{1,8}", 0..5),
        ) {
            let ok = validate_page_selection(role, &selected).is_ok();
            prop_assert_eq!(ok, role == Role::Admin || !selected.is_empty());
        }

        #[test]
        fn double_toggle_is_identity(
            initial in prop::collection::vec("[a-z]{1,4}", 0..6),
            id in "[a-z]{1,4}",
        ) {
            let mut selected: Vec<String> = Vec::new();
            for i in &initial {
                if !selected.contains(i) {
                    selected.push(i.clone());
                }
            }
            let before = selected.clone();
            toggle_page(&mut selected, &id);
            toggle_page(&mut selected, &id);
            let mut a = before.clone();
            let mut b = selected.clone();
            a.sort();
            b.sort();
            prop_assert_eq!(a, b);
        }
    }
}
