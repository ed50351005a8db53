use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// API models that match the backend schema.  Field names follow the JSON
// produced by the backend (camelCase), Rust names stay snake_case.

/// Staff role as stored by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    GestorDeLives,
    EquipeDeProducao,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::GestorDeLives, Role::EquipeDeProducao];

    /// Wire value, also used as `<option value>` in the role select.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::GestorDeLives => "GESTOR_DE_LIVES",
            Role::EquipeDeProducao => "EQUIPE_DE_PRODUCAO",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrador",
            Role::GestorDeLives => "Gestor de Lives",
            Role::EquipeDeProducao => "Equipe de Produção",
        }
    }

    pub fn parse(value: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|r| r.as_str() == value)
    }
}

impl Default for Role {
    /// New accounts start with the least privileged role.
    fn default() -> Self {
        Role::EquipeDeProducao
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacebookPage {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub authorized_pages: Option<Vec<FacebookPage>>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn authorized_page_ids(&self) -> Vec<String> {
        self.authorized_pages
            .as_ref()
            .map(|pages| pages.iter().map(|p| p.id.clone()).collect())
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveVideo {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub creation_time: Option<serde_json::Value>,
    #[serde(default)]
    pub view_count: Option<u64>,
    #[serde(default)]
    pub comment_count: Option<u64>,
    #[serde(default)]
    pub share_count: Option<u64>,
}

impl LiveVideo {
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(t) if !t.trim().is_empty() => t,
            _ => "Sem título",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommentAuthor {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// A comment on a live video.
///
/// The backend has two shapes for the author: the stored comment carries flat
/// `fromName`/`fromId`, the Graph API passthrough nests it under `from`.  Both
/// are accepted; use [`Comment::author_name`] instead of the raw fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub from_name: Option<String>,
    #[serde(default)]
    pub from_id: Option<String>,
    #[serde(default)]
    pub from: Option<CommentAuthor>,
    #[serde(default)]
    pub created_time: Option<serde_json::Value>,
}

impl Comment {
    pub fn author_name(&self) -> Option<&str> {
        self.from_name
            .as_deref()
            .or_else(|| self.from.as_ref().and_then(|f| f.name.as_deref()))
            .filter(|n| !n.trim().is_empty())
    }

    pub fn author_id(&self) -> Option<&str> {
        self.from_id
            .as_deref()
            .or_else(|| self.from.as_ref().and_then(|f| f.id.as_deref()))
    }
}

/// One row of the aggregated dashboard.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetric {
    /// `None` when the backend sent no date or one that cannot be read.  The
    /// row is still listed.
    #[serde(default, deserialize_with = "crate::metrics::deserialize_metric_date")]
    pub date: Option<NaiveDate>,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, deserialize_with = "crate::metrics::null_as_zero")]
    pub total_views: u64,
    #[serde(default, deserialize_with = "crate::metrics::null_as_zero")]
    pub total_comments: u64,
    #[serde(default, deserialize_with = "crate::metrics::null_as_zero")]
    pub total_shares: u64,
}

// ---------------------------------------------------------------------------
// Request / response bodies
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Body of `POST /auth/authenticate`.  Older backends used `access_token`.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    #[serde(alias = "access_token")]
    pub token: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreateRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub authorized_page_ids: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorized_page_ids: Option<Vec<String>>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacebookTokenRequest<'a> {
    pub access_token: &'a str,
}

#[derive(Clone, Debug, Serialize)]
pub struct VideoUrlRequest<'a> {
    pub url: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_with_null_authorized_pages() {
        let user: User = serde_json::from_value(json!({
            "id": 7,
            "username": "ana",
            "email": "ana@example.com",
            "role": "GESTOR_DE_LIVES",
            "authorizedPages": null
        }))
        .unwrap();
        assert_eq!(user.role, Role::GestorDeLives);
        assert!(user.authorized_page_ids().is_empty());
        assert!(!user.is_admin());
    }

    #[test]
    fn comment_author_from_either_shape() {
        let flat: Comment = serde_json::from_value(json!({
            "id": "c1", "message": "oi", "fromName": "Maria Silva", "fromId": "42"
        }))
        .unwrap();
        assert_eq!(flat.author_name(), Some("Maria Silva"));
        assert_eq!(flat.author_id(), Some("42"));

        let nested: Comment = serde_json::from_value(json!({
            "id": "c2", "message": "olá", "from": { "id": "9", "name": "João" }
        }))
        .unwrap();
        assert_eq!(nested.author_name(), Some("João"));

        let anonymous: Comment =
            serde_json::from_value(json!({ "id": "c3", "fromName": "  " })).unwrap();
        assert_eq!(anonymous.author_name(), None);
    }

    #[test]
    fn auth_response_accepts_legacy_field() {
        let a: AuthResponse = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
        let b: AuthResponse = serde_json::from_str(r#"{"access_token":"abc"}"#).unwrap();
        assert_eq!(a.token, b.token);
    }

    #[test]
    fn update_request_skips_blank_fields() {
        let req = UserUpdateRequest {
            username: Some("ana".into()),
            role: Some(Role::Admin),
            ..Default::default()
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v, json!({ "username": "ana", "role": "ADMIN" }));
    }

    #[test]
    fn role_round_trips_through_select_value() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("SUPERUSER"), None);
    }
}
