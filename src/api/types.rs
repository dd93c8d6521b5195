//! Wire types for the movie API.
//!
//! Field names follow the server's JSON. Response types are lenient: missing
//! fields take their default, unknown fields are kept in `extra` where the
//! record is passed back to callers unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::session::{SecureString, UserRecord};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Genre {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Description", default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Director {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Bio", default)]
    pub bio: String,
    #[serde(rename = "Birth", default, skip_serializing_if = "Option::is_none")]
    pub birth: Option<String>,
    #[serde(rename = "Death", default, skip_serializing_if = "Option::is_none")]
    pub death: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Description", default)]
    pub description: String,
    #[serde(rename = "Genre", default)]
    pub genre: Genre,
    #[serde(rename = "Director", default)]
    pub director: Director,
    #[serde(rename = "ImagePath", alias = "imageUrl", default)]
    pub image_url: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of a successful login.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub user: UserRecord,
    #[serde(default)]
    pub token: SecureString,
}

/// Login credentials, sent as query parameters.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecureString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<SecureString>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub(crate) fn query_pairs(&self) -> [(&'static str, &str); 2] {
        [
            ("Username", self.username.as_str()),
            ("Password", self.password.expose()),
        ]
    }
}

/// New account details for `POST /users`.
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Password")]
    pub password: SecureString,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Birthday", skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
}

/// Profile fields for `PUT /users/{username}`. Unset fields are not sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(rename = "Username", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(rename = "Password", skip_serializing_if = "Option::is_none")]
    pub password: Option<SecureString>,
    #[serde(rename = "Email", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "Birthday", skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.password.is_none()
            && self.email.is_none()
            && self.birthday.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_reads_nested_genre_and_director() {
        let json = r#"{
            "_id": "m1",
            "Title": "Heat",
            "Description": "Cops and robbers.",
            "Genre": {"Name": "Crime", "Description": "Crime films."},
            "Director": {"Name": "Michael Mann", "Bio": "Director.", "Birth": "1943"},
            "ImagePath": "heat.png",
            "Featured": true
        }"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.title, "Heat");
        assert_eq!(movie.genre.name, "Crime");
        assert_eq!(movie.director.birth.as_deref(), Some("1943"));
        assert_eq!(movie.image_url, "heat.png");
        assert_eq!(movie.extra.get("Featured"), Some(&Value::Bool(true)));
    }

    #[test]
    fn profile_update_skips_unset_fields() {
        let update = ProfileUpdate {
            email: Some("new@example.com".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"Email": "new@example.com"}));
        assert!(!update.is_empty());
        assert!(ProfileUpdate::default().is_empty());
    }

    #[test]
    fn registration_uses_server_field_names() {
        let details = Registration {
            username: "ann".into(),
            password: "pw".into(),
            email: "ann@example.com".into(),
            birthday: None,
        };
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"Username": "ann", "Password": "pw", "Email": "ann@example.com"})
        );
    }

    #[test]
    fn login_response_tolerates_missing_fields() {
        let login: LoginResponse = serde_json::from_str("{}").unwrap();
        assert!(login.token.is_empty());
        assert!(login.user.is_empty());
    }
}
