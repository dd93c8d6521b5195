//! Title + text popups for genre, director, and synopsis details.

use crate::api::{Director, Genre};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailDialog {
    pub title: String,
    pub content: String,
}

impl DetailDialog {
    pub fn genre(genre: &Genre) -> Self {
        Self {
            title: genre.name.clone(),
            content: genre.description.clone(),
        }
    }

    pub fn director(director: &Director) -> Self {
        Self {
            title: director.name.clone(),
            content: director.bio.clone(),
        }
    }

    pub fn synopsis(text: &str) -> Self {
        Self {
            title: "Description".to_string(),
            content: text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn director_dialog_uses_name_and_bio() {
        let director = Director {
            name: "Agnès Varda".into(),
            bio: "French director.".into(),
            ..Default::default()
        };
        let dialog = DetailDialog::director(&director);
        assert_eq!(dialog.title, "Agnès Varda");
        assert_eq!(dialog.content, "French director.");
    }

    #[test]
    fn synopsis_dialog_has_fixed_title() {
        let dialog = DetailDialog::synopsis("A heist goes wrong.");
        assert_eq!(dialog.title, "Description");
    }
}
