use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::{trim, Entity, Submission};

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Amenity {
    pub id: i64,
    pub name: String,
    pub version: i64,
}

impl Entity for Amenity {
    type Key = i64;
    type Form = AmenityForm;

    const NAME: &'static str = "amenity";

    fn key(&self) -> i64 {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AmenityForm {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Name is required (at most 100 characters)."))]
    pub name: String,
    #[serde(default)]
    pub version: i64,
    #[serde(default)]
    pub csrf_token: String,
}

impl Submission for AmenityForm {
    fn normalized(mut self) -> Self {
        self.name = trim(self.name);
        self
    }

    fn csrf_token(&self) -> &str {
        &self.csrf_token
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl From<&Amenity> for AmenityForm {
    fn from(amenity: &Amenity) -> Self {
        Self {
            id: Some(amenity.id),
            name: amenity.name.clone(),
            version: amenity.version,
            csrf_token: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_fails_after_trimming() {
        let form = AmenityForm {
            name: "   ".into(),
            ..Default::default()
        }
        .normalized();

        assert_eq!(form.name, "");
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn name_is_trimmed() {
        let form = AmenityForm {
            name: "  WiFi ".into(),
            ..Default::default()
        }
        .normalized();

        assert_eq!(form.name, "WiFi");
        assert!(form.validate().is_ok());
    }
}
