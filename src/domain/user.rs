use std::fmt;

use crate::error::RegistryError;

/// Gender of a registered user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gender {
    Male,
    Female,
    #[default]
    Other,
}

impl Gender {
    /// Maps the generator's raw gender string. Anything unrecognised is `Other`.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "male" => Gender::Male,
            "female" => Gender::Female,
            _ => Gender::Other,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Other => "OTHER",
        };
        f.write_str(label)
    }
}

/// Represents a registered user in the system.
///
/// Two users are equal when their usernames are equal; the descriptive
/// fields do not take part in identity.
#[derive(Debug, Clone)]
pub struct User {
    username: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub gender: Gender,
    pub picture: Option<String>,
}

impl User {
    /// Creates a new User with only its username set.
    ///
    /// # Errors
    /// Returns [`RegistryError::InvalidInput`] when the username is blank.
    pub fn new(username: impl Into<String>) -> Result<Self, RegistryError> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(RegistryError::InvalidInput(
                "username must not be empty".to_string(),
            ));
        }
        Ok(Self {
            username,
            name: None,
            email: None,
            gender: Gender::default(),
            picture: None,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_picture(mut self, picture: impl Into<String>) -> Self {
        self.picture = Some(picture.into());
        self
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Copies every descriptive field from `other`. The username is never touched.
    pub fn apply_update(&mut self, other: &User) {
        self.name = other.name.clone();
        self.email = other.email.clone();
        self.gender = other.gender;
        self.picture = other.picture.clone();
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.username == other.username
    }
}

impl Eq for User {}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "username: {}; name: {}; email: {}; gender: {}; picture: {}",
            self.username,
            self.name.as_deref().unwrap_or("-"),
            self.email.as_deref().unwrap_or("-"),
            self.gender,
            self.picture.as_deref().unwrap_or("-"),
        )
    }
}
