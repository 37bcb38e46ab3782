use crate::domain::{Gender, User};
use crate::error::RegistryError;

/// One record produced by the external user generator.
///
/// Only the fields the registry keeps are projected; the raw gender string is
/// mapped when the record is converted into a [`User`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratedUser {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: String,
    pub picture: String,
}

impl GeneratedUser {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Self::default()
        }
    }

    fn full_name(&self) -> Option<String> {
        let full = format!("{} {}", self.first_name, self.last_name);
        let trimmed = full.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

impl TryFrom<GeneratedUser> for User {
    type Error = RegistryError;

    fn try_from(generated: GeneratedUser) -> Result<Self, Self::Error> {
        let name = generated.full_name();
        let gender = Gender::from_raw(&generated.gender);
        let mut user = User::new(generated.username).map_err(|_| {
            RegistryError::UpstreamMalformed("generated user has no username".to_string())
        })?;
        user.name = name;
        user.email = (!generated.email.is_empty()).then_some(generated.email);
        user.picture = (!generated.picture.is_empty()).then_some(generated.picture);
        user.gender = gender;
        Ok(user)
    }
}
