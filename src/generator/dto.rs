//! DTOs for decoding randomuser.me responses.
//!
//! Only the fields the registry keeps are declared; everything else in the
//! payload is ignored by serde.

use serde::Deserialize;

use crate::domain::GeneratedUser;

#[derive(Debug, Deserialize)]
pub(super) struct RandomUserResponseDto {
    pub(super) results: Option<Vec<RandomUserDto>>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RandomUserDto {
    #[serde(default)]
    pub(super) gender: String,
    #[serde(default)]
    pub(super) name: NameDto,
    #[serde(default)]
    pub(super) email: String,
    pub(super) login: Option<LoginDto>,
    #[serde(default)]
    pub(super) picture: PictureDto,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct NameDto {
    #[serde(default)]
    pub(super) first: String,
    #[serde(default)]
    pub(super) last: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct LoginDto {
    pub(super) username: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct PictureDto {
    #[serde(default)]
    pub(super) medium: String,
}

impl RandomUserResponseDto {
    pub(super) fn into_generated_users(self) -> Result<Vec<GeneratedUser>, String> {
        let results = self
            .results
            .ok_or_else(|| "response has no results list".to_string())?;
        results
            .into_iter()
            .enumerate()
            .map(|(index, dto)| dto.into_generated_user(index))
            .collect()
    }
}

impl RandomUserDto {
    fn into_generated_user(self, index: usize) -> Result<GeneratedUser, String> {
        let username = self
            .login
            .and_then(|login| login.username)
            .filter(|username| !username.trim().is_empty())
            .ok_or_else(|| format!("result {index} has no login.username"))?;

        Ok(GeneratedUser {
            username,
            first_name: self.name.first,
            last_name: self.name.last,
            email: self.email,
            gender: self.gender,
            picture: self.picture.medium,
        })
    }
}
