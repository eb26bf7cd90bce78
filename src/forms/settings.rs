//! Profile form on the settings screen.

use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileForm {
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: String,
    /// Optional; validated as an Indian number by the domain layer when set.
    #[serde(default)]
    pub phone: String,
}
