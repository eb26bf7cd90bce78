//! DTOs for the settings screen.

use serde::Serialize;

use crate::domain::user::DashboardUser;
use crate::dto::ROW_DATE_FORMAT;

#[derive(Debug, Serialize)]
pub struct ProfileView {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: String,
    pub role_label: String,
    pub partner_id: Option<i32>,
    pub joined_at: String,
}

impl From<&DashboardUser> for ProfileView {
    fn from(user: &DashboardUser) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            role: user.role.as_str().to_string(),
            role_label: user.role.label().to_string(),
            partner_id: user.partner_id,
            joined_at: user.joined_at.format(ROW_DATE_FORMAT).to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SettingsPageData {
    pub profile: ProfileView,
}
