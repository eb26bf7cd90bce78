//! Status update form posted from the applications table.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateStatusForm {
    pub id: i32,
    /// Target status token, parsed and checked by the service.
    pub status: String,
}
