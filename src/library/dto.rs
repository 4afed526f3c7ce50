use serde::{Deserialize, Serialize};
use crate::items::dto::ItemDto;
use crate::members::dto::MemberDto;

// LibrarySnapshot is a serializable view of the whole catalogue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibrarySnapshot {
    pub branch_id: String,
    pub items: Vec<ItemDto>,
    pub members: Vec<MemberDto>,
}

impl LibrarySnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
