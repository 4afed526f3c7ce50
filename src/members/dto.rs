use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::members::domain::model::LibraryMember;

// MemberDto is a data transfer object for catalogue snapshots and events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDto {
    pub member_id: String,
    pub name: String,
    pub borrowed_item_ids: Vec<String>,
}

impl From<&LibraryMember> for MemberDto {
    fn from(other: &LibraryMember) -> Self {
        Self {
            member_id: other.id(),
            name: other.name().to_string(),
            borrowed_item_ids: other.borrowed_item_ids().to_vec(),
        }
    }
}
