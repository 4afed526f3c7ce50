use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::ItemKind;
use crate::items::domain::Borrowable;
use crate::items::domain::model::LibraryItem;

// ItemDto is a data transfer object for catalogue snapshots and events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDto {
    pub item_id: String,
    pub title: String,
    pub kind: ItemKind,
    pub available: bool,
    pub details: String,
}

impl From<&LibraryItem> for ItemDto {
    fn from(other: &LibraryItem) -> Self {
        Self {
            item_id: other.id(),
            title: other.title().to_string(),
            kind: other.kind(),
            available: other.is_available(),
            details: other.details(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::ItemKind;
    use crate::items::domain::Borrowable;
    use crate::items::domain::model::LibraryItem;
    use crate::items::dto::ItemDto;

    #[test]
    fn test_should_build_item_dto() {
        let mut dvd = LibraryItem::dvd("Inception", "D001", 148);
        let _ = dvd.borrow("Alice");
        let dto = ItemDto::from(&dvd);
        assert_eq!("D001", dto.item_id.as_str());
        assert_eq!(ItemKind::Dvd, dto.kind);
        assert!(!dto.available);
        assert_eq!("DVD: Inception (148 mins, ID: D001)", dto.details.as_str());
    }
}
