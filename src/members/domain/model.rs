use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::core::domain::Identifiable;
use crate::core::library::{BOOK_NOT_AVAILABLE, ITEM_NOT_AVAILABLE, ITEM_NOT_BORROWED, ITEM_NOT_FOUND, NO_BORROWED_ITEMS};
use crate::core::repository::Repository;
use crate::items::domain::Borrowable;
use crate::items::domain::model::LibraryItem;

// LibraryMember abstracts a registered borrower. Borrowed items are kept as ids
// into the catalogue's item repository, oldest first.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LibraryMember {
    member_id: String,
    name: String,
    borrowed_item_ids: Vec<String>,
}

impl LibraryMember {
    pub fn new(name: &str, member_id: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
            name: name.to_string(),
            borrowed_item_ids: vec![],
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn borrowed_item_ids(&self) -> &[String] {
        &self.borrowed_item_ids
    }

    pub fn summary(&self) -> String {
        format!("Member: {} ({})", self.name, self.member_id)
    }

    pub fn borrow_item(&mut self, item: &mut dyn Borrowable) -> String {
        if !item.is_available() {
            debug!(member_id = self.member_id.as_str(), item_id = item.id().as_str(), "{}", ITEM_NOT_AVAILABLE);
            return ITEM_NOT_AVAILABLE.to_string();
        }
        let msg = item.borrow(self.name.as_str());
        if msg != ITEM_NOT_AVAILABLE && msg != BOOK_NOT_AVAILABLE {
            self.borrowed_item_ids.push(item.id());
        }
        msg
    }

    pub fn return_item(&mut self, item_id: &str, items: &mut dyn Repository<LibraryItem>) -> String {
        let Some(idx) = self.borrowed_item_ids.iter().position(|id| id == item_id) else {
            debug!(member_id = self.member_id.as_str(), item_id, "{}", ITEM_NOT_BORROWED);
            return ITEM_NOT_BORROWED.to_string();
        };
        let Some(item) = items.get_mut(item_id) else {
            return ITEM_NOT_FOUND.to_string();
        };
        let msg = item.return_item();
        self.borrowed_item_ids.remove(idx);
        msg
    }

    pub fn list_borrowed_items(&self, items: &dyn Repository<LibraryItem>) -> String {
        if self.borrowed_item_ids.is_empty() {
            return NO_BORROWED_ITEMS.to_string();
        }
        self.borrowed_item_ids.iter()
            .filter_map(|id| items.get(id.as_str()))
            .map(|item| item.details())
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl Identifiable for LibraryMember {
    fn id(&self) -> String {
        self.member_id.to_string()
    }
}
