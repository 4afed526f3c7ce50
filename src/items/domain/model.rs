use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use crate::core::domain::Identifiable;
use crate::core::library::{BOOK_NOT_AVAILABLE, ItemKind};
use crate::items::domain::Borrowable;

// ItemDetails carries the fields that only one kind of item has.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum ItemDetails {
    Book {
        author: String,
    },
    Magazine {
        issue_date: String,
    },
    Dvd {
        duration_mins: u32,
    },
}

// LibraryItem abstracts a single borrowable copy in the catalogue. Availability
// only changes through borrow, return or set_available.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LibraryItem {
    item_id: String,
    title: String,
    available: bool,
    details: ItemDetails,
}

impl LibraryItem {
    pub fn new(title: &str, item_id: &str, details: ItemDetails) -> Self {
        Self {
            item_id: item_id.to_string(),
            title: title.to_string(),
            available: true,
            details,
        }
    }

    pub fn book(title: &str, item_id: &str, author: &str) -> Self {
        Self::new(title, item_id, ItemDetails::Book { author: author.to_string() })
    }

    pub fn magazine(title: &str, item_id: &str, issue_date: &str) -> Self {
        Self::new(title, item_id, ItemDetails::Magazine { issue_date: issue_date.to_string() })
    }

    pub fn dvd(title: &str, item_id: &str, duration_mins: u32) -> Self {
        Self::new(title, item_id, ItemDetails::Dvd { duration_mins })
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn kind(&self) -> ItemKind {
        match self.details {
            ItemDetails::Book { .. } => ItemKind::Book,
            ItemDetails::Magazine { .. } => ItemKind::Magazine,
            ItemDetails::Dvd { .. } => ItemKind::Dvd,
        }
    }

    /// Sets availability explicitly. A value equal to the current one is
    /// reported with a warning and otherwise ignored.
    pub fn set_available(&mut self, available: bool) {
        if self.available && available {
            warn!("Item {} is already available", self.title);
            return;
        }
        if !self.available && !available {
            warn!("Item {} is already borrowed", self.title);
            return;
        }
        self.available = available;
        info!("Status updated: {} is now {}", self.title,
            if available { "available" } else { "unavailable" });
    }

    fn returned_message(&self) -> String {
        format!("{} {} returned", self.kind(), self.title)
    }
}

impl Identifiable for LibraryItem {
    fn id(&self) -> String {
        self.item_id.to_string()
    }
}

impl Borrowable for LibraryItem {
    fn borrow(&mut self, member_name: &str) -> String {
        if !self.available {
            return BOOK_NOT_AVAILABLE.to_string();
        }
        self.available = false;
        info!(item_id = self.item_id.as_str(), "{} {} borrowed by {}", self.kind(), self.title, member_name);
        format!("{} {} borrowed by {}", self.kind(), self.title, member_name)
    }

    // Returning an item that is already on the shelf answers the same way as a real return.
    fn return_item(&mut self) -> String {
        if !self.available {
            self.available = true;
            info!(item_id = self.item_id.as_str(), "{} {} returned", self.kind(), self.title);
        }
        self.returned_message()
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn details(&self) -> String {
        match &self.details {
            ItemDetails::Book { author } => {
                format!("Book: {} by {} (ID: {})", self.title, author, self.item_id)
            }
            ItemDetails::Magazine { issue_date } => {
                format!("Magazine: {} (Issue: {}, ID: {})", self.title, issue_date, self.item_id)
            }
            ItemDetails::Dvd { duration_mins } => {
                format!("DVD: {} ({} mins, ID: {})", self.title, duration_mins, self.item_id)
            }
        }
    }
}
