use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

// Sentinel replies returned by borrow/return operations instead of errors.
pub const BOOK_NOT_AVAILABLE: &str = "Book not available";
pub const ITEM_NOT_AVAILABLE: &str = "Item not available";
pub const ITEM_NOT_FOUND: &str = "Item not found";
pub const MEMBER_NOT_FOUND: &str = "Member not found";
pub const ITEM_NOT_BORROWED: &str = "Item not found in member's borrowed list";
pub const NO_BORROWED_ITEMS: &str = "No borrowed items";
pub const NO_ITEMS: &str = "No items";
pub const NO_MEMBERS: &str = "No members";

#[derive(Debug)]
pub enum LibraryError {
    DuplicateKey {
        message: String,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for catalogue operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum ItemKind {
    Book,
    Magazine,
    Dvd,
}

impl Display for ItemKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ItemKind::Book => write!(f, "Book"),
            ItemKind::Magazine => write!(f, "Magazine"),
            ItemKind::Dvd => write!(f, "DVD"),
        }
    }
}
