pub mod service;

use crate::core::library::LibraryResult;
use crate::items::domain::model::LibraryItem;
use crate::library::dto::LibrarySnapshot;
use crate::members::domain::model::LibraryMember;

// LibraryService registers items and members and routes borrow/return requests.
// Registration failures are errors; lending outcomes are reported as text.
pub trait LibraryService {
    fn add_item(&mut self, item: LibraryItem) -> LibraryResult<()>;
    fn add_member(&mut self, member: LibraryMember) -> LibraryResult<()>;
    fn find_item_by_id(&self, item_id: &str) -> Option<&LibraryItem>;
    fn find_member_by_id(&self, member_id: &str) -> Option<&LibraryMember>;
    fn borrow_item(&mut self, member_id: &str, item_id: &str) -> String;
    fn return_item(&mut self, member_id: &str, item_id: &str) -> String;
    fn list_borrowed_items(&self, member_id: &str) -> String;
    fn library_summary(&self) -> String;
    fn snapshot(&self) -> LibrarySnapshot;
}
