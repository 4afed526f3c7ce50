use crate::core::domain::Identifiable;

pub mod model;

// Borrowable is the lending contract shared by every catalogue item.
pub trait Borrowable: Identifiable {
    fn borrow(&mut self, member_name: &str) -> String;
    fn return_item(&mut self) -> String;
    fn is_available(&self) -> bool;
    fn details(&self) -> String;
}
