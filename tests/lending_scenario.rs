use library_catalogue::core::domain::Configuration;
use library_catalogue::core::events::DomainEventType;
use library_catalogue::core::library::{ITEM_NOT_AVAILABLE, LibraryError, NO_BORROWED_ITEMS};
use library_catalogue::gateway::memory::publisher::MemoryPublisher;
use library_catalogue::items::domain::Borrowable;
use library_catalogue::items::domain::model::LibraryItem;
use library_catalogue::library::domain::LibraryService;
use library_catalogue::library::domain::service::Library;
use library_catalogue::members::domain::model::LibraryMember;

fn build_library(outbox: &MemoryPublisher) -> Library {
    let mut library = Library::with_publisher(&Configuration::new("it"), Box::new(outbox.clone()));
    library.add_item(LibraryItem::book("Harry Potter", "B001", "J.K. Rowling")).expect("should add book");
    library.add_item(LibraryItem::magazine("National Geographic", "M001", "2024-01")).expect("should add magazine");
    library.add_item(LibraryItem::dvd("Spirited Away", "D001", 125)).expect("should add dvd");
    library.add_member(LibraryMember::new("Alice", "MEM001")).expect("should add member");
    library.add_member(LibraryMember::new("fern", "MEM002")).expect("should add member");
    library
}

#[test]
fn test_should_run_lending_scenario() {
    let outbox = MemoryPublisher::new();
    let mut library = build_library(&outbox);

    assert_eq!("Book Harry Potter borrowed by Alice", library.borrow_item("MEM001", "B001"));
    assert_eq!("Book: Harry Potter by J.K. Rowling (ID: B001)", library.list_borrowed_items("MEM001"));

    assert_eq!(ITEM_NOT_AVAILABLE, library.borrow_item("MEM002", "B001"));
    assert_eq!(NO_BORROWED_ITEMS, library.list_borrowed_items("MEM002"));

    assert_eq!("Book Harry Potter returned", library.return_item("MEM001", "B001"));
    assert_eq!(NO_BORROWED_ITEMS, library.list_borrowed_items("MEM001"));
    assert!(library.find_item_by_id("B001").expect("should find book").is_available());

    assert_eq!("Book Harry Potter borrowed by fern", library.borrow_item("MEM002", "B001"));
    let kinds: Vec<DomainEventType> = outbox.events().iter().skip(5).map(|e| e.kind).collect();
    assert_eq!(vec![DomainEventType::Borrowed, DomainEventType::Returned, DomainEventType::Borrowed], kinds);
}

#[test]
fn test_should_cycle_every_item_kind() {
    let outbox = MemoryPublisher::new();
    let mut library = build_library(&outbox);

    assert_eq!("Magazine National Geographic borrowed by fern", library.borrow_item("MEM002", "M001"));
    assert_eq!("DVD Spirited Away borrowed by fern", library.borrow_item("MEM002", "D001"));
    assert_eq!("Magazine: National Geographic (Issue: 2024-01, ID: M001)\nDVD: Spirited Away (125 mins, ID: D001)",
               library.list_borrowed_items("MEM002"));
    assert_eq!("DVD Spirited Away returned", library.return_item("MEM002", "D001"));
    assert_eq!("Magazine: National Geographic (Issue: 2024-01, ID: M001)", library.list_borrowed_items("MEM002"));
}

#[test]
fn test_should_keep_registry_after_duplicate() {
    let outbox = MemoryPublisher::new();
    let mut library = build_library(&outbox);
    let res = library.add_item(LibraryItem::book("Another", "D001", "Someone"));
    assert!(matches!(res, Err(LibraryError::DuplicateKey { .. })));
    assert_eq!("DVD: Spirited Away (125 mins, ID: D001)",
               library.find_item_by_id("D001").expect("should find dvd").details());
    assert_eq!(3, library.snapshot().items.len());
    assert_eq!(5, outbox.events().len());
}
