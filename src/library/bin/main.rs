use std::error::Error;
use library_catalogue::core::domain::Configuration;
use library_catalogue::gateway::GatewayPublisherVia;
use library_catalogue::gateway::memory::publisher::MemoryPublisher;
use library_catalogue::items::domain::model::LibraryItem;
use library_catalogue::library::domain::LibraryService;
use library_catalogue::library::domain::service::Library;
use library_catalogue::members::domain::model::LibraryMember;
use library_catalogue::utils::logs::setup_tracing;

fn main() -> Result<(), Box<dyn Error>> {
    let config = Configuration::from_env();
    setup_tracing(&config);

    let outbox = MemoryPublisher::new();
    let mut library = if config.publisher == GatewayPublisherVia::Memory {
        Library::with_publisher(&config, Box::new(outbox.clone()))
    } else {
        Library::new(&config)
    };

    library.add_item(LibraryItem::book("Harry Potter", "B001", "J.K. Rowling"))?;
    library.add_member(LibraryMember::new("Alice", "MEM001"))?;
    library.add_member(LibraryMember::new("fern", "MEM002"))?;

    println!("{}", library.borrow_item("MEM001", "B001"));
    println!("{}", library.borrow_item("MEM002", "B001"));
    println!("{}", library.list_borrowed_items("MEM001"));
    println!("{}", library.list_borrowed_items("MEM002"));
    println!("{}", library.return_item("MEM001", "B001"));
    println!();
    println!("{}", library.library_summary());

    if config.publisher == GatewayPublisherVia::Memory {
        println!();
        println!("{}", library.snapshot().to_json()?);
        println!("{}", serde_json::to_string_pretty(&outbox.events())?);
    }
    Ok(())
}
