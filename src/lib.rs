pub mod core {
    pub mod domain;
    pub mod events;
    pub mod library;
    pub mod repository;
}

pub mod gateway;
pub mod items;
pub mod library;
pub mod members;

pub mod utils {
    pub mod date;
    pub mod logs;
}
