pub mod item;
pub mod repository;

pub use item::{Item, ItemPatch};
pub use repository::ItemRepository;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ItemError {
    #[error("Name is required")]
    NameRequired,
    #[error("Item not found")]
    NotFound,
}

pub type ItemResult<T> = Result<T, ItemError>;
