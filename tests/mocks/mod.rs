pub mod mock_book_store;

pub use mock_book_store::MockBookStore;
