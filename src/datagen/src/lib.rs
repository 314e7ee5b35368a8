pub mod catalog;
pub mod choice;
pub mod dimensions;
pub mod docs;
pub mod error;
pub mod facts;
pub mod seed;

pub use dimensions::generate_dimensions;
pub use docs::generate_documents;
pub use facts::generate_facts;
