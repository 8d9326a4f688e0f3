//! MIME mapping module
//!
//! Provides the content-type mapping value type and the built-in
//! pattern -> MIME type table.

mod mapping;
pub mod table;

pub use mapping::ContentTypeMapping;
pub use table::built_in_mappings;
