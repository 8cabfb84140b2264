pub mod diagnostics;
pub mod generate;
pub mod list;
pub mod schema;
