pub mod deployment;
pub mod entry;
pub mod lenient;
pub mod list;
pub mod pair;
pub mod price;
