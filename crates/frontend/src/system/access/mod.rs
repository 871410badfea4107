pub mod page;
pub mod registry;
