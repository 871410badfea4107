pub mod config;
pub mod icons;
pub mod page_frame;
