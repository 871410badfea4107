pub mod access;
pub mod pages;
pub mod session;
