pub mod no_access;
pub mod signed_out;

pub use no_access::NoAccessPage;
pub use signed_out::SignedOutPage;
