/// Widget builders for the application views
///
/// Each function here builds one self-contained piece of the interface
/// and returns an Element wired to the application's Message type.

pub mod card;
pub mod detail;
pub mod filter;
