//! Command implementations.

pub mod check;
pub mod labels;
pub mod parse;

pub use self::check::execute_check;
pub use self::labels::execute_labels;
pub use self::parse::execute_parse;
