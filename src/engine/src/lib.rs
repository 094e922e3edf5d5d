pub mod club;
pub mod league;
pub mod r#match;

pub mod shared;
pub mod utils;

pub use club::*;
pub use league::*;
pub use r#match::*;
pub use shared::*;
