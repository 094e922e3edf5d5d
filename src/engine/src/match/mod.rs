pub mod bases;
pub mod engine;
pub mod inning;
pub mod outcome;
pub mod result;
pub mod squad;
pub mod strategy;

pub use bases::*;
pub use engine::*;
pub use inning::*;
pub use outcome::*;
pub use result::*;
pub use squad::*;
pub use strategy::*;
