pub mod leaders;
pub mod league;
pub mod result;
pub mod runner;
pub mod schedule;
pub mod settings;
pub mod table;
pub mod transfer;

pub use leaders::*;
pub use league::*;
pub use result::*;
pub use runner::*;
pub use schedule::*;
pub use settings::*;
pub use table::*;
pub use transfer::*;
