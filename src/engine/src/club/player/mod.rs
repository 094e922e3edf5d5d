pub mod attributes;
pub mod builder;
pub mod collection;
pub mod injury;
pub mod player;
pub mod skills;
pub mod statistics;
pub mod training;

pub use attributes::*;
pub use builder::*;
pub use collection::*;
pub use injury::*;
pub use player::*;
pub use skills::*;
pub use statistics::*;
pub use training::*;
