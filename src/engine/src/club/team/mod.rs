pub mod collection;
pub mod draft;
pub mod lineup;
pub mod team;

pub use collection::*;
pub use draft::*;
pub use lineup::*;
pub use team::*;
