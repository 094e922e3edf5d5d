mod names;

pub use names::*;
