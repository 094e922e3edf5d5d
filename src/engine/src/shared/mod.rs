pub mod fullname;
pub mod random;

pub use fullname::*;
pub use random::*;
