pub mod bot;
pub use bot::*;

pub mod robot;
pub use robot::*;

pub mod roster;
pub use roster::*;

pub mod style;
pub use style::*;
