pub mod calculator;
pub use calculator::*;

pub mod error;
pub use error::*;

pub mod estimate;
pub use estimate::*;

pub mod tally;
pub use tally::*;

pub mod verdict;
pub use verdict::*;
