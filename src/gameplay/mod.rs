pub mod action;
pub use action::*;

pub mod blinds;
pub use blinds::*;

pub mod dealer;
pub use dealer::*;

pub mod decider;
pub use decider::*;

pub mod game;
pub use game::*;

pub mod player;
pub use player::*;

pub mod position;
pub use position::*;

pub mod pot;
pub use pot::*;

pub mod round;
pub use round::*;

pub mod showdown;
pub use showdown::*;

pub mod spot;
pub use spot::*;
