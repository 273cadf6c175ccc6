mod controller;
mod decision;
mod engine;
mod error;
mod limits;
mod replay;

pub use controller::*;
pub use decision::*;
pub use engine::*;
pub use error::*;
pub use limits::*;
pub use replay::*;
