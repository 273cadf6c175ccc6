mod r#move;
mod role;
mod square;

pub use r#move::*;
pub use role::*;
pub use square::*;
