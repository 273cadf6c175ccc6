mod candidate;
mod error;
mod info;
mod multipv;
mod pv;
mod rank;
mod reporter;
mod score;

pub use candidate::*;
pub use error::*;
pub use info::*;
pub use multipv::*;
pub use pv::*;
pub use rank::*;
pub use reporter::*;
pub use score::*;
