mod node;
mod value;

pub use node::*;
pub use value::*;
