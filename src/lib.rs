mod error;
mod node;
mod decode;
mod encode;

pub use error::*;
pub use node::*;
pub use decode::*;
pub use encode::*;

pub type BdecodeResult<T> = std::result::Result<T, BdecodeError>;
