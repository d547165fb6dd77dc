pub mod error;
pub mod id;
pub mod result;
pub mod storage;

pub use error::*;
pub use id::*;
pub use result::*;
pub use storage::*;
