mod core;
mod gemv;
pub use self::gemv::*;
mod triangle;
mod types;
pub use self::types::*;
