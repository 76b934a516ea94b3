pub mod browser;
pub mod invoice;
pub mod storage;

pub use browser::*;
pub use invoice::*;
pub use storage::*;
