pub mod event;
pub mod response;

pub use event::*;
pub use response::*;
