pub mod config;
pub mod last;
pub mod options;
pub mod resolve;
pub mod select;

pub use config::*;
pub use last::*;
pub use options::*;
pub use resolve::*;
pub use select::*;
