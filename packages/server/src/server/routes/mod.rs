// HTTP routes
pub mod health;
pub mod keywords;
pub mod search;
pub mod websites;

pub use health::*;
pub use keywords::*;
pub use search::*;
pub use websites::*;
