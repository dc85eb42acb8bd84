// HTTP routes
pub mod health;
pub mod resources;
pub mod topics;

pub use health::*;
pub use resources::*;
pub use topics::*;
