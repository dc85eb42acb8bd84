// Domain modules

pub mod resources;
pub mod topics;
