//! Topic domain models

pub mod topic;

pub use topic::Topic;
