pub mod flights;
pub mod stats;
pub mod tickets;
