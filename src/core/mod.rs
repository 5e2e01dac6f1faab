pub mod daemon;
pub mod worker;
