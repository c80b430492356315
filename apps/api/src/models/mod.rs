pub mod application;
pub mod blog;
pub mod company;
pub mod job;
pub mod master;
