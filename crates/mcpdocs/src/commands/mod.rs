pub mod components;
pub mod init;
pub mod map;
pub mod serve;
