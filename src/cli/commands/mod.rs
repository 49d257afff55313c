pub mod chat;
pub mod clear;
pub mod init;
pub mod show;
pub mod tables;
