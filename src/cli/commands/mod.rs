pub mod add;
pub mod backup;
pub mod config;
pub mod db;
pub mod edit;
pub mod export;
pub mod history;
pub mod init;
pub mod reset;
pub mod skills;
pub mod summary;
