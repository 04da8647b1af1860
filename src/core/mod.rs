pub mod add;
pub mod backup;
pub mod edit;
pub mod export;
pub mod history;
