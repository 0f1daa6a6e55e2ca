pub mod dashboard;
pub mod help;
pub mod login;
pub mod register;
