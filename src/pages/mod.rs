pub mod comments;
pub mod download;
pub mod facebook;
pub mod home;
pub mod login;
pub mod user_form;
pub mod users;
