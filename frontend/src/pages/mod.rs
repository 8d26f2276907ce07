pub mod ads;
pub mod analytics;
pub mod earnings;
pub mod home;
pub mod upload;
pub mod watch;
