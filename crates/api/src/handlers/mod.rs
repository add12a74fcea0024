pub mod guests;
pub mod health;
pub mod jobs;
pub mod posters;
pub mod upload;
