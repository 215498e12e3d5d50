pub mod config;
pub mod error;

// Dashboard read models
pub mod doctor;
pub mod hospital;
pub mod patient;

pub use config::*;
pub use error::*;

pub use doctor::*;
pub use hospital::*;
pub use patient::*;
