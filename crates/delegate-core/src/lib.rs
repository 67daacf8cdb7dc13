pub mod authority;
pub mod calendar;
pub mod delegation;
pub mod error;
pub mod io;
pub mod matching;
pub mod paths;
pub mod record;
pub mod score;
pub mod stakeholder;
pub mod types;

pub use error::{DelegateError, Result};
