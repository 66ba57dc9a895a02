pub mod error;
pub mod identity;
pub mod seed;
pub mod time;
pub mod validator;

mod session;

pub use error::{Error, Result};
pub use identity::Identity;
pub use model;
pub use session::Session;
pub use time::{format_time_left, TimeLeft};
