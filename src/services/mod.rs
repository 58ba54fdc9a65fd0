mod movie_service;
mod ratings_service;
mod types;
mod util;

pub use movie_service::*;
pub use ratings_service::*;
pub use types::*;
pub use util::*;
