mod movie_repository;
#[cfg(test)]
pub(crate) mod test_support;

pub use movie_repository::*;
