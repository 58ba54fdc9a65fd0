mod get_movie_info;
mod get_movie_list;
mod get_movies_by_genre;
mod get_movies_by_year;
mod util;

pub use get_movie_info::*;
pub use get_movie_list::*;
pub use get_movies_by_genre::*;
pub use get_movies_by_year::*;
pub use util::*;
