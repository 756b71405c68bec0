pub mod posters;
pub mod recommendations;
pub mod showcase;

pub use posters::{PosterProvider, TmdbPosterProvider};
pub use recommendations::{recommend, RECOMMENDATION_COUNT};
pub use showcase::build_showcase;
