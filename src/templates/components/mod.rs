pub mod home_card;
pub mod star_rating;

pub use home_card::home_card;
pub use star_rating::star_rating;
