pub mod cost;
pub mod image;
pub mod seed;
pub mod video;
