pub mod byte_source;
pub mod square_image;
