pub mod gray_bitmap;
pub mod square_grid;
