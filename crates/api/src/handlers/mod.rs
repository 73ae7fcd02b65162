pub mod testing;
pub mod videos;
