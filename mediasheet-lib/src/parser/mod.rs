pub mod media;
pub mod scanner;
pub mod width;
