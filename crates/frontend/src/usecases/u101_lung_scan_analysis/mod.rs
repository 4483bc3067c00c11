pub mod api;
pub mod preview;
pub mod view;

pub use view::ImageUpload;
