pub mod health;
pub mod image_detail;
pub mod image_list;
pub mod image_upload;
pub mod stats;
pub mod thumbnails;
