//! HTTP request handlers.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod home;
pub mod items;
pub mod not_found;
pub mod redirect;

pub use home::home_handler;
pub use items::{
    delete_item_handler, get_item_handler, list_items_handler, patch_item_handler,
    put_item_handler,
};
pub use not_found::api_not_found_handler;
pub use redirect::redirect_handler;
