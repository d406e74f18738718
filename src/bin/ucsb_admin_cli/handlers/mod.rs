#![deny(clippy::all, clippy::pedantic)]

pub mod articles;
pub mod common;
pub mod help_requests;
pub mod menu_item_reviews;
pub mod menu_items;
pub mod organizations;
pub mod recommendation_requests;
pub mod whoami;
