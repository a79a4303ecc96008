pub mod category;
pub mod error;
pub mod expiry;
pub mod food_item;
pub mod health;
pub mod security;
pub mod tags;
