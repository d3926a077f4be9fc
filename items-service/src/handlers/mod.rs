pub mod health;
pub mod items;

pub use health::health_check;
pub use items::list_items;
