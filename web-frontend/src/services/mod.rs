pub mod items_client;

pub use items_client::ItemsClient;
