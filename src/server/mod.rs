pub mod rejection;
pub mod relay;
pub mod response;
pub mod routes;

pub use rejection::handle_rejection;
pub use relay::RelayServer;
pub use response::json_response;
