pub mod ddg;
pub mod ddg_dto;
pub mod normalize;
pub mod request;
pub mod transport;
pub mod utils;

pub use ddg::{Client, zero_click};
pub use normalize::normalize;
pub use request::{Request, build_request};
pub use transport::{HttpTransport, Transport, TransportResponse};
