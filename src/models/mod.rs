pub mod category;
pub mod icon;
pub mod link;
pub mod link_section;
pub mod query_options;
pub mod response;

pub use category::Category;
pub use icon::Icon;
pub use link::Link;
pub use link_section::LinkSection;
pub use query_options::QueryOptions;
pub use response::Response;
