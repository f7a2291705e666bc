pub mod error_code;
pub mod query;
pub mod response;

pub use error_code::ErrorCode;
pub use query::deserialize_optional_grade;
pub use response::ApiResponse;
