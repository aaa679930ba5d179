pub mod client;
pub mod error;
pub mod types;

pub use client::{DEFAULT_BASE_URL, HttpUserApi, UserApi};
pub use error::ApiError;
pub use types::{Address, Company, Geo, Hotel, NearestUserResult, User, UserDetails, UserId};
