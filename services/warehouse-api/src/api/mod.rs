//! HTTP 接口层

mod handlers;
mod routes;

pub use handlers::CountResponse;
pub use routes::{AppState, router};
