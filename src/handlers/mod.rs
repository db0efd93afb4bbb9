pub mod app;
pub mod docs;
pub mod health;

pub use app::index;
pub use docs::generate_docs;
pub use health::{health_check, readiness_check};
