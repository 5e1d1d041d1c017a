mod app;
pub mod scenario;

pub use app::App;
pub use scenario::Scenario;
