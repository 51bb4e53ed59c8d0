pub mod app;
pub mod badges;
pub mod config;
pub mod errors;
pub mod feed;
pub mod handlers;
pub mod ingest;
pub mod leaderboard;
pub mod models;
pub mod scoring;
pub mod seed;
pub mod state;
pub mod storage;
pub mod summary;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::load_data;
