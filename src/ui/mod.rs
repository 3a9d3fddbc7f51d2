mod app;
mod rings;
pub mod theme;

pub use app::CountdownApp;
