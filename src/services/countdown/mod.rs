mod refresh;
mod service;

pub use refresh::{spawn_refresh, RefreshHandle, TICK_PERIOD};
pub use service::CountdownService;
