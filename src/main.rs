mod app;
mod args;
mod dispatch;
mod domain;
mod entry;
mod error;
mod http;
mod logger;
mod metrics;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
