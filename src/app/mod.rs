mod export;
mod summary;

pub(crate) use export::report_json;
pub(crate) use summary::print_summary;
