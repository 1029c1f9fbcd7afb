mod category;
mod post;
mod project;
mod tag;

pub use category::CategoryApiRepository;
pub use post::PostApiRepository;
pub use project::ProjectApiRepository;
pub use tag::TagApiRepository;

use crate::domain::ports::RequestConfig;

/// Adds `key=value` only for set, non-zero values. Zero is treated as "unset".
fn push_positive(config: RequestConfig, key: &str, value: Option<u64>) -> RequestConfig {
    match value {
        Some(v) if v != 0 => config.param(key, v),
        _ => config,
    }
}

fn page_query(page: Option<u32>, per_page: Option<u32>) -> RequestConfig {
    let config = push_positive(RequestConfig::default(), "page", page.map(u64::from));
    push_positive(config, "per_page", per_page.map(u64::from))
}
