//! Menu image URLs, resolved against the deployment base path.
//!
//! `PUBLIC_URL` is read at compile time (e.g. `/eatme` when the site is hosted
//! under a sub-directory). Absolute URLs pass through untouched.

#[must_use]
pub fn asset_url(relative: &str) -> String {
    join_base(option_env!("PUBLIC_URL").unwrap_or(""), relative)
}

fn join_base(base: &str, path: &str) -> String {
    if path.starts_with("https://") || path.starts_with("http://") || path.starts_with("data:") {
        return path.to_string();
    }
    let base = base.trim().trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}
