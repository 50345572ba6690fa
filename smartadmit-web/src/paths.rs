//! Deployment base path handling for the router and static assets.
///
/// `PUBLIC_URL` is read at compile time (e.g. `/smartadmit` when hosted under a
/// subdirectory). Without it everything is anchored at the site root.
const PUBLIC_URL: Option<&str> = option_env!("PUBLIC_URL");

const LOGO_ASSET: &str = "static/assets/img/logo.svg";

#[must_use]
pub fn asset_path(relative: &str) -> String {
    join_base(PUBLIC_URL.unwrap_or(""), relative)
}

/// Brand mark shown on every screen.
#[must_use]
pub fn logo_src() -> String {
    asset_path(LOGO_ASSET)
}

/// Router basename; `None` when served from the root.
#[must_use]
pub fn router_base() -> Option<String> {
    trimmed_base(PUBLIC_URL.unwrap_or(""))
}

fn join_base(base: &str, relative: &str) -> String {
    let rel = relative.trim_start_matches('/');
    match trimmed_base(base) {
        Some(base) => format!("{base}/{rel}"),
        None => format!("/{rel}"),
    }
}

fn trimmed_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    (!base.is_empty()).then(|| base.to_string())
}
