pub fn resolve_asset_path(candidate: Option<&str>, fallback: &str) -> String {
    let Some(raw) = candidate else {
        return fallback.to_string();
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return fallback.to_string();
    }
    if is_absolute_url(trimmed) {
        return trimmed.to_string();
    }
    if let Some(rest) = trimmed.strip_prefix("../") {
        return format!("./{rest}");
    }
    if trimmed.starts_with("./") || trimmed.starts_with('/') {
        return trimmed.to_string();
    }
    let bare = trimmed.strip_prefix('.').unwrap_or(trimmed);
    format!("./{bare}")
}

fn is_absolute_url(path: &str) -> bool {
    path.starts_with("//") || path.starts_with("http://") || path.starts_with("https://")
}
