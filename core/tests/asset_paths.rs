use folio_core::resolve_asset_path;

const FALLBACK: &str = "./images/card_placeholder_bg.webp";

#[test]
fn missing_or_blank_candidates_return_the_fallback() {
    assert_eq!(resolve_asset_path(None, FALLBACK), FALLBACK);
    assert_eq!(resolve_asset_path(Some(""), FALLBACK), FALLBACK);
    assert_eq!(resolve_asset_path(Some("   \t"), FALLBACK), FALLBACK);
}

#[test]
fn absolute_urls_pass_through_untouched() {
    assert_eq!(
        resolve_asset_path(Some("https://example.com/y.png"), FALLBACK),
        "https://example.com/y.png"
    );
    assert_eq!(
        resolve_asset_path(Some("http://example.com/y.png"), FALLBACK),
        "http://example.com/y.png"
    );
    assert_eq!(
        resolve_asset_path(Some("//cdn.example.com/y.png"), FALLBACK),
        "//cdn.example.com/y.png"
    );
}

#[test]
fn parent_relative_prefix_rewrites_to_current_relative() {
    assert_eq!(
        resolve_asset_path(Some("../images/x.png"), FALLBACK),
        "./images/x.png"
    );
}

#[test]
fn current_relative_and_rooted_paths_are_unchanged() {
    assert_eq!(resolve_asset_path(Some("./images/x.png"), FALLBACK), "./images/x.png");
    assert_eq!(resolve_asset_path(Some("/images/x.png"), FALLBACK), "/images/x.png");
}

#[test]
fn bare_names_gain_a_current_relative_prefix() {
    assert_eq!(resolve_asset_path(Some("photo.png"), FALLBACK), "./photo.png");
    assert_eq!(resolve_asset_path(Some(".photo.png"), FALLBACK), "./photo.png");
}

#[test]
fn surrounding_whitespace_is_trimmed_before_resolution() {
    assert_eq!(resolve_asset_path(Some("  photo.png  "), FALLBACK), "./photo.png");
    assert_eq!(
        resolve_asset_path(Some(" ../images/x.png "), FALLBACK),
        "./images/x.png"
    );
}
