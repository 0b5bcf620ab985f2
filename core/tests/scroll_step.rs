use folio_core::scroll::{
    axis_for_viewport, gap_px, step_distance, ScrollAxis, DEFAULT_GAP_PX, FALLBACK_STEP_PX,
};

#[test]
fn missing_card_uses_the_flat_fallback_without_a_gap() {
    assert_eq!(step_distance(None, Some("24px")), FALLBACK_STEP_PX);
    assert_eq!(step_distance(None, None), FALLBACK_STEP_PX);
}

#[test]
fn card_size_adds_the_parsed_gap() {
    assert_eq!(step_distance(Some(180.0), Some("24px")), 204.0);
    assert_eq!(step_distance(Some(180.0), None), 180.0 + DEFAULT_GAP_PX);
}

#[test]
fn unparseable_gaps_fall_back_to_the_default() {
    assert_eq!(gap_px(Some("normal")), DEFAULT_GAP_PX);
    assert_eq!(gap_px(Some("")), DEFAULT_GAP_PX);
    assert_eq!(gap_px(None), DEFAULT_GAP_PX);
}

#[test]
fn gap_parsing_keeps_only_the_leading_integer() {
    assert_eq!(gap_px(Some("12.9px")), 12.0);
    assert_eq!(gap_px(Some("  8px 16px ")), 8.0);
    assert_eq!(gap_px(Some("+6px")), 6.0);
    assert_eq!(gap_px(Some("-4px")), -4.0);
}

#[test]
fn wide_viewports_scroll_vertically() {
    assert_eq!(axis_for_viewport(true), ScrollAxis::Vertical);
    assert_eq!(axis_for_viewport(false), ScrollAxis::Horizontal);
}
