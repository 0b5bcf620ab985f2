pub const FALLBACK_STEP_PX: f64 = 220.0;
pub const DEFAULT_GAP_PX: f64 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollAxis {
    Horizontal,
    Vertical,
}

// Wide viewports stack the card list vertically.
pub fn axis_for_viewport(wide: bool) -> ScrollAxis {
    if wide {
        ScrollAxis::Vertical
    } else {
        ScrollAxis::Horizontal
    }
}

// Leading-integer read of a CSS length: "24px" is 24, "normal" the default.
pub fn gap_px(raw: Option<&str>) -> f64 {
    raw.and_then(parse_leading_int).unwrap_or(DEFAULT_GAP_PX)
}

pub fn step_distance(first_card_size: Option<f64>, gap: Option<&str>) -> f64 {
    let Some(size) = first_card_size else {
        return FALLBACK_STEP_PX;
    };
    size + gap_px(gap)
}

fn parse_leading_int(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits: String = rest.chars().take_while(|ch| ch.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<f64>().ok().map(|value| sign * value)
}
