//! Text sanitization for speech.
//!
//! Outgoing messages carry pictographic decoration (emoji, dingbats, domino
//! and mahjong tiles) that synthesis engines either skip or read out as
//! code-point names. Those ranges are dropped before the text reaches the
//! engine, and anything that remains only after trimming counts.

/// Messages longer than this (after stripping) are not spoken.
pub const MAX_SPEAK_CHARS: usize = 500;

const SYMBOL_RANGES: &[(u32, u32)] = &[
    (0x1F000, 0x1F02F), // mahjong and domino tiles
    (0x1F600, 0x1F9FF), // emoticons through supplemental symbols
    (0x2600, 0x27BF),   // misc symbols and dingbats
];

fn is_pictographic(c: char) -> bool {
    let cp = c as u32;
    SYMBOL_RANGES.iter().any(|&(lo, hi)| (lo..=hi).contains(&cp))
}

/// Strip pictographic symbols and trim; `None` when nothing speakable
/// remains or the result exceeds [`MAX_SPEAK_CHARS`].
pub fn sanitize_for_speech(text: &str) -> Option<String> {
    let stripped: String = text.chars().filter(|c| !is_pictographic(*c)).collect();
    let trimmed = stripped.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.chars().count() > MAX_SPEAK_CHARS {
        return None;
    }
    Some(trimmed.to_string())
}
