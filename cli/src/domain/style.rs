//! Deterministic avatar styling.
//!
//! An agent without a complete explicit avatar still needs a stable visual
//! identity, so the glyph and color are derived from a hash of the agent id.
//! The same id always resolves to the same glyph and color.

/// A resolved avatar style: one glyph and one hex color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarStyle {
    pub glyph: String,
    pub color: String,
}

const GLYPHS: &[&str] = &[
    "🤖", "🦾", "🧠", "⚡", "🔮", "🛠️", "📡", "🧭", "🌿", "🦉", "🐙", "🚀",
];

const COLORS: &[&str] = &[
    "#6366F1", "#8B5CF6", "#EC4899", "#EF4444", "#F59E0B", "#10B981", "#06B6D4", "#3B82F6",
];

/// FNV-1a over the id bytes. Stable across runs and platforms.
fn hash_id(id: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in id.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0100_0000_01b3);
    }
    hash
}

/// The fallback style for an agent with no explicit avatar.
#[must_use]
pub fn default_style(agent_id: &str) -> AvatarStyle {
    let hash = hash_id(agent_id);
    #[allow(clippy::cast_possible_truncation)]
    let glyph_idx = (hash % GLYPHS.len() as u64) as usize;
    #[allow(clippy::cast_possible_truncation)]
    let color_idx = ((hash >> 32) % COLORS.len() as u64) as usize;
    AvatarStyle {
        glyph: GLYPHS[glyph_idx].to_string(),
        color: COLORS[color_idx].to_string(),
    }
}

/// Resolve the display style for an agent.
///
/// Explicit values win verbatim only as a pair. When either half is missing
/// or empty the whole style comes from the deterministic default, so a
/// half-set avatar never mixes a custom glyph with a hashed color.
#[must_use]
pub fn resolve(avatar: Option<&str>, avatar_color: Option<&str>, agent_id: &str) -> AvatarStyle {
    match (avatar, avatar_color) {
        (Some(glyph), Some(color)) if !glyph.is_empty() && !color.is_empty() => AvatarStyle {
            glyph: glyph.to_string(),
            color: color.to_string(),
        },
        _ => default_style(agent_id),
    }
}
