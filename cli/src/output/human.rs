//! Human-readable rendering for agents, version history, and listing cards.

use atelier_common::{Agent, AgentVersion, VersionSummary};
use owo_colors::{OwoColorize as _, Style};

use crate::domain::card::CardFace;
use crate::domain::draft::Draft;
use crate::domain::style::AvatarStyle;
use crate::output::OutputContext;

/// Parse a `#RRGGBB` color into a background style for the avatar block.
/// Unknown formats render unstyled rather than failing.
fn hex_style(hex: &str) -> Style {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return Style::new();
    }
    let Ok(value) = u32::from_str_radix(digits, 16) else {
        return Style::new();
    };
    #[allow(clippy::cast_possible_truncation)]
    Style::new().on_truecolor(
        ((value >> 16) & 0xFF) as u8,
        ((value >> 8) & 0xFF) as u8,
        (value & 0xFF) as u8,
    )
}

/// The avatar glyph on its colored background block.
fn styled_glyph(ctx: &OutputContext, style: &AvatarStyle) -> String {
    if ctx.is_tty {
        let block = format!(" {} ", style.glyph);
        format!("{}", block.style(hex_style(&style.color)))
    } else {
        style.glyph.clone()
    }
}

// ── Cards ─────────────────────────────────────────────────────────────────────

/// Render one listing card.
pub fn render_card(ctx: &OutputContext, face: &CardFace) {
    if ctx.quiet {
        return;
    }
    let badges = face
        .badges
        .iter()
        .map(|badge| format!("[{}]", badge.label().style(ctx.styles.badge)))
        .collect::<Vec<_>>()
        .join(" ");
    println!(
        "  {} {} {badges}",
        styled_glyph(ctx, &face.style),
        face.title.style(ctx.styles.bold),
    );
    println!("    {}", face.description.style(ctx.styles.dim));
    if !face.tags.is_empty() {
        let mut tags = face
            .tags
            .visible
            .iter()
            .map(|tag| format!("#{tag}"))
            .collect::<Vec<_>>();
        if face.tags.overflow > 0 {
            tags.push(format!("+{}", face.tags.overflow));
        }
        println!("    {}", tags.join(" ").style(ctx.styles.info));
    }
    println!("    {}", face.metadata.join("  |  ").style(ctx.styles.dim));
    if let Some(action) = face.action {
        println!("    -> {}", action.label());
    }
    println!();
}

// ── Agent detail ──────────────────────────────────────────────────────────────

fn count_enabled(draft: &Draft) -> usize {
    draft.tools.values().filter(|flag| flag.is_enabled()).count()
}

/// Render the agent detail view: identity, configuration summary, and the
/// read-only banner when a historical version is pinned.
pub fn render_agent(
    ctx: &OutputContext,
    agent: &Agent,
    display: &Draft,
    style: &AvatarStyle,
    pinned_version: Option<&AgentVersion>,
    viewing_old_version: bool,
) {
    ctx.header(&format!(
        "{} {}",
        styled_glyph(ctx, style),
        display.name
    ));
    if viewing_old_version {
        ctx.warn("Viewing an old version (read-only). Activate it to make changes.");
    }
    ctx.kv("Agent ID    ", &agent.agent_id);
    if let Some(version) = pinned_version {
        ctx.kv("Version     ", &version.display_name());
    } else if let Some(version) = &agent.current_version {
        ctx.kv("Version     ", &format!("{} (active)", version.display_name()));
    }
    ctx.kv("Description ", &display.description);
    ctx.kv("Default     ", if display.is_default { "yes" } else { "no" });
    ctx.kv(
        "Tools       ",
        &format!(
            "{} enabled / {} total",
            count_enabled(display),
            display.tools.len()
        ),
    );
    ctx.kv(
        "Integrations",
        &format!(
            "{} managed, {} custom",
            display.configured_mcps.len(),
            display.custom_mcps.len()
        ),
    );
    if !display.system_prompt.is_empty() {
        ctx.kv("Prompt      ", &truncate(&display.system_prompt, 80));
    }
}

fn truncate(text: &str, max: usize) -> String {
    let flat = text.replace('\n', " ");
    if flat.chars().count() <= max {
        flat
    } else {
        let cut: String = flat.chars().take(max).collect();
        format!("{cut}...")
    }
}

// ── Version history ───────────────────────────────────────────────────────────

/// Render the version list, newest first, with the active one marked.
pub fn render_versions(ctx: &OutputContext, versions: &[VersionSummary], active_id: Option<&str>) {
    if ctx.quiet {
        return;
    }
    for version in versions {
        let active = active_id == Some(version.version_id.as_str());
        let marker = if active { "●" } else { " " };
        let mut line = format!(
            "  {marker} {:<8} {}",
            version.display_name(),
            version.created_at.format("%b %e, %Y")
        );
        if let Some(description) = &version.description {
            line.push_str(&format!("  {description}"));
        }
        if active {
            println!("{} {}", line.style(ctx.styles.bold), "(active)".style(ctx.styles.success));
        } else {
            println!("{line}");
        }
    }
}
