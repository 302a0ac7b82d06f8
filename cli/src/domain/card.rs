//! Card presentation model.
//!
//! Listings render as cards in one of three modes. Each mode is its own
//! variant carrying its own payload, and every mode-specific decision (badges,
//! metadata, call to action) goes through one exhaustive `match`, so adding a
//! mode is a compile error until every branch handles it.

use atelier_common::{MarketplaceListing, OwnedAgentListing, TemplateListing};
use chrono::{DateTime, Utc};

use super::style::{self, AvatarStyle};

/// How many tags a card shows before collapsing the rest into a count.
const VISIBLE_TAGS: usize = 2;

const NO_DESCRIPTION: &str = "No description available";

/// One listing, tagged by card mode.
#[derive(Debug, Clone)]
pub enum AgentCard {
    Marketplace(MarketplaceListing),
    Template(TemplateListing),
    Owned(OwnedAgentListing),
}

/// A small status marker on the card header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Badge {
    Official,
    Community,
    Public,
    Private,
    Version(String),
    Published,
}

impl Badge {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Official => "Official",
            Self::Community => "Community",
            Self::Public => "Public",
            Self::Private => "Private",
            Self::Version(name) => name,
            Self::Published => "Published",
        }
    }
}

/// The card's primary call to action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Install,
    Publish,
    MakePrivate,
}

impl CardAction {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Install => "Install Agent",
            Self::Publish => "Publish to Marketplace",
            Self::MakePrivate => "Make Private",
        }
    }

    /// Label shown while the action's request is in flight.
    #[must_use]
    pub fn busy_label(self) -> &'static str {
        match self {
            Self::Install => "Installing...",
            Self::Publish => "Publishing...",
            Self::MakePrivate => "Unpublishing...",
        }
    }
}

/// Tag list truncated for card display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagLine {
    pub visible: Vec<String>,
    pub overflow: usize,
}

impl TagLine {
    #[must_use]
    pub fn new(tags: &[String]) -> Self {
        let visible = tags.iter().take(VISIBLE_TAGS).cloned().collect();
        Self {
            visible,
            overflow: tags.len().saturating_sub(VISIBLE_TAGS),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

/// Everything a renderer needs to draw one card, mode already resolved.
#[derive(Debug, Clone)]
pub struct CardFace {
    pub style: AvatarStyle,
    pub title: String,
    pub description: String,
    pub tags: TagLine,
    pub badges: Vec<Badge>,
    pub metadata: Vec<String>,
    pub action: Option<CardAction>,
}

fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %e, %Y").to_string()
}

fn describe(description: &str) -> String {
    if description.trim().is_empty() {
        NO_DESCRIPTION.to_string()
    } else {
        description.to_string()
    }
}

impl AgentCard {
    /// Resolve the mode-specific face for this card.
    #[must_use]
    pub fn face(&self) -> CardFace {
        match self {
            Self::Marketplace(listing) => marketplace_face(listing),
            Self::Template(listing) => template_face(listing),
            Self::Owned(listing) => owned_face(listing),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Marketplace(listing) => &listing.id,
            Self::Template(listing) => &listing.template_id,
            Self::Owned(listing) => &listing.agent_id,
        }
    }
}

fn marketplace_face(listing: &MarketplaceListing) -> CardFace {
    let badges = vec![if listing.is_official {
        Badge::Official
    } else {
        Badge::Community
    }];
    let mut metadata = Vec::new();
    if listing.is_official {
        metadata.push(format!("{} installs", listing.download_count));
    } else {
        let creator = listing.creator_name.as_deref().unwrap_or("Anonymous");
        metadata.push(format!("by {creator}"));
    }
    let date = listing.published_at.as_ref().unwrap_or(&listing.created_at);
    metadata.push(format_date(date));

    CardFace {
        style: style::resolve(
            listing.avatar.as_deref(),
            listing.avatar_color.as_deref(),
            &listing.id,
        ),
        title: listing.name.clone(),
        description: describe(&listing.description),
        tags: TagLine::new(&listing.tags),
        badges,
        metadata,
        action: Some(CardAction::Install),
    }
}

fn template_face(listing: &TemplateListing) -> CardFace {
    let mut badges = Vec::new();
    let action;
    if listing.is_public {
        badges.push(Badge::Public);
        action = CardAction::MakePrivate;
    } else {
        badges.push(Badge::Private);
        action = CardAction::Publish;
    }
    let mut metadata = vec![format!("Created {}", format_date(&listing.created_at))];
    if listing.is_public {
        if let Some(count) = listing.download_count {
            metadata.push(format!("{count} downloads"));
        }
    }

    CardFace {
        style: style::resolve(
            listing.avatar.as_deref(),
            listing.avatar_color.as_deref(),
            &listing.template_id,
        ),
        title: listing.name.clone(),
        description: describe(&listing.description),
        tags: TagLine::new(&listing.tags),
        badges,
        metadata,
        action: Some(action),
    }
}

fn owned_face(listing: &OwnedAgentListing) -> CardFace {
    let mut badges = Vec::new();
    if let Some(version) = &listing.current_version {
        badges.push(Badge::Version(version.version_name.clone()));
    }
    if listing.published_at.is_some() {
        badges.push(Badge::Published);
    }
    let mut metadata = vec!["By me".to_string(), format_date(&listing.created_at)];
    if listing.published_at.is_some() {
        if let Some(count) = listing.download_count {
            metadata.push(format!("{count} downloads"));
        }
    }

    CardFace {
        style: style::resolve(
            listing.avatar.as_deref(),
            listing.avatar_color.as_deref(),
            &listing.agent_id,
        ),
        title: listing.name.clone(),
        description: describe(&listing.description),
        tags: TagLine::new(&listing.tags),
        badges,
        metadata,
        // Owned agents are edited in place; the card itself carries no action.
        action: None,
    }
}
