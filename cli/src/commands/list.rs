//! `atelier list` — render agents, marketplace listings, or templates as cards.

use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, ValueEnum};

use crate::app::AppContext;
use crate::application::ports::CatalogReader;
use crate::domain::card::AgentCard;
use crate::output::{human, json, progress};

/// Which listing feed to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Source {
    /// Agents owned by the current user
    #[default]
    Agents,
    /// Published marketplace agents
    Marketplace,
    /// Reusable templates
    Templates,
}

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Listing feed to show
    #[arg(long, value_enum, default_value_t = Source::Agents)]
    pub source: Source,
}

/// Run the list command.
pub async fn run(app: &AppContext, args: &ListArgs) -> Result<ExitCode> {
    let pb = if app.output.show_progress() && !app.is_json() {
        Some(progress::spinner("Fetching listings"))
    } else {
        None
    };

    let result = fetch(app, args.source).await;
    let cards = match result {
        Ok(cards) => {
            if let Some(pb) = &pb {
                pb.finish_and_clear();
            }
            cards
        }
        Err(err) => {
            if let Some(pb) = &pb {
                progress::finish_error(pb, "Fetching listings failed");
            }
            return Err(err);
        }
    };

    if app.is_json() {
        print_json(&cards)?;
    } else if cards.is_empty() {
        app.output.info("Nothing to show");
    } else {
        for card in &cards {
            human::render_card(&app.output, &card.face());
        }
    }
    Ok(ExitCode::SUCCESS)
}

async fn fetch(app: &AppContext, source: Source) -> Result<Vec<AgentCard>> {
    Ok(match source {
        Source::Agents => app
            .backend
            .list_agents()
            .await?
            .into_iter()
            .map(AgentCard::Owned)
            .collect(),
        Source::Marketplace => app
            .backend
            .list_marketplace()
            .await?
            .into_iter()
            .map(AgentCard::Marketplace)
            .collect(),
        Source::Templates => app
            .backend
            .list_templates()
            .await?
            .into_iter()
            .map(AgentCard::Template)
            .collect(),
    })
}

fn print_json(cards: &[AgentCard]) -> Result<()> {
    let values = cards
        .iter()
        .map(|card| match card {
            AgentCard::Marketplace(listing) => serde_json::to_value(listing),
            AgentCard::Template(listing) => serde_json::to_value(listing),
            AgentCard::Owned(listing) => serde_json::to_value(listing),
        })
        .collect::<Result<Vec<_>, _>>()?;
    println!("{}", json::format_pretty(&values)?);
    Ok(())
}
