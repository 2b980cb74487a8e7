//! Command-line interface for podtrack.
//!
//! Provides the interactive publisher/customer menu plus one-shot commands
//! for listing the startup catalog, asking for a recommendation, and
//! inspecting the mood table and configuration.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config;
use crate::service::{PodTrack, Request, Response};

pub mod menu;
pub mod render;

/// podtrack - Podcast catalog with mood-based recommendations
#[derive(Parser, Debug)]
#[command(name = "podtrack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive menu (default)
    Menu,

    /// List podcasts in the startup catalog
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Recommend podcasts for a mood
    Recommend {
        /// Mood name (case-insensitive)
        mood: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the configured mood table
    Moods,

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        let cfg = config::config()?;
        let mut app = PodTrack::from_config(cfg);

        match self.command.unwrap_or(Commands::Menu) {
            Commands::Menu => menu::main_menu(&mut app),
            Commands::List { json } => {
                let response = app.handle(Request::ListPodcasts);
                print_response(&response, json)
            }
            Commands::Recommend { mood, json } => {
                let response = app.handle(Request::Recommend { mood });
                print_response(&response, json)
            }
            Commands::Moods => {
                print!("{}", render::mood_table(app.moods().entries()));
                Ok(())
            }
            Commands::Config => show_config(),
        }
    }
}

fn print_response(response: &Response, json: bool) -> Result<()> {
    if json {
        println!("{}", response_json(response)?);
    } else {
        println!("{}", render::response_text(response));
    }
    Ok(())
}

/// JSON form of a response, tagged with its `kind`
pub fn response_json(response: &Response) -> Result<String> {
    serde_json::to_string_pretty(response).context("Failed to serialize response")
}

/// Show the resolved configuration (for debugging)
fn show_config() -> Result<()> {
    let cfg = config::config()?;

    println!("PodTrack Configuration");
    println!();
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!("Seed catalog: {}", cfg.seed);
    println!();
    println!("Moods:");
    for entry in &cfg.moods {
        println!("  {}: {}", entry.name, entry.recommended.join(", "));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["podtrack"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_recommend_parses() {
        let cli = Cli::try_parse_from(["podtrack", "-v", "recommend", "Tired", "--json"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Some(Commands::Recommend { mood, json }) => {
                assert_eq!(mood, "Tired");
                assert!(json);
            }
            other => panic!("Expected Recommend, got {:?}", other),
        }
    }

    #[test]
    fn test_recommend_requires_mood() {
        assert!(Cli::try_parse_from(["podtrack", "recommend"]).is_err());
    }

    #[test]
    fn test_json_output_is_tagged_for_every_command() {
        let mut app = PodTrack::new(
            crate::catalog::CatalogStore::seeded(),
            crate::recommend::MoodIndex::default(),
        );

        let list = response_json(&app.handle(Request::ListPodcasts)).unwrap();
        let list: serde_json::Value = serde_json::from_str(&list).unwrap();
        assert_eq!(list["kind"], "podcasts");
        assert_eq!(list["rows"].as_array().unwrap().len(), 3);
        assert_eq!(list["rows"][1]["title"], "Energetic Vibes");
        assert_eq!(list["rows"][1]["seats"], 5);

        let rec = response_json(&app.handle(Request::Recommend {
            mood: "happy".to_string(),
        }))
        .unwrap();
        let rec: serde_json::Value = serde_json::from_str(&rec).unwrap();
        assert_eq!(rec["kind"], "recommendations");
        assert_eq!(rec["mood"], "happy");
        assert_eq!(rec["titles"][0], "Energetic Vibes");

        let missing = response_json(&app.handle(Request::Recommend {
            mood: "euphoric".to_string(),
        }))
        .unwrap();
        let missing: serde_json::Value = serde_json::from_str(&missing).unwrap();
        assert_eq!(missing["kind"], "no_recommendation");
    }
}
