use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pico-hn")]
#[command(about = "A tiny terminal reader for the Hacker News top stories", long_about = None)]
pub struct Cli {
    /// How many top stories to consider (paged in batches of 20)
    #[arg(long, value_name = "N")]
    pub max_stories: Option<usize>,

    /// Base URL of the Hacker News API
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,

    /// Use the dark palette
    #[arg(long, conflicts_with = "light")]
    pub dark: bool,

    /// Use the light palette
    #[arg(long, conflicts_with = "dark")]
    pub light: bool,

    /// Custom config directory (default: ~/.config/pico-hn)
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Enable verbose logging (prints log path, sets DEBUG level)
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the story list as an HTML page instead of starting the UI
    Render(RenderArgs),
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Number of batches to load before rendering
    #[arg(short, long, default_value_t = 1)]
    pub batches: usize,

    /// Write the page to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render_command() {
        let cli = Cli::parse_from(["pico-hn", "render", "--batches", "3", "-o", "page.html"]);
        match cli.command {
            Some(Commands::Render(args)) => {
                assert_eq!(args.batches, 3);
                assert_eq!(args.output, Some(PathBuf::from("page.html")));
            }
            None => panic!("expected render command"),
        }
    }

    #[test]
    fn test_dark_and_light_conflict() {
        assert!(Cli::try_parse_from(["pico-hn", "--dark", "--light"]).is_err());
    }
}
