//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for movie-quiz
#[derive(Parser, Debug)]
#[command(name = "movie-quiz")]
#[command(author, version, about = "Guess from the poster whether a movie is rated above 7")]
#[command(long_about = r#"
Movie Quiz shows movie posters one at a time and asks whether the movie's
rating is greater than 7. Answer with y or n; the next poster is fetched in
the background while you think.

Configuration files are loaded from (in priority order):
1. MOVIE_QUIZ_* environment variables (e.g. MOVIE_QUIZ_API__MOVIES_URL)
2. --config <path>     Explicit config file
3. ./movie-quiz.toml   Project-level config
4. ~/.config/movie-quiz/config.toml   Global config

Example:
  movie-quiz
  movie-quiz --rounds 5 --seed 42
  movie-quiz --movies-url https://example.com/movies --poster-url 'https://example.com/posters/{id}'
"#)]
pub struct Cli {
    /// Number of questions in the round
    #[arg(short, long, value_name = "N")]
    pub rounds: Option<usize>,

    /// Seed for reproducible question order
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Catalog endpoint (overrides api.movies_url)
    #[arg(long, value_name = "URL")]
    pub movies_url: Option<String>,

    /// Poster URL template with {id} (overrides api.poster_url)
    #[arg(long, value_name = "URL")]
    pub poster_url: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
