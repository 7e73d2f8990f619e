//! The command line arguments accepted by the program

use clap::Parser;

/// [`CliArgs`] is the command line arguments parser
///
/// #Test
/// ```rust
/// use clap::Parser;
/// use lgdocs::cli::input::CliArgs;
///
/// let parser = CliArgs::parse_from(["", "-v"]);
/// assert_eq!(1, parser.verbose);
///
/// let parser = CliArgs::parse_from(["", "--skip-api-docs"]);
/// assert!(parser.skip_api_docs);
///
/// let parser = CliArgs::parse_from(["", "--root", "docs/user"]);
/// assert_eq!(parser.root.as_deref(), Some("docs/user"));
/// ```
#[derive(Parser, Debug, Default)]
#[command(name = "lgdocs")]
#[command(author = "Telescope Project Developers")]
#[command(version)]
#[command(
    about = "lgdocs prepares the Looking Glass Proxy documentation tree for the site generator",
    long_about = "lgdocs is part of the Telescope Project. It runs the API doc extraction, \
        stamps the documentation with version control metadata and materializes the legal notice. \
        Find us: https://github.com/telescope-proj/lgproxy"
)]
pub struct CliArgs {
    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "lgdocs maximum allowed verbosity level is: '-v'"
    )]
    pub verbose: u8,

    #[arg(short, long, help = "Allows the user to specify the docs root directory")]
    pub root: Option<String>,

    #[arg(
        short,
        long,
        help = "Filters between the detected lgdocs configuration files by name"
    )]
    pub match_files: Option<String>,

    #[arg(long, help = "Skips the API doc extraction step")]
    pub skip_api_docs: bool,
}
