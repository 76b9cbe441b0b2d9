use clap::{Parser, ValueEnum};
use dialoguer::{Input, Select};
use std::process;
use tracing_subscriber::EnvFilter;
use tv_series_info::{
    DEFAULT_API_BASE, DEFAULT_QUERY, Page, PageConfig, Phase, RenderOptions, SummaryPolicy, Tab,
    TvMazeProvider, TvSeriesInfoError,
};

/// Search TVMaze for a tv series and show its cast, episodes and seasons
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Name of the tv series to search for
    #[arg(num_args = 0..)]
    query: Vec<String>,

    /// Section shown below the title card
    #[arg(short, long, value_enum, default_value_t = TabArg::Cast)]
    tab: TabArg,

    /// How HTML summaries are displayed
    #[arg(short, long, value_enum, default_value_t = SummaryArg::Plain)]
    summary: SummaryArg,

    /// Base URL of the TVMaze API
    #[arg(long, default_value = DEFAULT_API_BASE)]
    api_url: String,

    /// Keep the page open to switch tabs and run further searches
    #[arg(short, long)]
    interactive: bool,

    /// Increase log output (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TabArg {
    Cast,
    Episodes,
    Seasons,
    Details,
    All,
}

impl From<TabArg> for Tab {
    fn from(arg: TabArg) -> Self {
        match arg {
            TabArg::Cast => Tab::Cast,
            TabArg::Episodes => Tab::Episodes,
            TabArg::Seasons => Tab::Seasons,
            TabArg::Details => Tab::Details,
            TabArg::All => Tab::All,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SummaryArg {
    /// Convert markup to plain text
    Plain,
    /// Remove paragraph tags only
    StripParagraphs,
    /// Print markup unmodified
    Raw,
}

impl From<SummaryArg> for SummaryPolicy {
    fn from(arg: SummaryArg) -> Self {
        match arg {
            SummaryArg::Plain => SummaryPolicy::Plain,
            SummaryArg::StripParagraphs => SummaryPolicy::StripParagraphs,
            SummaryArg::Raw => SummaryPolicy::Raw,
        }
    }
}

/// Entries of the interactive menu, in display order
const MENU_TABS: [Tab; 5] = [Tab::Cast, Tab::Episodes, Tab::Seasons, Tab::Details, Tab::All];
const MENU_NEW_SEARCH: usize = MENU_TABS.len();

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Waits for the current request and prints the settled page
fn show_page(page: &mut Page<TvMazeProvider>, options: &RenderOptions) {
    if page.phase() == Phase::Loading {
        println!("{}", page.render(options));
        page.wait();
    }
    println!("{}", page.render(options));
}

/// Runs the menu loop until the user quits
fn interact(
    page: &mut Page<TvMazeProvider>,
    options: &RenderOptions,
) -> Result<(), TvSeriesInfoError> {
    let mut items: Vec<&str> = MENU_TABS.iter().map(|tab| tab.title()).collect();
    items.push("New search");
    items.push("Quit");

    loop {
        let default = MENU_TABS
            .iter()
            .position(|&tab| tab == page.tab())
            .unwrap_or(0);

        let choice = Select::new()
            .with_prompt("Show")
            .items(&items)
            .default(default)
            .interact()?;

        match choice {
            index if index < MENU_NEW_SEARCH => page.select_tab(MENU_TABS[index]),
            MENU_NEW_SEARCH => {
                let query: String = Input::new()
                    .with_prompt("Search for a TV series")
                    .with_initial_text(page.query())
                    .allow_empty(true)
                    .interact_text()?;
                page.submit(query);
            }
            _ => return Ok(()),
        }

        show_page(page, options);
    }
}

fn run(cli: Cli) -> Result<bool, TvSeriesInfoError> {
    let query = if cli.query.is_empty() {
        DEFAULT_QUERY.to_string()
    } else {
        cli.query.join(" ")
    };

    let config = PageConfig {
        api_base: cli.api_url,
        initial_query: query,
        tab: cli.tab.into(),
    };
    let options = RenderOptions {
        summary_policy: cli.summary.into(),
    };

    let provider = TvMazeProvider::new()?;
    let mut page = Page::open(provider, config);

    show_page(&mut page, &options);

    if cli.interactive {
        interact(&mut page, &options)?;
        return Ok(true);
    }

    Ok(page.phase() == Phase::Success)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("\nError: {}", e);
            process::exit(1);
        }
    }
}
