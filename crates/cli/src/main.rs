use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use owo_colors::OwoColorize;
use pagegrade_core::{
    AnalyzerConfig, FetchConfig, JsonConfig, PageAnalyzer, TextConfig, convert_to_json, convert_to_text, fetch_file,
    fetch_stdin, fetch_url,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

mod echo;

use echo::{format_size, print_banner, print_detail, print_info, print_score, print_step, print_success};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const STEPS: usize = 4;

/// Output format for the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Text,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(format!("Invalid format: {}. Valid options: json, text", s)),
        }
    }
}

/// Grade the content quality of a web page
#[derive(Parser, Debug)]
#[command(name = "pagegrade")]
#[command(version)]
#[command(about = "Grade the content quality of web pages", long_about = None)]
struct Args {
    /// URL to fetch, local HTML file, or "-" for stdin
    #[arg(value_name = "INPUT", required_unless_present = "completions")]
    input: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format (json, text)
    #[arg(short, long, default_value = "json", value_name = "FORMAT")]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Topic model JSON file (default: ./topic_models.json, then ~/.config/pagegrade/)
    #[arg(long, value_name = "FILE")]
    topics: Option<PathBuf>,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "15", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Skip summary generation
    #[arg(long)]
    no_summary: bool,

    /// Number of sentences in the summary
    #[arg(long, default_value = "6", value_name = "NUM")]
    summary_sentences: usize,

    /// Page URL to summarize instead of the input (required for summaries of local input)
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Seed for placeholder metrics, for reproducible reports
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

impl Args {
    fn input(&self) -> &str {
        self.input.as_deref().unwrap_or_default()
    }

    fn is_remote(&self) -> bool {
        self.input().starts_with("http://") || self.input().starts_with("https://")
    }

    fn analyzer_config(&self) -> AnalyzerConfig {
        let mut fetch = FetchConfig { timeout: self.timeout, ..FetchConfig::default() };
        if let Some(user_agent) = &self.user_agent {
            fetch.user_agent = user_agent.clone();
        }

        let mut builder = AnalyzerConfig::builder()
            .summarize(!self.no_summary)
            .summary_sentences(self.summary_sentences)
            .fetch(fetch);
        if let Some(path) = &self.topics {
            builder = builder.topic_model_path(path);
        }
        builder.build()
    }
}

/// Reads the page named by the input argument.
async fn read_input(args: &Args, analyzer: &PageAnalyzer) -> anyhow::Result<String> {
    let input = args.input();
    if input == "-" {
        if args.verbose {
            print_step(2, STEPS, "Reading from stdin");
        }
        fetch_stdin().context("Failed to read from stdin")
    } else if args.is_remote() {
        if args.verbose {
            print_step(2, STEPS, &format!("Fetching from {}", input.bright_white().underline()));
        }
        fetch_url(input, &analyzer.config().fetch).await.context("Failed to fetch URL")
    } else {
        if args.verbose {
            print_step(2, STEPS, &format!("Reading from file {}", input.bright_white()));
        }
        fetch_file(input).with_context(|| format!("Failed to read file: {}", input))
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("warn,pagegrade=debug,pagegrade_core=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(shell) = args.completions {
        clap_complete::generate(shell, &mut Args::command(), "pagegrade", &mut std::io::stdout());
        return Ok(());
    }

    init_tracing(args.verbose);

    if args.verbose {
        print_banner();
        print_info("Debug logging enabled");
        eprintln!();
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    if args.verbose {
        print_step(1, STEPS, "Loading topic model");
    }
    let analyzer = PageAnalyzer::from_config(args.analyzer_config()).context("Failed to load topic model")?;
    if args.verbose {
        print_detail("Topics", &analyzer.context().topics().len().to_string());
        eprintln!();
    }

    let input = args.input();
    let source_url = args.url.as_deref().unwrap_or_default();
    let report = if args.is_remote() && source_url.is_empty() {
        if args.verbose {
            print_step(2, STEPS, &format!("Fetching from {}", input.bright_white().underline()));
            eprintln!();
            print_step(3, STEPS, "Analyzing page");
        }
        analyzer
            .fetch_and_analyze_with(input, &mut rng)
            .await
            .context("Failed to fetch URL")?
    } else {
        let html = read_input(&args, &analyzer).await?;
        tracing::debug!(input, bytes = html.len(), "input read");
        if args.verbose {
            print_detail("Size", &format_size(html.len()));
            eprintln!();
            print_step(3, STEPS, "Analyzing page");
        }
        analyzer.analyze_with(&html, source_url, &mut rng).await
    };
    tracing::debug!(overall_score = report.overall_score, seed = ?args.seed, "report ready");

    if args.verbose {
        print_detail("Topic", &report.topic);
        print_score("overall", report.overall_score);
        for (name, category) in report.categories.iter() {
            print_score(name, category.score);
        }
        eprintln!();
        print_step(4, STEPS, "Writing output");
        print_detail("Format", &format!("{:?}", args.format));
        eprintln!();
    }

    let output = match args.format {
        OutputFormat::Json => {
            convert_to_json(&report, &JsonConfig { pretty: args.pretty }).context("Failed to serialize report")?
        }
        OutputFormat::Text => convert_to_text(&report, &TextConfig::default()),
    };

    match args.output {
        Some(path) => {
            fs::write(&path, output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            print_success(&format!("Report written to {}", path.display().bright_white()));
        }
        None => {
            println!("{}", output);
        }
    }

    Ok(())
}
