use clap::{Args, Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use huecount::assets::AssetLoader;
use huecount::export::{parse_selection, CopyFormat};
use huecount::models::AppConfig;
use huecount::rendering::{render_chart, render_table};
use huecount::services::{Analysis, AnalysisService, ImageSource};

#[derive(Parser)]
#[command(name = "huecount")]
#[command(about = "Report the dominant colors of an image, ignoring near-white background")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the color table and chart for an image
    Analyze {
        #[command(flatten)]
        input: InputArgs,

        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
    /// Copy selected table rows in hex, Python or R format
    Export {
        #[command(flatten)]
        input: InputArgs,

        /// Row indices from the table, comma-separated (e.g. "0,2,5")
        #[arg(short, long)]
        select: String,

        /// Output format: hex, py or r (default from config)
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Write the default config.yaml to CONFIG_FILE (or ./config.yaml)
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Image file to analyze ("-" reads stdin)
    input: PathBuf,

    /// Treat the input as pasted text: a data URL or bare base64 image
    #[arg(long)]
    data_url: bool,

    /// Minimum share in percent for a color to be listed
    #[arg(short, long)]
    percentage: Option<f64>,

    /// Channels all >= this value count as white (0-255)
    #[arg(short, long)]
    white: Option<u8>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "huecount=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Some(Commands::Analyze { input, json }) => run_analyze_command(&input, json),
        Some(Commands::Export {
            input,
            select,
            format,
        }) => run_export_command(&input, &select, format.as_deref()),
        Some(Commands::Init { force }) => run_init_command(force),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn load_config() -> AppConfig {
    AppConfig::load_from_assets(&AssetLoader::from_env())
}

fn read_input(path: &Path) -> anyhow::Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read(path)?)
    }
}

/// Decode and analyze the input with config thresholds and CLI overrides
fn analyze_input(config: &AppConfig, input: &InputArgs) -> anyhow::Result<Analysis> {
    let service = AnalysisService::new(config.analysis_config(input.percentage, input.white));
    let bytes = read_input(&input.input)?;

    let analysis = if input.data_url {
        let text = String::from_utf8(bytes)?;
        service.analyze(&ImageSource::DataUrl(&text))?
    } else {
        let name = input.input.display().to_string();
        service.analyze(&ImageSource::Bytes {
            name: &name,
            bytes: &bytes,
        })?
    };

    Ok(analysis)
}

fn run_analyze_command(input: &InputArgs, json: bool) -> anyhow::Result<()> {
    let config = load_config();
    let analysis = analyze_input(&config, input)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis.report())?);
        return Ok(());
    }

    let result = &analysis.result;
    println!(
        "{} ({}x{}): {} colors, {} white pixels suppressed, white >= {}, share >= {}%\n",
        analysis.source,
        analysis.width,
        analysis.height,
        result.distinct_colors(),
        result.suppressed_total(),
        analysis.config.white_threshold,
        analysis.config.percentage_threshold,
    );
    print!("{}", render_table(&analysis.view));

    let chart = render_chart(&analysis.view);
    if !chart.is_empty() {
        println!();
        print!("{chart}");
    }

    Ok(())
}

fn run_export_command(input: &InputArgs, select: &str, format: Option<&str>) -> anyhow::Result<()> {
    let config = load_config();
    let format = match format {
        Some(f) => f.parse::<CopyFormat>()?,
        None => config.export.format,
    };
    let selected = parse_selection(select)?;

    let analysis = analyze_input(&config, input)?;
    let text = analysis.copy(&selected, format)?;
    println!("{text}");

    Ok(())
}

fn run_init_command(force: bool) -> anyhow::Result<()> {
    let loader = AssetLoader::from_env();
    let report = loader.init(force)?;

    for f in &report.written {
        println!("  + {f}");
    }
    if !report.skipped.is_empty() {
        println!("Skipped {} existing files:", report.skipped.len());
        for f in &report.skipped {
            println!("  - {f}");
        }
        println!("\nUse --force to overwrite.");
    }

    Ok(())
}

fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let loader = AssetLoader::from_env();
    let config = AppConfig::load_from_assets(&loader);

    println!("huecount v{VERSION}");
    println!("Dominant color report for images\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        loader
            .config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not set)".to_string())
    );

    println!("\nActive Configuration:");
    println!(
        "  analysis.percentage_threshold = {}",
        config.analysis.percentage_threshold
    );
    println!(
        "  analysis.white_threshold      = {}",
        config.analysis.white_threshold
    );
    println!("  export.format                 = {}", config.export.format);

    println!("\nRun 'huecount --help' for usage.");
}
