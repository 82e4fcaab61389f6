use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use legobrick::config::DemoConfig;
use legobrick::examples::{self, Example};
use legobrick::format::{self, FormatOptions};
use legobrick_core::Brick;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "legobrick",
    about = "Virtual LEGO bricks: describe them, connect them, run the examples",
    version = env!("CARGO_PKG_VERSION")
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a demo config file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable emoji decorations
    #[arg(long, default_value_t = false, global = true)]
    plain: bool,

    /// Emit reports as JSON instead of text
    #[arg(long, default_value_t = false, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the example demonstrations (default)
    Run {
        /// Run only these examples, in the given order
        #[arg(long, value_enum)]
        only: Vec<Example>,
    },
    /// Describe bricks given as color:LxW (e.g. red:2x4)
    Describe {
        #[arg(required = true)]
        bricks: Vec<Brick>,
    },
    /// Check whether brick A can connect to brick B
    Connect { a: Brick, b: Brick },
    /// Print the effective config as TOML
    Config,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "legobrick=warn,legobrick_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    print!("{}", render(cli)?);
    Ok(())
}

/// Everything the binary does after argument parsing, returned as the text
/// that goes to stdout.
fn render(cli: Cli) -> anyhow::Result<String> {
    let config = match cli.config {
        Some(ref path) => DemoConfig::load(path),
        None => DemoConfig::default(),
    };
    let mut opts = FormatOptions::from(&config.output);
    if cli.plain {
        opts.decorations = false;
    }

    let out = match cli.command {
        None => run_examples(&config.examples.enabled, &config, &opts, cli.json)?,

        Some(Commands::Run { only }) => {
            let selected = if only.is_empty() { config.examples.enabled.clone() } else { only };
            run_examples(&selected, &config, &opts, cli.json)?
        }

        Some(Commands::Describe { bricks }) => {
            if cli.json {
                let mut text = serde_json::to_string_pretty(&bricks).context("encoding bricks")?;
                text.push('\n');
                text
            } else {
                format::format_describe(&bricks)
            }
        }

        Some(Commands::Connect { a, b }) => {
            if cli.json {
                let verdict = serde_json::json!({
                    "from": a,
                    "to": b,
                    "connects": a.can_connect_to(&b),
                });
                let mut text =
                    serde_json::to_string_pretty(&verdict).context("encoding verdict")?;
                text.push('\n');
                text
            } else {
                format::format_connect(&a, &b)
            }
        }

        Some(Commands::Config) => config.to_toml(),
    };

    Ok(out)
}

fn run_examples(
    selected: &[Example],
    config: &DemoConfig,
    opts: &FormatOptions,
    json: bool,
) -> anyhow::Result<String> {
    tracing::info!(count = selected.len(), "running examples");
    let reports = examples::run_all(selected, config);
    if json {
        let mut text = serde_json::to_string_pretty(&reports).context("encoding reports")?;
        text.push('\n');
        Ok(text)
    } else {
        Ok(format::format_reports(&reports, opts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn run_cli(args: &[&str]) -> String {
        let cli = Cli::try_parse_from(std::iter::once("legobrick").chain(args.iter().copied()))
            .unwrap_or_else(|e| panic!("failed to parse {args:?}: {e}"));
        render(cli).unwrap()
    }

    fn config_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    // ===========================================================================
    // run
    // ===========================================================================

    #[test]
    fn plain_run_only_colors() {
        let out = run_cli(&["--plain", "run", "--only", "colors"]);
        assert!(out.contains("Example 4: Brick Color Analysis"));
        assert!(!out.contains("Example 1"));
        assert!(!out.contains("🎨"));
        assert!(!out.contains("🧱"));
    }

    #[test]
    fn plain_overrides_config_decorations() {
        let file = config_file("[output]\ndecorations = true\n");
        let path = file.path().to_str().unwrap();
        let decorated = run_cli(&["--config", path, "run", "--only", "counter"]);
        let plain = run_cli(&["--config", path, "--plain", "run", "--only", "counter"]);
        assert!(decorated.contains("🏭"));
        assert!(!plain.contains("🏭"));
    }

    #[test]
    fn run_without_only_uses_configured_examples() {
        let file = config_file("[examples]\nenabled = [\"experimental\", \"collection\"]\n");
        let path = file.path().to_str().unwrap();
        let out = run_cli(&["--config", path, "run"]);
        let lab = out.find("Example 5").unwrap();
        let collection = out.find("Example 1").unwrap();
        assert!(lab < collection);
        assert!(!out.contains("Example 2"));
    }

    #[test]
    fn bare_command_runs_configured_set() {
        let file = config_file("[examples]\nenabled = [\"factory\"]\n");
        let path = file.path().to_str().unwrap();
        let out = run_cli(&["--config", path]);
        assert!(out.contains("Example 6: The Brick Factory"));
        assert!(!out.contains("Example 3"));
    }

    #[test]
    fn bare_command_runs_everything_by_default() {
        let out = run_cli(&[]);
        for example in Example::ALL {
            assert!(out.contains(example.title()), "missing {}", example.title());
        }
    }

    #[test]
    fn run_json_emits_reports() {
        let out = run_cli(&["--json", "run", "--only", "counter"]);
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json[0]["example"], "counter");
        assert_eq!(json[0]["total_created"], 4);
    }

    #[test]
    fn run_rejects_unknown_example() {
        assert!(Cli::try_parse_from(["legobrick", "run", "--only", "pirate-ship"]).is_err());
    }

    // ===========================================================================
    // describe / connect
    // ===========================================================================

    #[test]
    fn describe_text() {
        let out = run_cli(&["describe", "blue:2x2", "red:2x4"]);
        assert_eq!(out, "A blue 2x2 brick with 4 studs\nA red 2x4 brick with 8 studs\n");
    }

    #[test]
    fn describe_json() {
        let out = run_cli(&["--json", "describe", "gray:1x16"]);
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"color": "gray", "length": 1, "width": 16, "studs": 16}])
        );
    }

    #[test]
    fn describe_requires_a_brick() {
        assert!(Cli::try_parse_from(["legobrick", "describe"]).is_err());
    }

    #[test]
    fn describe_rejects_malformed_brick() {
        let err = match Cli::try_parse_from(["legobrick", "describe", "red2x4"]) {
            Ok(_) => panic!("malformed brick was accepted"),
            Err(e) => e,
        };
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(err.to_string().contains("missing ':' between color and dimensions"));
    }

    #[test]
    fn connect_text() {
        let out = run_cli(&["connect", "green:1x8", "yellow:2x2"]);
        assert_eq!(out, "Can green (1x8) connect to yellow (2x2)? false\n");
    }

    #[test]
    fn connect_json() {
        let out = run_cli(&["--json", "connect", "red:2x4", "yellow:2x2"]);
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["connects"], true);
        assert_eq!(json["from"]["studs"], 8);
        assert_eq!(json["to"]["color"], "yellow");
    }

    #[test]
    fn connect_rejects_bad_dimension() {
        assert!(Cli::try_parse_from(["legobrick", "connect", "red:2x4", "blue:twox2"]).is_err());
    }

    // ===========================================================================
    // config
    // ===========================================================================

    #[test]
    fn config_subcommand_prints_effective_toml() {
        let file = config_file("[output]\nbar_glyph = \"#\"\n");
        let path = file.path().to_str().unwrap();
        let out = run_cli(&["--config", path, "config"]);
        let config = DemoConfig::from_toml(&out).unwrap();
        assert_eq!(config.output.bar_glyph, "#");
        assert!(out.contains("[[collection.bricks]]"));
    }
}
