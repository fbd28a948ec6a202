use anyhow::{Context, bail};
use tracing::debug;

use relay_features::{BuildFeatures, BuildInfo};
use relay_observe::{LoggerConfig, init_logger};

const NAME: &str = "relay";
const USAGE: &str = "Usage: relay-version [--json | --tags]";

/// What to print on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Banner,
    Json,
    Tags,
}

fn parse_args<I>(args: I) -> anyhow::Result<Output>
where
    I: IntoIterator<Item = String>,
{
    let mut output = Output::Banner;
    for arg in args {
        let next = match arg.as_str() {
            "--json" => Output::Json,
            "--tags" => Output::Tags,
            other => bail!("unknown argument: {other}\n{USAGE}"),
        };
        if output != Output::Banner && output != next {
            bail!("--json and --tags are mutually exclusive\n{USAGE}");
        }
        output = next;
    }
    Ok(output)
}

fn render(output: Output, info: &BuildInfo) -> anyhow::Result<String> {
    Ok(match output {
        Output::Banner => info.banner(),
        Output::Json => serde_json::to_string(info).context("serialize build info")?,
        Output::Tags => info.tags_line(),
    })
}

fn main() -> anyhow::Result<()> {
    // 1) logger
    let cfg = LoggerConfig::from_env()?;
    init_logger(&cfg)?;

    // 2) args
    let output = parse_args(std::env::args().skip(1))?;

    // 3) capabilities
    let features = BuildFeatures::compiled();
    let info = BuildInfo::new(NAME, env!("CARGO_PKG_VERSION"), &features);
    debug!(tags = ?info.tags, "computed build tags");

    println!("{}", render(output, &info)?);
    Ok(())
}
