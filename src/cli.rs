use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "license-gate",
    about = "Check dependency licenses against permitted lists",
    version
)]
pub struct Cli {
    /// Dependency → licenses report generated by the build tool (YAML or JSON)
    #[arg(
        env = "LICENSE_GATE_REPORT",
        value_name = "REPORT",
        default_value = "target/generated-sources/license/LICENSES.yml"
    )]
    pub report: PathBuf,

    /// Repository-wide license config
    #[arg(
        long,
        env = "LICENSE_GATE_CONFIG",
        value_name = "FILE",
        default_value = "./.github/permitted-licenses.yml"
    )]
    pub config: PathBuf,

    /// Project-specific license config, merged on top of --config
    #[arg(
        long,
        env = "LICENSE_GATE_ADDITIONAL_CONFIG",
        value_name = "FILE",
        default_value = "./.github/additional-licenses.yml"
    )]
    pub additional_config: PathBuf,

    /// Where to write the result file
    #[arg(
        long,
        short,
        env = "LICENSE_GATE_OUTPUT",
        value_name = "FILE",
        default_value = "license-check-result.yml"
    )]
    pub output: PathBuf,

    /// Console output format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub format: ReportFormat,

    /// List every checked artifact and enable debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print the summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}
