use std::{path::PathBuf, time::Duration};

use clap::{Args, Parser, Subcommand};
use common::{
    config::CollectorConfig,
    constants::{OUTPUT_DIR, TEST_PRODUCT_CATEGORY, TEST_PRODUCT_URL},
};
use crawler::launch::LaunchConfig;

/// Listing pages render more cards per screen when zoomed out.
pub const URL_PHASE_ZOOM_PERCENT: u32 = 25;
pub const DEFAULT_ZOOM_PERCENT: u32 = 100;

/// Collects supplement product urls and nutrition facts from maxtitanium.eu
#[derive(Debug, Parser)]
#[command(name = "collector")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory data files are read from and written to
    #[arg(long, global = true, default_value = OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Chrome or Chromium executable to drive
    #[arg(long, global = true)]
    pub chrome_path: Option<PathBuf>,

    /// Show the browser window instead of running headless
    #[arg(long, global = true)]
    pub headed: bool,

    /// Page zoom in percent (url collection defaults to 25, everything else to 100)
    #[arg(long, global = true)]
    pub zoom: Option<u32>,

    /// Scrolls allowed while looking for the nutrition panel
    #[arg(long, global = true)]
    pub max_scrolls: Option<u32>,

    /// Pause between products and between categories, in seconds
    #[arg(long, global = true)]
    pub request_delay_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Collect product urls from the default categories
    Urls,

    /// Collect nutrition facts for every product in the url file
    Nutrition,

    /// Collect urls, then nutrition facts for them
    Full,

    /// Collect a single product into its own file
    TestProduct(TestProductArgs),

    /// Check that a browser can be found, started and driven
    BrowserCheck,
}

#[derive(Debug, Args)]
pub struct TestProductArgs {
    /// Product page to collect
    #[arg(long, default_value = TEST_PRODUCT_URL)]
    pub url: String,

    /// Category written next to the product
    #[arg(long, default_value = TEST_PRODUCT_CATEGORY)]
    pub category: String,
}

impl Cli {
    pub fn collector_config(&self) -> CollectorConfig {
        let mut config = CollectorConfig::default();

        if let Some(max_scrolls) = self.max_scrolls {
            config = config.with_max_scrolls(max_scrolls);
        }

        if let Some(delay) = self.request_delay_secs {
            config = config.with_request_delay(Duration::from_secs(delay));
        }

        config
    }

    /// Browser options for a phase whose natural zoom is `default_zoom`.
    /// An explicit `--zoom` wins.
    pub fn launch_config(&self, default_zoom: u32) -> LaunchConfig {
        LaunchConfig::builder()
            .set_headless(!self.headed)
            .set_zoom_percent(self.zoom.unwrap_or(default_zoom))
            .set_executable(self.chrome_path.clone())
            .build()
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_the_collector_files() {
        let cli = Cli::try_parse_from(["collector", "urls"]).unwrap();

        assert_eq!(cli.output_dir, PathBuf::from("dados"));
        assert!(matches!(cli.command, Command::Urls));
        assert!(cli.chrome_path.is_none());

        let launch = cli.launch_config(URL_PHASE_ZOOM_PERCENT);
        assert!(launch.is_headless());
        assert_eq!(launch.zoom_percent(), 25);

        let config = cli.collector_config();
        assert_eq!(config.max_scrolls, 10);
        assert_eq!(config.product_delay, Duration::from_secs(3));
    }

    #[test]
    fn global_flags_are_accepted_after_the_subcommand() {
        let cli = Cli::try_parse_from([
            "collector",
            "nutrition",
            "--headed",
            "--zoom",
            "80",
            "--max-scrolls",
            "4",
            "--request-delay-secs",
            "1",
            "--output-dir",
            "/tmp/out",
        ])
        .unwrap();

        let launch = cli.launch_config(DEFAULT_ZOOM_PERCENT);
        assert!(!launch.is_headless());
        assert_eq!(launch.zoom_percent(), 80);

        let config = cli.collector_config();
        assert_eq!(config.max_scrolls, 4);
        assert_eq!(config.product_delay, Duration::from_secs(1));
        assert_eq!(config.category_delay, Duration::from_secs(1));
        assert_eq!(cli.output_dir, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_product_defaults_to_the_reference_product() {
        let cli = Cli::try_parse_from(["collector", "test-product"]).unwrap();

        let Command::TestProduct(args) = cli.command else {
            panic!("expected test-product");
        };
        assert_eq!(args.url, TEST_PRODUCT_URL);
        assert_eq!(args.category, "Proteínas");
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["collector"]).is_err());
    }
}
