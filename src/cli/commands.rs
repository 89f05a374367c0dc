use anyhow::Result;
use clap::Parser;

use crate::api::{DEFAULT_API_URL, SlackClient};
use crate::filters::ChannelPattern;
use crate::sweep::{SweepOptions, run_sweep};
use crate::timestamps::{Cutoff, pretty_date, pretty_ts};
use crate::utils::{init_logging, mask_token};

#[derive(Parser)]
#[command(name = "slack-sweeper")]
#[command(version = "0.1.0")]
#[command(about = "Delete old Slack messages and files in bulk", long_about = None)]
pub struct Cli {
    /// Slack user token (xoxp-...)
    #[arg(
        long,
        env = "MY_SLACK_TOKEN",
        hide_env_values = true,
        value_parser = clap::builder::NonEmptyStringValueParser::new()
    )]
    pub token: String,

    /// Limit cleanup to a specific Slack user (username without the `@` sign)
    #[arg(long)]
    pub user: Option<String>,

    /// Filter channels (public, private, multi-party and DM) by name, e.g. 'foo,bar'
    /// matches names containing foo or bar, ignoring case
    #[arg(long)]
    pub filter: Option<String>,

    /// Delete messages and files before this date (UTC, format: YYYYMMDD-HHMM)
    #[arg(long, value_parser = Cutoff::parse)]
    pub before: Cutoff,

    /// Perform the actual delete operations. Omitting this flag will perform a DRY-RUN.
    #[arg(long)]
    pub commit: bool,

    /// Log harvesting progress in detail
    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long, env = "SLACK_API_URL", default_value = DEFAULT_API_URL, hide = true)]
    pub api_url: String,
}

impl Cli {
    pub fn sweep_options(&self) -> SweepOptions {
        let mut options = SweepOptions::new(self.before);
        // An empty handle means no author restriction.
        options.user = self
            .user
            .as_deref()
            .map(|u| u.trim().trim_start_matches('@').to_string())
            .filter(|u| !u.is_empty());
        options.pattern = self.filter.as_deref().map(ChannelPattern::parse).unwrap_or_default();
        options.commit = self.commit;
        options
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    println!(
        "Cleaning Slack messages before: {} (Slack TS: {} , Check: {})",
        pretty_date(&cli.before.instant),
        cli.before.ts,
        pretty_ts(&cli.before.ts)
    );
    println!("Using token: {}", mask_token(&cli.token));
    if !cli.commit {
        println!("DRY-RUN: nothing will be deleted");
    }

    let client = SlackClient::new(&cli.api_url, &cli.token)?;
    run_sweep(&client, &cli.sweep_options())?;

    Ok(())
}
