fn main() -> anyhow::Result<()> {
    slack_sweeper::cli::run()
}
