use anyhow::Result;

fn main() -> Result<()> {
    browser_bridge::cli::run()
}
