use anyhow::{anyhow, Context, Result};
use mazecost::config::Config;
use mazecost::input::parse_cases;
use mazecost::logger;
use mazecost::report::run_cases;
use std::env;
use std::io::{self, Read, Write};

fn main() -> Result<()> {
    logger::init(log::LevelFilter::Warn).map_err(|error| anyhow!("failed to set log: {error}"))?;

    let config = Config::load();
    log::set_max_level(config.logging.level_filter());

    let mut json = false;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            other => {
                eprintln!("Usage: mazecost [--json] < cases.txt");
                return Err(anyhow!("unknown argument `{other}`"));
            }
        }
    }

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("reading test cases from stdin")?;

    let cases = parse_cases(&input).context("malformed input")?;
    let (reports, summary) = run_cases(&cases, &config.output);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if json {
        for report in &reports {
            serde_json::to_writer(&mut out, &report.record())?;
            writeln!(out)?;
        }
        return Ok(());
    }

    for report in &reports {
        write!(out, "{}", report.render(&config.output))?;
    }

    if config.output.show_summary {
        if let Some(line) = summary.render() {
            writeln!(out, "{line}")?;
        }
    }

    Ok(())
}
