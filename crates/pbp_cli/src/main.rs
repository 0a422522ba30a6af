use anyhow::Context;
use clap::Parser;

use tracing_subscriber::{filter::EnvFilter, fmt::format::JsonFields, layer::SubscriberExt, util::SubscriberInitExt, Layer};

use pbp_cli::config::Config;
use pbp_cli::runner;

fn main() -> anyhow::Result<()> {
	dotenv::dotenv().ok();

	let config = Config::parse();
	init_tracing(&config);

	let report = runner::run(&config).with_context(|| format!("could not process {}", config.input_file.display()))?;
	runner::write_report(&report, config.output_file.as_deref()).context("could not write report")?;

	Ok(())
}

pub fn init_tracing(config: &Config) {
	let filter = config.rust_log.as_deref().and_then(|directives| EnvFilter::try_new(directives).ok()).unwrap_or_else(|| EnvFilter::new("info"));

	tracing_subscriber::registry()
		.with(if config.log_json {
			Box::new(
				tracing_subscriber::fmt::layer()
					.with_writer(std::io::stderr)
					.fmt_fields(JsonFields::default())
					.event_format(tracing_subscriber::fmt::format().json().flatten_event(true).with_span_list(false))
					.with_filter(filter),
			) as Box<dyn Layer<_> + Send + Sync>
		} else {
			Box::new(
				tracing_subscriber::fmt::layer()
					.with_writer(std::io::stderr)
					.event_format(tracing_subscriber::fmt::format().pretty())
					.with_filter(filter),
			)
		})
		.init();
}
