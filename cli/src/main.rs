//! CLI entrypoint for winconf
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use winconf_application::{
    DecodeInput, DecodeSettingsUseCase, DescribeInput, DescribeSettingsUseCase,
    EncodeDescribeInput, EncodeDescribeUseCase, EncodeInput, EncodeSettingsUseCase,
    EncoderConfigSource,
};
use winconf_domain::known_settings;
use winconf_infrastructure::{FileEncoderConfigSource, read_document, read_text};
use winconf_presentation::{
    Cli, Command, ConsoleFormatter, JsonFormatter, OutputFormat, OutputFormatter,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let formatter: Box<dyn OutputFormatter> = match cli.output {
        OutputFormat::Table => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    };

    if !cli.command.needs_config() {
        print!("{}", formatter.catalog(known_settings()));
        return Ok(());
    }

    let Some(config_path) = cli.config.clone() else {
        bail!("--config <PATH> is required for this command.");
    };
    info!("Using encoder configuration {}", config_path.display());
    let mut source = FileEncoderConfigSource::new(config_path);
    if let Some(section) = &cli.section {
        source = source.with_section(section.clone());
    }
    let source: Arc<dyn EncoderConfigSource> = Arc::new(source);

    let output = match cli.command {
        Command::Describe { data, adjust } => {
            let input = DescribeInput {
                data: data.as_deref().map(read_text).transpose()?.map(Value::String),
                adjust: load_adjust(adjust.as_deref())?,
            };
            let described = DescribeSettingsUseCase::new(source).execute(input)?;
            formatter.described(&described)
        }
        Command::Encode {
            values,
            expected_type,
            adjust,
        } => {
            let document = read_document(&values)
                .with_context(|| format!("Failed to read values from {}", values))?;
            let Value::Object(values) = document else {
                bail!("Values must be a dictionary of setting names.");
            };
            let mut input = EncodeInput::new(values);
            if let Some(expected_type) = expected_type {
                input = input.with_expected_type(expected_type.into());
            }
            if let Some(adjust) = load_adjust(adjust.as_deref())? {
                input = input.with_adjust(adjust);
            }
            let encoded = EncodeSettingsUseCase::new(source).execute(input)?;
            formatter.encoded(&encoded)
        }
        Command::Decode { data } => {
            let text = read_text(&data)
                .with_context(|| format!("Failed to read decode data from {}", data))?;
            let decoded = DecodeSettingsUseCase::new(source).execute(DecodeInput::from_text(text))?;
            formatter.decoded(&decoded)
        }
        Command::EncodeDescribe { adjust } => {
            let input = EncodeDescribeInput {
                adjust: load_adjust(adjust.as_deref())?,
            };
            let script = EncodeDescribeUseCase::new(source).execute(input)?;
            formatter.read_script(&script)
        }
        Command::ShowSettings => formatter.catalog(known_settings()),
    };

    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn load_adjust(path: Option<&str>) -> Result<Option<Value>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let adjust = read_document(path)
        .with_context(|| format!("Failed to read adjust configuration from {}", path))?;
    Ok(Some(adjust))
}
