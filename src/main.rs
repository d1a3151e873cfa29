use anyhow::Context;
use clap::Parser;
use dec2bin::core::samples::{DEFAULT_SAMPLE, SAMPLE_INPUTS};
use dec2bin::domain::ports::Renderer;
use dec2bin::utils::{logger, validation::Validate};
use dec2bin::{
    BatchSummary, CliConfig, ConversionEngine, Converter, Dec2BinError, JsonRenderer,
    OutputFormat, TextRenderer, TomlConfig,
};
use std::io::{self, BufRead, IsTerminal, Read};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting dec2bin");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading settings from: {}", path.display());
            match TomlConfig::from_file(path) {
                Ok(settings) => settings,
                Err(e) => exit_with(&e),
            }
        }
        None => TomlConfig::default(),
    };

    // 驗證配置
    if let Err(e) = settings.validate() {
        exit_with(&e);
    }

    let converter = Converter::new(settings.limits());
    let format = cli.format.unwrap_or_else(|| settings.output_format());
    let show_trace = settings.show_trace() && !cli.no_trace;
    tracing::debug!(
        "Limits: {:?}, format: {:?}, trace: {}",
        converter.limits(),
        format,
        show_trace
    );

    let summary = match format {
        OutputFormat::Text => {
            let renderer = TextRenderer::new(show_trace);
            run(&cli, ConversionEngine::new(converter, renderer))?
        }
        OutputFormat::Json => run(&cli, ConversionEngine::new(converter, JsonRenderer))?,
    };

    if !summary.is_clean() {
        std::process::exit(1);
    }

    Ok(())
}

fn run<R: Renderer>(
    cli: &CliConfig,
    engine: ConversionEngine<R>,
) -> anyhow::Result<BatchSummary> {
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    let summary = if cli.samples {
        engine.run(SAMPLE_INPUTS, &mut out, &mut err)
    } else if !cli.values.is_empty() {
        engine.run(&cli.values, &mut out, &mut err)
    } else {
        tracing::info!("Reading numbers from stdin, one per line");
        let stdin = io::stdin();
        // 互動模式先示範預設範例
        let reader: Box<dyn BufRead> = if stdin.is_terminal() {
            let example = io::Cursor::new(format!("{DEFAULT_SAMPLE}\n"));
            Box::new(example.chain(stdin.lock()))
        } else {
            Box::new(stdin.lock())
        };
        engine.run_reader(reader, &mut out, &mut err)
    };

    summary.context("conversion run failed")
}

fn exit_with(e: &Dec2BinError) -> ! {
    tracing::error!("❌ {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
