use std::env;
use std::process::ExitCode;

use recursor_exporter::config::{opts, usage, Config};
use recursor_exporter::ExporterBuilder;
use tracing::{error, info, Level};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("recursor-exporter");
    let opts = opts();

    let matches = match opts.parse(args.iter().skip(1)) {
        Ok(m) => m,
        Err(f) => {
            eprintln!("Failed to parse command line args: {}", f);
            eprint!("{}", usage(program, &opts));
            return ExitCode::FAILURE;
        }
    };

    if matches.opt_present("help") {
        print!("{}", usage(program, &opts));
        return ExitCode::SUCCESS;
    }

    let config = match Config::from_matches(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(if config.debug { Level::DEBUG } else { Level::INFO })
        .init();

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = ExporterBuilder::new()
        .with_http_listener(config.listen_address)
        .with_telemetry_path(config.telemetry_path.as_str())?
        .with_scrape_timeout(config.scrape_timeout);
    for address in &config.allowed_addresses {
        builder = builder.add_allowed_address(address)?;
    }

    let runtime = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;

    info!(
        listen_address = %config.listen_address,
        telemetry_path = %config.telemetry_path,
        command = %config.control_command.command_line(),
        "starting recursor exporter"
    );

    runtime.block_on(async move {
        let exporter = builder.build(config.control_command)?;
        exporter.await?;
        Ok::<_, Box<dyn std::error::Error>>(())
    })
}
