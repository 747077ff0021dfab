use clap::Parser;
use svg_gallery::core::ConfigProvider;
use svg_gallery::utils::{logger, validation::Validate};
use svg_gallery::{
    CliConfig, GalleryClient, GalleryCommand, HttpGallerySource, LocalSink, TomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting svg-gallery CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let command = config.command.clone();

    if let Some(path) = config.config.clone() {
        let file_config = TomlConfig::from_file(&path)?;
        check_config(&file_config);
        run(file_config, command).await
    } else {
        check_config(&config);
        run(config, command).await
    }
}

fn check_config<C: Validate>(config: &C) {
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("Error: {}", e);
        eprintln!("Hint: pass --api-endpoint <url> or --config <file.toml>");
        std::process::exit(1);
    }
}

async fn run<C: ConfigProvider>(config: C, command: GalleryCommand) -> anyhow::Result<()> {
    let output_path = config.output_path().to_string();
    let sink = LocalSink::new(output_path.clone());
    let source = HttpGallerySource::new(config)?;
    let client = GalleryClient::new(source, sink);

    match command {
        GalleryCommand::List => {
            let entries = client.list_entries().await?;
            if entries.is_empty() {
                println!("No SVG files found.");
            }
            for entry in &entries {
                println!("{:<24} {:<32} {:>5} downloads", entry.id, entry.name, entry.downloads);
            }
        }
        GalleryCommand::Preview { id } => {
            let svg = client.preview(&id).await?;
            println!("{}", svg);
        }
        GalleryCommand::Download { id } => {
            let filename = client.download_svg(&id).await?;
            println!("Saved {}/{}", output_path, filename);
        }
        GalleryCommand::Png { id } => {
            let filename = client.download_png(&id).await?;
            println!("Saved {}/{}", output_path, filename);
        }
    }

    Ok(())
}
