use clap::Parser;
use profile_page::core::ConfigProvider;
use profile_page::utils::{logger, validation::Validate};
use profile_page::{
    CliConfig, HttpProfileLoader, LocalStorage, PagePipeline, PageRenderer, PageShell,
    ProfileError, TomlConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting profile-page");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match cli.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let config = match TomlConfig::from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            };
            render(config, cli.stdout).await
        }
        None => {
            let stdout = cli.stdout;
            render(cli, stdout).await
        }
    };

    match result {
        Ok(output) => {
            if let Some(output_path) = output {
                tracing::info!("✅ Page rendered successfully!");
                tracing::info!("📁 Output saved to: {}", output_path);
                println!("✅ Page rendered successfully!");
                println!("📁 Output saved to: {}", output_path);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Render failed: {} (Category: {:?})",
                e,
                e.category()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}

/// Returns the written path, or `None` when the page went to stdout.
async fn render<C>(config: C, stdout: bool) -> Result<Option<String>, ProfileError>
where
    C: ConfigProvider + Validate,
{
    // 驗證配置
    config.validate()?;

    let loader = HttpProfileLoader::from_config(&config)?;
    tracing::info!("🌐 Profile URL: {}", loader.url());

    let shell = PageShell::new(config.stylesheet());
    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = PagePipeline::new(loader, storage, config);
    let renderer = PageRenderer::new(pipeline, shell);

    if stdout {
        return match renderer.render().await {
            Ok(page) => {
                print!("{}", page.to_html());
                Ok(None)
            }
            Err((page, e)) => {
                print!("{}", page.to_html());
                Err(e)
            }
        };
    }

    renderer.run().await.map(Some)
}
