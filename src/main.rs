use clap::Parser;
use solar_directory::config::args::{Cli, Command, SearchArgs};
use solar_directory::core::calculator;
use solar_directory::core::i18n::Language;
use solar_directory::core::render::Renderer;
use solar_directory::core::templates::PageTemplates;
use solar_directory::utils::error::ErrorSeverity;
use solar_directory::utils::{logger, validation::Validate};
use solar_directory::{
    BuildConfig, DirectoryError, DirectoryLoader, DirectoryPage, LocalStorage, PreferenceStore,
    SiteEngine, SitePipeline,
};
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI args: {:?}", cli);

    if let Err(e) = run(&cli).await {
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low | ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

async fn run(cli: &Cli) -> Result<(), DirectoryError> {
    match &cli.command {
        Command::Build(args) => {
            let config = cli.build_config(args)?;
            config.validate()?;

            let language = match &args.lang {
                Some(code) => Language::from_code(code),
                None => stored_language(&config).await?,
            };
            tracing::info!("🚀 Building site in {} from {}", language.code(), config.source);

            let storage = LocalStorage::new(config.output_path.clone());
            let pipeline = SitePipeline::new(storage, config).with_language(language);
            let report = SiteEngine::new(pipeline).run().await?;

            println!("✅ Site built: {} files", report.files_written);
            println!(
                "📋 Listed {} of {} companies",
                report.listed_entries, report.total_entries
            );
            println!("📁 Output saved to: {}", report.output_path);
        }
        Command::Search(args) => search(cli, args).await?,
        Command::Calc { watts, hours } => {
            println!("{}", calculator::estimate(watts, hours)?.message());
        }
        Command::Lang { code } => {
            let config = cli.base_config()?;
            let prefs = PreferenceStore::new(LocalStorage::new(config.state_dir.clone()));
            let current = match code {
                Some(code) => prefs.switch(code).await?,
                None => prefs.load().await?,
            };
            println!("{}", current.as_str());
        }
    }
    Ok(())
}

async fn search(cli: &Cli, args: &SearchArgs) -> Result<(), DirectoryError> {
    let config = cli.search_config(args)?;
    config.validate()?;

    let language = stored_language(&config).await?;
    let renderer = Renderer::new(config.contact_number.clone(), language.texts());
    let mut page = DirectoryPage::new(renderer, config.filter_mode);
    let loader = DirectoryLoader::with_timeout(Duration::from_secs(config.timeout_secs));

    if let Err(e) = page.load(&loader, &config.source).await {
        if args.html {
            println!("{}", PageTemplates::new(language)?.render_container(page.container())?);
        }
        return Err(e.into());
    }

    let shown = page.on_search_input(&args.query)?;

    if args.html {
        println!("{}", PageTemplates::new(language)?.render_container(page.container())?);
        return Ok(());
    }

    for card in page.container().cards() {
        println!(
            "#{} {} | 📍 {} | ⚡ {} | {}",
            card.id, card.name, card.location, card.services, card.profile_href
        );
    }
    if shown == 0 {
        println!("{}", language.texts().no_results);
    }
    Ok(())
}

async fn stored_language(config: &BuildConfig) -> Result<Language, DirectoryError> {
    let prefs = PreferenceStore::new(LocalStorage::new(config.state_dir.clone()));
    let preference = prefs.load().await?;
    Ok(Language::from_code(preference.as_str()))
}
