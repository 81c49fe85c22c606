use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::Parser;
use liturgia_ui::core::navigation::{
    adjacent_dates, check_selectable, date_picker_bounds, go_to_today, navigate_to_date,
    parse_calendar_date,
};
use liturgia_ui::core::ConfigProvider;
use liturgia_ui::utils::logger;
use liturgia_ui::{
    apply_preview, compute_preview, export_as_text, AppConfig, CliConfig, Command,
    CustomizationOptions, DisplayState, HttpLiturgyApi, LiturgyLoader, LoadOutcome, LocalStorage,
    MemorySurfaces, NotificationCenter,
};

const PAGE_PATH: &str = "/liturgia-diaria/";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let today = Local::now().date_naive();

    match &cli.command {
        Command::Preview {
            font_size,
            font_family,
            color,
        } => run_preview(&config, *font_size, font_family.clone(), color.clone())?,
        Command::Load { date } => {
            let date = resolve_date(date.as_deref(), today)?;
            run_load(&config, date, today).await?;
        }
        Command::Export { date, .. } => {
            let date = resolve_date(date.as_deref(), today)?;
            run_export(&config, date, today).await?;
        }
        Command::Range => {
            let range = date_picker_bounds(today);
            println!("{} .. {}", range.min, range.max);
        }
    }

    Ok(())
}

fn resolve_date(arg: Option<&str>, today: NaiveDate) -> anyhow::Result<NaiveDate> {
    match arg {
        Some(value) => Ok(check_selectable(parse_calendar_date(value)?, today)?),
        None => Ok(today),
    }
}

fn run_preview(
    config: &AppConfig,
    font_size: Option<f64>,
    font_family: Option<String>,
    color: Option<String>,
) -> anyhow::Result<()> {
    let defaults = config.preview.clone();
    let options = CustomizationOptions {
        font_size_px: font_size.unwrap_or(defaults.font_size_px),
        font_family_id: font_family.unwrap_or(defaults.font_family_id),
        liturgical_color_id: color.unwrap_or(defaults.liturgical_color_id),
    };

    let style = compute_preview(&options);
    let mut surfaces = MemorySurfaces::with_all();
    apply_preview(&style, &mut surfaces);

    println!("{}", serde_json::to_string_pretty(&style)?);
    print!("{}", surfaces);
    Ok(())
}

/// Loads one date into a fresh page model. Returns the state shown, if any.
async fn load_into_page(
    config: &AppConfig,
    date: NaiveDate,
    surfaces: &mut MemorySurfaces,
    center: &NotificationCenter,
) -> anyhow::Result<Option<DisplayState>> {
    let api = HttpLiturgyApi::from_config(config)?;
    let loader = LiturgyLoader::new(api);

    tracing::info!("📅 Loading liturgy for {} from {}", date, config.base_url());
    let outcome = loader.load_and_render(date, surfaces, center).await;

    for notification in center.active() {
        eprintln!("{}", notification);
    }

    Ok(match outcome {
        LoadOutcome::Loaded { update, .. } => Some(update),
        _ => None,
    })
}

async fn run_load(config: &AppConfig, date: NaiveDate, today: NaiveDate) -> anyhow::Result<()> {
    let mut surfaces = MemorySurfaces::with_all();
    let center = NotificationCenter::with_ttl(config.notification_ttl());

    if load_into_page(config, date, &mut surfaces, &center)
        .await?
        .is_none()
    {
        std::process::exit(2);
    }
    print!("{}", surfaces);

    let current = navigate_to_date(PAGE_PATH, date);
    let (prev, next) = adjacent_dates(date);
    println!(
        "◀ {}  | {} |  {} ▶   (hoje: {})",
        navigate_to_date(&current, prev),
        current,
        navigate_to_date(&current, next),
        go_to_today(&current, today)
    );
    Ok(())
}

/// The file is named for the day of export, like the browser download.
async fn run_export(config: &AppConfig, date: NaiveDate, today: NaiveDate) -> anyhow::Result<()> {
    let mut surfaces = MemorySurfaces::with_all();
    let center = NotificationCenter::with_ttl(config.notification_ttl());

    let Some(state) = load_into_page(config, date, &mut surfaces, &center).await? else {
        std::process::exit(2);
    };

    let storage = LocalStorage::new(config.output_path().to_string());
    let export_center = NotificationCenter::with_ttl(config.notification_ttl());
    let exported = export_as_text(&storage, &state.to_text(), today, &export_center)
        .await
        .with_context(|| format!("failed to export to {}", config.output_path()))?;

    for notification in export_center.active() {
        eprintln!("{}", notification);
    }
    if let Some(filename) = exported {
        tracing::info!("📁 Output saved to: {}/{}", storage.base_path(), filename);
        println!("📁 {}/{}", storage.base_path(), filename);
    }
    Ok(())
}
