//! CLI definition and dispatch.
//!
//! The binary plays the page-composer role: it wires the filesystem adapters
//! to the engine, renders a demonstration dashboard page, and offers token
//! inspection and theme validation for theme authors.

use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::fs_theme_adapter::FsThemeAdapter;
use crate::domain::compose::PageBuilder;
use crate::domain::descriptor::{
    EmptyStateDescriptor, HeaderOptions, MetricCard, NavItem, NotificationDescriptor,
    NotificationKind, TableDescriptor, WidgetDescriptor, WidgetSize,
};
use crate::domain::error::ChartmasterError;
use crate::domain::markup::Markup;
use crate::domain::render::{
    REQUIRED_TOKENS, render_empty_state, render_header, render_metric_card, render_notification,
    render_table, render_widget,
};
use crate::domain::theme::{FALLBACK_STYLESHEET, ThemeLoader};
use crate::domain::tokens::TokenStore;
use crate::ports::config_port::ConfigPort;
use crate::ports::theme_port::ThemeSourcePort;

#[derive(Parser, Debug)]
#[command(name = "chartmaster", about = "Trading dashboard rendering engine")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the demo dashboard page to an HTML file
    Render {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Current navigation path, used for active-item highlighting
        #[arg(long, default_value = "/dashboard")]
        path: String,
    },
    /// List every design token parsed from the stylesheet
    Tokens {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Check the stylesheet parses and defines all renderer-required tokens
    Validate {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Render {
            config,
            output,
            path,
        } => run_render(config.as_ref(), output.as_ref(), &path),
        Command::Tokens { config } => run_tokens(config.as_ref()),
        Command::Validate { config } => run_validate(config.as_ref()),
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<Option<FileConfigAdapter>, ExitCode> {
    let Some(path) = path else {
        return Ok(None);
    };
    eprintln!("Loading config from {}", path.display());
    FileConfigAdapter::from_file(path).map(Some).map_err(|e| {
        let err = ChartmasterError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

fn theme_adapter(config: Option<&FileConfigAdapter>) -> FsThemeAdapter {
    match config {
        Some(config) => FsThemeAdapter::from_config(config),
        None => FsThemeAdapter::default(),
    }
}

/// Token store from the same resource the theme loader injects, degraded to
/// the fallback stylesheet when the resource is unreadable.
fn load_token_store(adapter: &FsThemeAdapter) -> Result<TokenStore, ChartmasterError> {
    let css = match adapter.read_stylesheet() {
        Ok(css) => css,
        Err(err) => {
            log::warn!("stylesheet unavailable ({err}); tokens from fallback theme");
            FALLBACK_STYLESHEET.to_string()
        }
    };
    TokenStore::from_stylesheet(&css)
}

fn header_options(config: Option<&FileConfigAdapter>) -> HeaderOptions {
    let defaults = HeaderOptions::default();
    match config {
        Some(config) => HeaderOptions {
            show_search: config.get_bool("header", "show_search", defaults.show_search),
            show_notification_bell: config.get_bool(
                "header",
                "show_notification_bell",
                defaults.show_notification_bell,
            ),
            show_profile: config.get_bool("header", "show_profile", defaults.show_profile),
        },
        None => defaults,
    }
}

fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem::new("Dashboard", "/dashboard"),
        NavItem::new("Charts", "/charts"),
        NavItem::new("Scanner", "/scanner"),
        NavItem::new("Backtest", "/backtest"),
        NavItem::new("Watchlists", "/watchlists"),
        NavItem::new("Calendar", "/calendar"),
    ]
}

// Demo styling policy: a row is positive or negative by the sign prefix of
// its last column. This lives here, not in the engine.
fn sign_classifier(cells: &[String]) -> Option<String> {
    match cells.last()?.chars().next()? {
        '+' => Some("positive".into()),
        '-' => Some("negative".into()),
        _ => None,
    }
}

fn run_render(
    config_path: Option<&PathBuf>,
    output_path: Option<&PathBuf>,
    current_path: &str,
) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let adapter = theme_adapter(config.as_ref());
    eprintln!("Using stylesheet {}", adapter.path().display());

    let tokens = match load_token_store(&adapter) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    eprintln!("Loaded {} design tokens", tokens.len());

    let loader = ThemeLoader::new(Box::new(adapter));
    let theme = loader.ensure_loaded("cli");
    if theme.fallback {
        eprintln!("warning: stylesheet missing, rendered with fallback theme");
    }

    let page = match compose_demo_page(&tokens, config.as_ref(), current_path, &theme) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let output = output_path
        .cloned()
        .unwrap_or_else(|| PathBuf::from("dashboard.html"));
    match fs::write(&output, page.as_str()) {
        Ok(()) => {
            eprintln!("Page written to: {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to write page: {e}");
            ExitCode::from(1)
        }
    }
}

fn compose_demo_page(
    tokens: &TokenStore,
    config: Option<&FileConfigAdapter>,
    current_path: &str,
    theme: &crate::domain::theme::ThemeStatus,
) -> Result<Markup, ChartmasterError> {
    let title = config
        .and_then(|c| c.get_string("page", "title"))
        .unwrap_or_else(|| "ChartMaster Pro".to_string());
    let options = header_options(config);

    let header = render_header(tokens, &nav_items(), current_path, &options);

    let sp500 = render_metric_card(
        tokens,
        &MetricCard {
            label: "S&P 500".into(),
            value: "5,870.62".into(),
            change: Some("+0.4%".into()),
            change_class: Some("price-positive".into()),
        },
    );
    let vix = render_metric_card(
        tokens,
        &MetricCard {
            label: "VIX".into(),
            value: "14.2".into(),
            change: Some("-2.1%".into()),
            change_class: Some("price-negative".into()),
        },
    );

    let table = render_table(
        tokens,
        &TableDescriptor::new(
            vec!["Symbol".into(), "Price".into(), "Change %".into()],
            vec![
                vec!["AAPL".into(), "$175.50".into(), "+1.2%".into()],
                vec!["MSFT".into(), "$378.20".into(), "-0.5%".into()],
                vec!["NVDA".into(), "$141.95".into(), "+2.8%".into()],
            ],
        )
        .sortable(),
        Some(&sign_classifier),
    )?;

    let overview = render_widget(
        tokens,
        &WidgetDescriptor::new("Market Overview", table, WidgetSize::Large)
            .with_actions(vec!["Refresh".into(), "Export".into()]),
    )?;

    let notice = render_notification(
        tokens,
        &NotificationDescriptor::new(NotificationKind::Info, "Market opens in 15 minutes"),
    )?;

    let watchlist = render_empty_state(
        tokens,
        &EmptyStateDescriptor {
            icon: Markup::trusted("\u{1f4c8}"),
            title: "No symbols yet".into(),
            description: "Add a symbol to start tracking it.".into(),
            action_label: Some("Add symbol".into()),
        },
    )?;

    Ok(PageBuilder::new(title.as_str())
        .theme(theme)
        .push(header)
        .push(notice)
        .push(Markup::trusted("<main class=\"dashboard-grid\">"))
        .push(sp500)
        .push(vix)
        .push(overview)
        .push(watchlist)
        .push(Markup::trusted("</main>"))
        .finish())
}

fn run_tokens(config_path: Option<&PathBuf>) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let adapter = theme_adapter(config.as_ref());
    let tokens = match load_token_store(&adapter) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    for (category, key, value) in tokens.iter() {
        println!("--{}-{}: {}", category.prefix(), key, value);
    }
    eprintln!("{} tokens", tokens.len());
    ExitCode::SUCCESS
}

fn run_validate(config_path: Option<&PathBuf>) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let adapter = theme_adapter(config.as_ref());
    eprintln!("Validating stylesheet {}", adapter.path().display());

    let css = match adapter.read_stylesheet() {
        Ok(css) => css,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let tokens = match TokenStore::from_stylesheet(&css) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let mut missing = 0usize;
    for (category, key) in REQUIRED_TOKENS {
        if tokens.get(*category, key).is_err() {
            eprintln!("missing required token --{}-{}", category.prefix(), key);
            missing += 1;
        }
    }

    if missing > 0 {
        eprintln!("{missing} required tokens missing");
        return ExitCode::from(3);
    }

    eprintln!(
        "Stylesheet valid: {} tokens, all renderer requirements met",
        tokens.len()
    );
    ExitCode::SUCCESS
}
