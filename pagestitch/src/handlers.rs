use anyhow::{Context, Result, bail};
use clap::ArgMatches;
use colored::Colorize;
use pagestitch_core::dom::Document;
use pagestitch_core::fallback::{Component, load_fallback_component};
use pagestitch_core::highlight::{current_page_name, set_active_navigation_link};
use pagestitch_core::report::{ReportFormat, generate_load_report, render_text};
use pagestitch_core::{ComponentLoader, LoadReport, LoaderOptions, Page};
use pagestitch_fetch::{Fetch, SiteFetcher};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;
use url::Url;

/// Install the stderr log subscriber; verbosity counts `-v` flags
pub fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Interpret a PAGE argument as a URL, or as a local file when it is not one
pub fn parse_page_location(input: &str) -> Result<Url> {
    if let Ok(url) = Url::parse(input)
        && matches!(url.scheme(), "http" | "https" | "file")
    {
        return Ok(url);
    }

    let expanded = shellexpand::tilde(input);
    let path = Path::new(expanded.as_ref());
    let absolute = path
        .canonicalize()
        .with_context(|| format!("Cannot open page {}", path.display()))?;

    match Url::from_file_path(&absolute) {
        Ok(url) => Ok(url),
        Err(()) => bail!("Cannot turn {} into a file URL", absolute.display()),
    }
}

/// Loader options from `--base-path`, falling back to the default candidates
pub fn loader_options(base_paths: Option<Vec<String>>) -> LoaderOptions {
    match base_paths {
        Some(paths) if !paths.is_empty() => LoaderOptions { base_paths: paths },
        _ => LoaderOptions::default(),
    }
}

/// Fetch the page at `location` and run the component loader on it
pub async fn assemble_page(
    location: Url,
    options: LoaderOptions,
    timeout_secs: u64,
) -> Result<(Page, LoadReport)> {
    let fetcher = SiteFetcher::with_timeout(timeout_secs).context("Failed to create HTTP client")?;
    let html = fetcher
        .fetch_text(&location)
        .await
        .with_context(|| format!("Failed to load page {}", location))?;

    let mut page = Page::parse(location, &html);
    let loader = ComponentLoader::with_options(fetcher, options);
    let report = loader.load_all_components(&mut page).await;

    Ok((page, report))
}

/// The href the built-in navbar would highlight for `location_path`
pub fn active_link_for_path(location_path: &str) -> Option<String> {
    let mut document = Document::parse(&format!(
        r#"<div id="{}"></div>"#,
        Component::Header.element_id()
    ));
    load_fallback_component(&mut document, Component::Header.element_id());

    let link = set_active_navigation_link(&mut document, location_path)?;
    document.attribute(link, "href").map(|href| href.to_string())
}

fn page_and_options(args: &ArgMatches) -> Result<(Url, LoaderOptions, u64)> {
    let page = args
        .get_one::<String>("PAGE")
        .context("A page URL or path is required")?;
    let location = parse_page_location(page)?;
    let base_paths = args
        .get_many::<String>("base-path")
        .map(|values| values.cloned().collect());
    let timeout = *args.get_one::<u64>("timeout").unwrap_or(&10);

    Ok((location, loader_options(base_paths), timeout))
}

fn fail(error: anyhow::Error) -> ! {
    eprintln!("{} {:#}", "✗".red().bold(), error);
    std::process::exit(1);
}

pub async fn handle_assemble(args: &ArgMatches) {
    if let Err(e) = run_assemble(args).await {
        fail(e);
    }
}

async fn run_assemble(args: &ArgMatches) -> Result<()> {
    let (location, options, timeout) = page_and_options(args)?;
    let output = args.get_one::<PathBuf>("output");
    let show_report = args.get_flag("report");

    let (page, report) = assemble_page(location, options, timeout).await?;
    let html = page.to_html();

    match output {
        Some(path) => {
            fs::write(path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "{} Wrote {}",
                "✓".green().bold(),
                path.display().to_string().bright_white()
            );
        }
        None => println!("{}", html),
    }

    if show_report {
        eprint!("\n{}", render_text(&report));
    }

    Ok(())
}

pub async fn handle_probe(args: &ArgMatches) {
    if let Err(e) = run_probe(args).await {
        fail(e);
    }
}

async fn run_probe(args: &ArgMatches) -> Result<()> {
    let (location, options, timeout) = page_and_options(args)?;
    let format = args
        .get_one::<String>("format")
        .and_then(|f| ReportFormat::from_str(f))
        .unwrap_or(ReportFormat::Text);

    let (_, report) = assemble_page(location, options, timeout).await?;
    let rendered = generate_load_report(&report, format).context("Failed to render report")?;
    print!("{}", rendered);
    if format == ReportFormat::Json {
        println!();
    }

    Ok(())
}

pub fn handle_active(args: &ArgMatches) {
    let path = args.get_one::<String>("PATH").map(String::as_str).unwrap_or("");

    println!("{} {}", "Current page:".blue(), current_page_name(path));
    match active_link_for_path(path) {
        Some(href) => println!("{} {}", "Active link:".blue(), href.green().bold()),
        None => println!("{} {}", "Active link:".blue(), "none".yellow()),
    }
}

pub fn handle_fallback(args: &ArgMatches) {
    let name = args.get_one::<String>("COMPONENT").map(String::as_str).unwrap_or("");
    match Component::from_name(name) {
        Some(component) => println!("{}", component.fallback_markup()),
        None => fail(anyhow::anyhow!("Unknown component '{}'", name)),
    }
}
