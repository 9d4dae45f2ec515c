use anyhow::Result;
use clap::ArgMatches;
use colored::Colorize;
use crawlscope_core::input::load_raw_input;
use crawlscope_core::validate::validate_raw;
use crawlscope_core::{
    BaseUrlForm, CrawlRequest, CrawlScope, FieldErrors, FormConfig, RawOptionInput, Submitter,
    catalog,
};
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::json;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Structured logging to stderr, level from RUST_LOG (default info)
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Form settings, falling back to the core defaults for anything not given
pub fn form_config(submit_delay_ms: Option<u64>) -> FormConfig {
    match submit_delay_ms {
        Some(millis) => FormConfig::default().with_submit_delay_ms(millis),
        None => FormConfig::default(),
    }
}

fn config_from_args(args: &ArgMatches) -> FormConfig {
    form_config(args.get_one::<u64>("submit-delay-ms").copied())
}

// Helper functions for the check handler

/// Build an unchecked option form from command line values
pub fn raw_input_from_args(
    scopes: &[String],
    url_path: Option<&str>,
    page_url: Option<&str>,
) -> RawOptionInput {
    RawOptionInput {
        items: scopes.to_vec(),
        url_path: url_path.map(String::from),
        page_url: page_url.map(String::from),
    }
}

/// Option form input from either a JSON file or the individual flags
pub fn load_option_input(
    file: Option<&PathBuf>,
    scopes: &[String],
    url_path: Option<&str>,
    page_url: Option<&str>,
) -> Result<RawOptionInput, String> {
    match file {
        Some(path) => load_raw_input(path).map_err(|e| e.to_string()),
        None => Ok(raw_input_from_args(scopes, url_path, page_url)),
    }
}

/// Outcome of validating both forms. They never influence each other.
#[derive(Debug)]
pub struct CheckReport {
    /// None when no base URL was given
    pub base_url: Option<Result<Url, FieldErrors>>,
    pub options: Result<CrawlRequest, FieldErrors>,
}

impl CheckReport {
    pub fn is_valid(&self) -> bool {
        let base_ok = match &self.base_url {
            Some(result) => result.is_ok(),
            None => true,
        };
        base_ok && self.options.is_ok()
    }

    /// `submitted` tells whether the stubbed submission actually ran
    pub fn to_json(&self, submitted: bool) -> serde_json::Value {
        let base_url = match &self.base_url {
            None => serde_json::Value::Null,
            Some(Ok(url)) => json!({ "valid": true, "url": url }),
            Some(Err(errors)) => json!({ "valid": false, "errors": errors }),
        };
        let options = match &self.options {
            Ok(request) => json!({ "valid": true, "request": request }),
            Err(errors) => json!({ "valid": false, "errors": errors }),
        };
        json!({ "baseUrl": base_url, "options": options, "submitted": submitted })
    }

    pub fn render_text(&self) -> String {
        let mut report = String::new();

        report.push_str(&format!("{}\n", "Base URL".bright_white().bold()));
        match &self.base_url {
            None => report.push_str(&format!("  {} not provided\n", "-".dimmed())),
            Some(Ok(url)) => report.push_str(&format!("  {} {}\n", "✓".green().bold(), url)),
            Some(Err(errors)) => push_errors(&mut report, errors),
        }

        report.push_str(&format!("\n{}\n", "Crawling Options".bright_white().bold()));
        match &self.options {
            Ok(request) => {
                let option = request.scope.id().option();
                report.push_str(&format!(
                    "  {} {} {}\n",
                    "✓".green().bold(),
                    option.icon,
                    option.label.bright_white()
                ));
                match &request.scope {
                    CrawlScope::All => {}
                    CrawlScope::StartWith { url_path } => {
                        report.push_str(&format!("    path: {}\n", url_path.cyan()));
                    }
                    CrawlScope::One { page_url } => {
                        report.push_str(&format!("    page: {}\n", page_url.as_str().cyan()));
                    }
                }
            }
            Err(errors) => push_errors(&mut report, errors),
        }

        report
    }
}

fn push_errors(report: &mut String, errors: &FieldErrors) {
    for (field, error) in errors.iter() {
        report.push_str(&format!(
            "  {} {}: {} {}\n",
            "✗".red().bold(),
            field.as_str().yellow(),
            error,
            format!("({})", error.kind()).dimmed()
        ));
    }
}

/// Validate the two forms independently
pub fn build_check_report(url: Option<&str>, input: &RawOptionInput) -> CheckReport {
    let base_url = url.map(|value| {
        let mut form = BaseUrlForm::new();
        form.set_url(value);
        form.validate()
    });

    CheckReport {
        base_url,
        options: validate_raw(input),
    }
}

pub fn handle_ui(args: &ArgMatches) -> Result<()> {
    crawlscope_tui::run(config_from_args(args))
}

pub fn handle_catalog() {
    println!("{}", "Crawling Options".bright_white().bold());
    for option in catalog() {
        println!(
            "  {} {:<10} {} {}",
            option.icon,
            option.id.as_str().cyan(),
            option.label.bright_white().bold(),
            format!("- {}", option.description).dimmed()
        );
    }
}

/// Stubbed submission with a spinner for the delay. Returns whether it ran.
async fn run_submission(report: &CheckReport, args: &ArgMatches, quiet: bool) -> bool {
    let request = match &report.options {
        Ok(request) => request,
        Err(_) => {
            if !quiet {
                println!("\n{} Submission blocked by field errors", "✗".red().bold());
            }
            return false;
        }
    };

    let submitter = Submitter::new(config_from_args(args));
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message("Processing...");

    let accepted = submitter.submit_request(request.clone()).await;
    spinner.finish_and_clear();

    info!(option = %accepted.scope.id(), "Submission finished");
    if !quiet {
        println!(
            "\n{} Crawl request accepted {}",
            "✓".green().bold(),
            "(stub: nothing was sent)".dimmed()
        );
    }
    true
}

/// Returns Ok(false) when either form is invalid
pub async fn handle_check(args: &ArgMatches) -> Result<bool> {
    let url = args.get_one::<String>("url").map(String::as_str);
    let file = args.get_one::<PathBuf>("file");
    let scopes: Vec<String> = args
        .get_many::<String>("scope")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let url_path = args.get_one::<String>("path").map(String::as_str);
    let page_url = args.get_one::<String>("page-url").map(String::as_str);
    let submit = args.get_flag("submit");
    let format = args
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("text");

    let input = load_option_input(file, &scopes, url_path, page_url).map_err(anyhow::Error::msg)?;
    let report = build_check_report(url, &input);

    let json = format == "json";
    if !json {
        print!("{}", report.render_text());
    }

    let submitted = submit && run_submission(&report, args, json).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&report.to_json(submitted))?);
    }

    Ok(report.is_valid())
}
