use commands::command_argument_builder;
use crawlscope::handlers::{handle_catalog, handle_check, handle_ui, init_logging};
use crawlscope_core::print_banner;

mod commands;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");

    // The TUI owns the screen and JSON output must stay parseable
    let banner_allowed = match chosen_command.subcommand() {
        Some(("ui", _)) => false,
        Some(("check", args)) => args.get_one::<String>("format").map(String::as_str) != Some("json"),
        _ => true,
    };
    if !quiet && banner_allowed {
        print_banner();
    }

    match chosen_command.subcommand() {
        None => {
            // No subcommand provided, just show the banner
        }
        Some(("ui", primary_command)) => {
            if let Err(e) = handle_ui(primary_command) {
                eprintln!("Error running TUI: {}", e);
                std::process::exit(1);
            }
        }
        Some(("catalog", _)) => handle_catalog(),
        Some(("check", primary_command)) => {
            init_logging();
            match handle_check(primary_command).await {
                Ok(true) => {}
                Ok(false) => std::process::exit(1),
                Err(e) => {
                    eprintln!("✗ {}", e);
                    std::process::exit(1);
                }
            }
        }
        _ => unreachable!("clap should ensure we don't get here"),
    }
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
