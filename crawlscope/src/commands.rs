use crate::CLAP_STYLING;
use clap::{arg, command};

fn submit_delay_arg() -> clap::Arg {
    arg!(--"submit-delay-ms" <MILLIS>)
        .required(false)
        .help("How long a stubbed submission stays in flight [default: 1000]")
        .value_parser(clap::value_parser!(u64))
}

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("crawlscope")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("crawlscope")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("ui")
                .about("Open the interactive crawl options form")
                .arg(submit_delay_arg()),
        )
        .subcommand(command!("catalog").about("List the available crawl options"))
        .subcommand(
            command!("check")
                .about(
                    "Validate a base URL and a crawl option selection without the form. The two \
                are checked independently.",
                )
                .arg(
                    arg!(-u --"url" <URL>)
                        .required(false)
                        .help("Base URL of the site (checked only when given)"),
                )
                .arg(
                    arg!(-s --"scope" <OPTION>)
                        .required(false)
                        .help("Crawl option: all, startWith or one")
                        .action(clap::ArgAction::Append)
                        .conflicts_with("file"),
                )
                .arg(
                    arg!(-p --"path" <PATH>)
                        .required(false)
                        .help("Path prefix for the startWith option, e.g. /blog")
                        .conflicts_with("file"),
                )
                .arg(
                    arg!(--"page-url" <URL>)
                        .required(false)
                        .help("Full page URL for the one option")
                        .conflicts_with("file"),
                )
                .arg(
                    arg!(-F --"file" <PATH>)
                        .required(false)
                        .help("JSON document with items, urlPath and pageUrl")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    arg!(--"submit")
                        .required(false)
                        .help("Run the stubbed submission when the option form is valid")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(submit_delay_arg())
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Report format: text, json")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                ),
        )
}
