use crate::CLAP_STYLING;
use clap::{arg, command};

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("pagestitch")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("pagestitch")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .arg(
            arg!(-v --"verbose" "Log progress to stderr (-v info, -vv debug)")
                .required(false)
                .action(clap::ArgAction::Count)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            command!("assemble")
                .about(
                    "Load a page, inject its header and footer fragments and print the \
                resulting HTML.",
                )
                .arg(arg!(<PAGE>).help("Page URL (http, https, file) or local path"))
                .args(loader_args())
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Write the HTML to a file (default: stdout)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    arg!(--"report")
                        .required(false)
                        .help("Print the load report to stderr")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            command!("probe")
                .about("Show where each fragment of a page would be loaded from")
                .arg(arg!(<PAGE>).help("Page URL (http, https, file) or local path"))
                .args(loader_args())
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Report format: text, json")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                ),
        )
        .subcommand(
            command!("active")
                .about("Show which navigation link is highlighted for a location path")
                .arg(
                    arg!([PATH])
                        .required(false)
                        .help("Location path, e.g. /blog/my-post.html (default: empty)"),
                ),
        )
        .subcommand(
            command!("fallback")
                .about("Print the built-in markup for a fragment")
                .arg(
                    arg!(<COMPONENT>)
                        .help("Which fragment to print")
                        .value_parser(["header", "footer"]),
                ),
        )
}

fn loader_args() -> [clap::Arg; 2] {
    [
        arg!(-b --"base-path" <PREFIX>)
            .required(false)
            .help(
                "Candidate components directory, relative to the page. Repeatable; \
            replaces the defaults (./components/, ../components/, /components/)",
            )
            .action(clap::ArgAction::Append),
        arg!(--"timeout" <SECONDS>)
            .required(false)
            .help("Request timeout in seconds")
            .value_parser(clap::value_parser!(u64))
            .default_value("10"),
    ]
}
