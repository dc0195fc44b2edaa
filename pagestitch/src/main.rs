use commands::command_argument_builder;
use pagestitch::handlers::{
    handle_active, handle_assemble, handle_fallback, handle_probe, init_tracing,
};
use pagestitch_core::print_banner;

mod commands;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");

    init_tracing(chosen_command.get_count("verbose"));

    // Show banner unless --quiet flag is set
    if !quiet {
        print_banner();
    }

    match chosen_command.subcommand() {
        Some(("assemble", primary_command)) => handle_assemble(primary_command).await,
        Some(("probe", primary_command)) => handle_probe(primary_command).await,
        Some(("active", primary_command)) => handle_active(primary_command),
        Some(("fallback", primary_command)) => handle_fallback(primary_command),
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
