use clap::{Parser, Subcommand};

mod cli;

#[derive(Parser)]
#[command(
    name = "gatomorph",
    version,
    about = "Catalan automorphisms and 1-D cellular automata on bit-string codes"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print terms of a named sequence in b-file form
    Terms(cli::terms::TermsArgs),
    /// Render a sequence as a centered binary triangle
    View(cli::view::ViewArgs),
    /// Print the signature permutation of an automorphism
    Perm(cli::perm::PermArgs),
    /// Check the bijection and preservation laws of an automorphism
    Check(cli::check::CheckArgs),
    /// List the available sequences and automorphisms
    List,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Terms(args) => cli::terms::cmd_terms(args),
        Command::View(args) => cli::view::cmd_view(args),
        Command::Perm(args) => cli::perm::cmd_perm(args),
        Command::Check(args) => cli::check::cmd_check(args),
        Command::List => cli::cmd_list(),
    }
}
