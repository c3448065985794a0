use std::path::PathBuf;
use std::process;

use clap::Args;

use super::resolve_sequence;

#[derive(Args)]
pub struct TermsArgs {
    /// Sequence name (see `gatomorph list`)
    pub sequence: String,
    /// How many terms to emit
    #[arg(short = 'n', long, default_value_t = 32)]
    pub count: usize,
    /// Write the terms to a b-file instead of stdout
    #[arg(long, value_name = "PATH")]
    pub bfile: Option<PathBuf>,
}

pub fn cmd_terms(args: TermsArgs) {
    let TermsArgs {
        sequence,
        count,
        bfile,
    } = args;
    let terms = resolve_sequence(&sequence);

    match bfile {
        Some(path) => {
            if let Err(diag) = gatomorph::bfile::write_terms(&path, terms, count) {
                eprintln!("error: {}", diag.message);
                process::exit(1);
            }
        }
        None => {
            for (index, term) in terms.take(count).enumerate() {
                println!("{} {}", index + 1, term);
            }
        }
    }
}
