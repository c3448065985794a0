use std::path::PathBuf;
use std::process;

use clap::Args;

use num_bigint::BigUint;

use super::resolve_sequence;

#[derive(Args)]
pub struct ViewArgs {
    /// Sequence name (see `gatomorph list`); omit when rendering a b-file
    pub sequence: Option<String>,
    /// How many rows to render
    #[arg(short = 'n', long, default_value_t = 24)]
    pub count: usize,
    /// Render the terms of a b-file instead of a catalog sequence
    #[arg(long, value_name = "PATH", conflicts_with = "sequence")]
    pub bfile: Option<PathBuf>,
}

/// Render one term as a row of cells, set bits dark.
fn render_row(term: &BigUint, total_width: u64) -> String {
    let bits = term.bits().max(1);
    let pad = total_width.saturating_sub(bits) / 2;
    let mut row = String::with_capacity(total_width as usize);
    for _ in 0..pad {
        row.push(' ');
    }
    for i in (0..bits).rev() {
        row.push(if term.bit(i) { '#' } else { '.' });
    }
    row
}

pub fn cmd_view(args: ViewArgs) {
    let ViewArgs {
        sequence,
        count,
        bfile,
    } = args;

    let terms: Vec<BigUint> = match (sequence, bfile) {
        (_, Some(path)) => match gatomorph::bfile::read_terms(&path) {
            Ok(terms) => terms.into_iter().take(count).collect(),
            Err(diag) => {
                eprintln!("error: {}", diag.message);
                process::exit(1);
            }
        },
        (Some(name), None) => resolve_sequence(&name).take(count).collect(),
        (None, None) => {
            eprintln!("error: give a sequence name or --bfile");
            process::exit(1);
        }
    };

    // Triangles here widen by at most two cells per row; size the frame
    // from the first row so every row stays centered.
    let first_width = terms.first().map(|t| t.bits().max(1)).unwrap_or(1);
    let total_width = first_width + 2 * terms.len() as u64;

    for term in &terms {
        println!("{}", render_row(term, total_width));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_row_centers() {
        let term = BigUint::from(0b1011u32);
        assert_eq!(render_row(&term, 8), "  #.##");
        assert_eq!(render_row(&BigUint::from(0u32), 4), " .");
    }

    #[test]
    fn test_pyramid_rows() {
        let rows: Vec<String> = gatomorph::sequence::by_name("A080069")
            .unwrap()
            .take(6)
            .map(|t| render_row(&t, 14))
            .collect();
        assert_eq!(
            rows,
            [
                "      #.",
                "     #.#.",
                "    #.##..",
                "   #.##..#.",
                "  #.###..#..",
                " #.##..##.#..",
            ]
        );
    }
}
