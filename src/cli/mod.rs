pub mod check;
pub mod perm;
pub mod terms;
pub mod view;

use std::process;

use gatomorph::morph::Automorphism;
use gatomorph::sequence::{self, TermStream};

/// Look up a catalog sequence, or exit with the available names.
pub fn resolve_sequence(name: &str) -> TermStream {
    match sequence::by_name(name) {
        Some(stream) => stream,
        None => {
            eprintln!("error: unknown sequence '{}'", name);
            eprintln!("\nAvailable sequences:");
            for def in sequence::catalog() {
                eprintln!("  {:<18} {}", def.name, def.summary);
            }
            process::exit(1);
        }
    }
}

/// Parse an automorphism name, or exit with the available names.
pub fn resolve_automorphism(name: &str) -> Automorphism {
    match name.parse::<Automorphism>() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("\nAvailable automorphisms:");
            for t in Automorphism::ALL {
                eprintln!("  {}", t);
            }
            process::exit(1);
        }
    }
}

pub fn cmd_list() {
    println!("Sequences:");
    for def in sequence::catalog() {
        println!("  {:<18} {}", def.name, def.summary);
    }
    println!();
    println!("Automorphisms:");
    for t in Automorphism::ALL {
        println!("  {}", t);
    }
}
