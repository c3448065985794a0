use std::process;

use clap::Args;

use gatomorph::codec;
use gatomorph::morph::Automorphism;

use super::resolve_automorphism;

#[derive(Args)]
pub struct CheckArgs {
    /// Automorphism name (see `gatomorph list`)
    pub transform: String,
    /// Largest branch count to verify; every size class up to this is
    /// checked
    #[arg(long, default_value_t = 7)]
    pub size: u64,
}

/// Verify the automorphism laws on one size class: the class maps onto
/// itself, and every image keeps its branch count and bit width.
fn check_class(transform: Automorphism, branches: u64) -> Result<usize, String> {
    let class = codec::codes_with_branches(branches);
    let mut images = Vec::with_capacity(class.len());
    for code in &class {
        let image = transform.apply(code);
        if image.count_ones() != code.count_ones() || image.bits() != code.bits() {
            return Err(format!(
                "{transform} moved {code} out of its size class (image {image})"
            ));
        }
        images.push(image);
    }
    images.sort();
    if images != class {
        return Err(format!(
            "{transform} is not a permutation of the class with {branches} branches"
        ));
    }
    Ok(class.len())
}

pub fn cmd_check(args: CheckArgs) {
    let CheckArgs { transform, size } = args;
    let transform = resolve_automorphism(&transform);

    let mut total = 0usize;
    for branches in 0..=size {
        match check_class(transform, branches) {
            Ok(count) => total += count,
            Err(message) => {
                eprintln!("error: {}", message);
                process::exit(1);
            }
        }
    }
    println!(
        "ok: {} permutes each size class up to {} branches ({} codes)",
        transform, size, total
    );
}
