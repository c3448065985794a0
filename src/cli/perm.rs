use clap::Args;

use gatomorph::codec;
use gatomorph::morph::signature_permutation;

use super::resolve_automorphism;

#[derive(Args)]
pub struct PermArgs {
    /// Automorphism name (see `gatomorph list`)
    pub transform: String,
    /// Largest branch count to include; every size class up to this is
    /// mapped
    #[arg(long, default_value_t = 5)]
    pub size: u64,
}

/// Format the signature permutation of `transform` over all codes with
/// at most `size` branches.
pub fn format_permutation(transform: gatomorph::Automorphism, size: u64) -> String {
    let codes: Vec<_> = (0..=size).flat_map(codec::codes_with_branches).collect();
    let entries: Vec<String> = signature_permutation(transform, &codes)
        .into_iter()
        .map(|slot| match slot {
            Some(index) => index.to_string(),
            None => "?".to_string(),
        })
        .collect();
    entries.join(" ")
}

pub fn cmd_perm(args: PermArgs) {
    let PermArgs { transform, size } = args;
    let transform = resolve_automorphism(&transform);
    println!("{}", format_permutation(transform, size));
}
