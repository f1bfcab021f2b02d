//! Enums backing the command line flags.
//!
//! Each value may be given as its full name or as any prefix which fully determines it, plus a
//! few short aliases.

use clap::ValueEnum;
use clap::builder::PossibleValue;

/// Which construction to run.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ShuffleOptions {
    Feistel,
    SwapOrNot,
}

/// Which hash oracle keys the shuffle.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HashOptions {
    Keccak,
    Sha256,
}

/// Produce a `PossibleValue` accepting `base`, every prefix of `base` at least
/// `min_unique_base_prefix` long, and every prefix of each alias at least as long as the
/// length paired with it.
///
/// For example `get_aliases("swap-or-not", 2, Some(vec![("son", 3)]))` accepts
/// `sw, swa, ..., swap-or-not, son`.
fn get_aliases(
    base: &'static str,
    min_unique_base_prefix: usize,
    alias: Option<Vec<(&'static str, usize)>>,
) -> PossibleValue {
    let base_prefixes = (min_unique_base_prefix..base.len()).map(|i| &base[..i]);
    let alias_prefixes = alias
        .into_iter()
        .flatten()
        .flat_map(|(alias, min_unique)| (min_unique..alias.len() + 1).map(|i| &alias[..i]));
    let prefixes = base_prefixes.chain(alias_prefixes);
    PossibleValue::new(base).aliases(prefixes)
}

impl ValueEnum for ShuffleOptions {
    fn value_variants<'a>() -> &'a [Self] {
        &[ShuffleOptions::Feistel, ShuffleOptions::SwapOrNot]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            ShuffleOptions::Feistel => get_aliases("feistel", 1, None),
            ShuffleOptions::SwapOrNot => get_aliases("swap-or-not", 2, Some(vec![("son", 3)])),
        })
    }
}

impl ValueEnum for HashOptions {
    fn value_variants<'a>() -> &'a [Self] {
        &[HashOptions::Keccak, HashOptions::Sha256]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            HashOptions::Keccak => get_aliases("keccak", 1, Some(vec![("keccak-256", 7)])),
            HashOptions::Sha256 => get_aliases("sha256", 1, None),
        })
    }
}
