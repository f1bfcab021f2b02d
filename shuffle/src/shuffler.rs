use crate::{FeistelShuffle, IndexShuffle, Seed, ShuffleResult, SwapOrNotShuffle};

/// Picks one of the two constructions at runtime, over a single hasher type.
#[derive(Copy, Clone, Debug)]
pub enum Shuffler<H> {
    Feistel(FeistelShuffle<H>),
    SwapOrNot(SwapOrNotShuffle<H>),
}

impl<H> Shuffler<H> {
    pub const fn feistel(hasher: H) -> Self {
        Self::Feistel(FeistelShuffle::new(hasher))
    }

    pub const fn swap_or_not(hasher: H) -> Self {
        Self::SwapOrNot(SwapOrNotShuffle::new(hasher))
    }
}

impl<H> IndexShuffle for Shuffler<H>
where
    FeistelShuffle<H>: IndexShuffle,
    SwapOrNotShuffle<H>: IndexShuffle,
{
    fn name(&self) -> &'static str {
        match self {
            Self::Feistel(s) => s.name(),
            Self::SwapOrNot(s) => s.name(),
        }
    }

    fn permute(&self, index: u64, modulus: u64, seed: &Seed, rounds: u32) -> ShuffleResult<u64> {
        match self {
            Self::Feistel(s) => s.permute(index, modulus, seed, rounds),
            Self::SwapOrNot(s) => s.permute(index, modulus, seed, rounds),
        }
    }

    fn recommended_rounds(&self, modulus: u64) -> u32 {
        match self {
            Self::Feistel(s) => s.recommended_rounds(modulus),
            Self::SwapOrNot(s) => s.recommended_rounds(modulus),
        }
    }
}
