//! Claim kind registry — which disbursement a request asks for.

use serde::{Deserialize, Serialize};

/// Which of the three testnet disbursements is being requested.
///
/// The enumeration is closed: every variant maps to exactly one claim
/// service endpoint and one display mode, with no failure cases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimKind {
    /// The base test token.
    #[default]
    BaseToken,
    /// A seed for creating a token on the testnet.
    TokenSeed,
    /// A seed for creating an NFT collection on the testnet.
    NftSeed,
}

impl ClaimKind {
    /// Path segment of the claim service endpoint for this kind.
    pub fn endpoint_path(&self) -> &'static str {
        match self {
            Self::BaseToken => "claim",
            Self::TokenSeed => "claim-seed",
            Self::NftSeed => "claim-nft-seed",
        }
    }

    /// Whether this kind disburses a seed rather than the base token.
    pub fn is_seed(&self) -> bool {
        !matches!(self, Self::BaseToken)
    }

    /// How the faucet presents itself for this kind.
    pub fn display_mode(&self) -> DisplayMode {
        if self.is_seed() {
            DisplayMode::Seed
        } else {
            DisplayMode::Token
        }
    }

    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BaseToken => "token",
            Self::TokenSeed => "token-seed",
            Self::NftSeed => "nft-seed",
        }
    }
}

/// Presentation mode selected by the claim kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    /// Base-token wording ("token faucet").
    Token,
    /// Seed wording ("seed faucet").
    Seed,
}

impl DisplayMode {
    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Token => "token",
            Self::Seed => "seed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_table_is_exact() {
        assert_eq!(ClaimKind::BaseToken.endpoint_path(), "claim");
        assert_eq!(ClaimKind::TokenSeed.endpoint_path(), "claim-seed");
        assert_eq!(ClaimKind::NftSeed.endpoint_path(), "claim-nft-seed");
    }

    #[test]
    fn seed_flag_matches_table() {
        assert!(!ClaimKind::BaseToken.is_seed());
        assert!(ClaimKind::TokenSeed.is_seed());
        assert!(ClaimKind::NftSeed.is_seed());
    }

    #[test]
    fn display_mode_follows_seed_flag() {
        assert_eq!(ClaimKind::BaseToken.display_mode(), DisplayMode::Token);
        assert_eq!(ClaimKind::TokenSeed.display_mode(), DisplayMode::Seed);
        assert_eq!(ClaimKind::NftSeed.display_mode(), DisplayMode::Seed);
    }

    #[test]
    fn default_kind_is_base_token() {
        assert_eq!(ClaimKind::default(), ClaimKind::BaseToken);
    }
}
