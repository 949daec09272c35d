use proptest::prelude::*;

use drip_types::{address, ClaimKind, ClaimResult, WalletAddress};

proptest! {
    /// Every address minted from an account id passes validation.
    #[test]
    fn minted_addresses_validate(payload in prop::array::uniform32(0u8..)) {
        let addr = WalletAddress::from_account_id(payload);
        prop_assert!(address::is_valid(addr.as_str()));
    }

    /// Minting is deterministic: same payload, same address.
    #[test]
    fn minting_is_deterministic(payload in prop::array::uniform32(0u8..)) {
        prop_assert_eq!(
            WalletAddress::from_account_id(payload),
            WalletAddress::from_account_id(payload)
        );
    }

    /// Appending a non-Base58 character always invalidates an address.
    #[test]
    fn poisoned_alphabet_rejected(payload in prop::array::uniform32(0u8..)) {
        let addr = WalletAddress::from_account_id(payload);
        let poisoned = format!("{}0", addr.as_str());
        prop_assert!(!address::is_valid(&poisoned));
    }

    /// Truncating an address always invalidates it.
    #[test]
    fn truncated_addresses_rejected(
        payload in prop::array::uniform32(0u8..),
        cut in 1usize..20,
    ) {
        let addr = WalletAddress::from_account_id(payload);
        let truncated = &addr.as_str()[..addr.as_str().len() - cut];
        prop_assert!(!address::is_valid(truncated));
    }

    /// Base58 strings of up to 30 characters decode to fewer than 36 bytes
    /// and are always rejected.
    #[test]
    fn short_strings_rejected(s in "[1-9A-HJ-NP-Za-km-z]{1,30}") {
        prop_assert!(!address::is_valid(&s));
    }

    /// ClaimResult round-trips through its JSON wire shape.
    #[test]
    fn claim_result_json_roundtrip(
        is_success in any::<bool>(),
        code in any::<i64>(),
        message in ".*",
    ) {
        let result = ClaimResult { is_success, code, message };
        let encoded = serde_json::to_string(&result).unwrap();
        prop_assert!(encoded.contains("isSuccess"));
        let decoded: ClaimResult = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(decoded, result);
    }
}

#[test]
fn endpoint_paths_are_distinct() {
    let kinds = [ClaimKind::BaseToken, ClaimKind::TokenSeed, ClaimKind::NftSeed];
    for a in kinds {
        for b in kinds {
            assert_eq!(a == b, a.endpoint_path() == b.endpoint_path());
        }
    }
}

#[test]
fn only_base_token_routes_to_plain_claim() {
    let kinds = [ClaimKind::BaseToken, ClaimKind::TokenSeed, ClaimKind::NftSeed];
    for kind in kinds {
        assert_eq!(kind.endpoint_path() == "claim", !kind.is_seed());
    }
}
