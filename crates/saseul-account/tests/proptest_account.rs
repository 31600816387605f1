use proptest::prelude::*;

use saseul_account::address::{checksum, ADDRESS_LEN, CHECKSUM_LEN};
use saseul_account::{Account, Address};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn address_derivation_is_deterministic(seed in prop::array::uniform32(any::<u8>())) {
        let hex_seed = hex::encode(seed);
        let a = Account::create(Some(hex_seed.as_str())).unwrap();
        let b = Account::create(Some(hex_seed.as_str())).unwrap();
        prop_assert_eq!(a.address(), b.address());
        prop_assert_eq!(a.address().as_str().len(), ADDRESS_LEN);
    }

    #[test]
    fn derived_addresses_parse_back(seed in prop::array::uniform32(any::<u8>())) {
        let account = Account::create(Some(hex::encode(seed).as_str())).unwrap();
        let parsed = Address::from_string(account.address().as_str()).unwrap();
        prop_assert_eq!(&parsed, account.address());

        let expected = checksum(&account.address().as_str()[..ADDRESS_LEN - CHECKSUM_LEN]);
        prop_assert_eq!(parsed.checksum(), expected.as_str());
    }

    #[test]
    fn public_key_hex_path_matches_account(seed in prop::array::uniform32(any::<u8>())) {
        let account = Account::create(Some(hex::encode(seed).as_str())).unwrap();
        let from_hex = Address::from_public_key_string(&account.public_key().to_hex()).unwrap();
        prop_assert_eq!(&from_hex, account.address());
    }
}
