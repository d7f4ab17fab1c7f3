use proptest::prelude::*;

use adakit_crypto::{decode_address, derive_stake_address, RawAddress, CREDENTIAL_LEN};
use adakit_types::{AddressError, CredentialPart, Era};

fn base_address(mainnet: bool, script_payment: bool, payment: &[u8], stake: &[u8]) -> String {
    let address_type: u8 = if script_payment { 0x1 } else { 0x0 };
    let mut bytes = vec![(address_type << 4) | u8::from(mainnet)];
    bytes.extend_from_slice(payment);
    bytes.extend_from_slice(stake);
    let hrp = if mainnet { "addr" } else { "addr_test" };
    RawAddress::new(hrp, bytes).unwrap().to_bech32().unwrap()
}

proptest! {
    /// Decoding the derived stake address returns it unchanged, as a pure stake address.
    #[test]
    fn canonical_address_is_stable(
        mainnet in any::<bool>(),
        script_payment in any::<bool>(),
        payment in prop::collection::vec(any::<u8>(), CREDENTIAL_LEN),
        stake in prop::collection::vec(any::<u8>(), CREDENTIAL_LEN),
    ) {
        let address = base_address(mainnet, script_payment, &payment, &stake);
        let decoded = decode_address(&address).unwrap();
        prop_assert_eq!(decoded.delegation_part, CredentialPart::Stake);

        let redecoded = decode_address(&decoded.canonical_address).unwrap();
        prop_assert_eq!(&redecoded.canonical_address, &decoded.canonical_address);
        prop_assert_eq!(redecoded.payment_part, CredentialPart::None);
        prop_assert_eq!(redecoded.delegation_part, CredentialPart::Stake);
        prop_assert_eq!(redecoded.network, decoded.network);
    }

    /// derive_stake_address is idempotent.
    #[test]
    fn derive_stake_address_idempotent(
        mainnet in any::<bool>(),
        payment in prop::collection::vec(any::<u8>(), CREDENTIAL_LEN),
        stake in prop::collection::vec(any::<u8>(), CREDENTIAL_LEN),
    ) {
        let address = base_address(mainnet, false, &payment, &stake);
        let once = derive_stake_address(&address).unwrap();
        let twice = derive_stake_address(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// Every header byte either decodes to a known shape or fails with a typed error.
    #[test]
    fn header_byte_classification(header in any::<u8>(), len in 0usize..70) {
        let mut bytes = vec![header];
        bytes.extend(std::iter::repeat(0x11).take(len));
        let address = RawAddress::new("addr", bytes.clone())
            .and_then(|raw| raw.to_bech32());
        let address_type = header >> 4;
        match address {
            Ok(address) => {
                let decoded = decode_address(&address).unwrap();
                if address_type == 0x8 {
                    prop_assert_eq!(decoded.era, Era::Byron);
                    prop_assert!(decoded.payment_part.is_none() && decoded.delegation_part.is_none());
                } else {
                    prop_assert_eq!(decoded.era, Era::Shelley);
                }
            }
            Err(AddressError::UnknownAddressType { .. }) => {
                prop_assert!((0x9..=0xd).contains(&address_type));
            }
            Err(AddressError::InvalidAddress { .. }) => {
                prop_assert!(address_type != 0x8);
            }
            Err(other) => prop_assert!(false, "unexpected error {other}"),
        }
    }
}
