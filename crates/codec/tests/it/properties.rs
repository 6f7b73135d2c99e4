//! Encode/decode properties of single topics.

use alloy_dyn_abi::DynSolValue;
use alloy_json_abi::EventParam;
use alloy_primitives::{Address, B256, I256, U256, keccak256};
use logtopic_codec::{IndexedValue, TopicRule, decode_topic};
use proptest::prelude::*;

fn decode_as(ty: &str, topic: B256) -> IndexedValue {
    let param = EventParam { ty: ty.into(), name: "x".into(), indexed: true, ..Default::default() };
    decode_topic(&param, topic).unwrap()
}

fn encode(rule: impl Into<TopicRule>) -> B256 {
    rule.into().encode().unwrap()
}

fn uint(value: u64, bits: usize) -> IndexedValue {
    IndexedValue::Value(DynSolValue::Uint(U256::from(value), bits))
}

fn int(magnitude: u64, bits: usize) -> IndexedValue {
    IndexedValue::Value(DynSolValue::Int(I256::from_raw(U256::from(magnitude)), bits))
}

#[test]
fn integer_width_bounds_round_trip() {
    crate::init_tracing();

    for value in [0u8, 1, u8::MAX] {
        assert_eq!(decode_as("uint8", encode(value)), uint(value as u64, 8));
    }
    for value in [0u16, 1, u16::MAX] {
        assert_eq!(decode_as("uint16", encode(value)), uint(value as u64, 16));
    }
    for value in [0u32, 1, u32::MAX] {
        assert_eq!(decode_as("uint32", encode(value)), uint(value as u64, 32));
    }
    for value in [0u64, 1, u64::MAX] {
        assert_eq!(decode_as("uint64", encode(value)), uint(value, 64));
    }

    for value in [0i8, 1, i8::MAX] {
        assert_eq!(decode_as("int8", encode(value)), int(value as u64, 8));
    }
    for value in [0i16, 1, i16::MAX] {
        assert_eq!(decode_as("int16", encode(value)), int(value as u64, 16));
    }
    for value in [0i32, 1, i32::MAX] {
        assert_eq!(decode_as("int32", encode(value)), int(value as u64, 32));
    }
    for value in [0i64, 1, i64::MAX] {
        assert_eq!(decode_as("int64", encode(value)), int(value as u64, 64));
    }

    assert_eq!(
        decode_as("uint256", encode(U256::MAX)),
        IndexedValue::Value(DynSolValue::Uint(U256::MAX, 256))
    );
}

#[test]
fn negative_integers_decode_to_their_magnitude() {
    // the sign is dropped on encoding, so it cannot come back
    assert_eq!(decode_as("int8", encode(-1i8)), int(1, 8));
    assert_eq!(decode_as("int64", encode(-42i64)), int(42, 64));
    assert_eq!(decode_as("int256", encode(I256::MINUS_ONE)), int(1, 256));
}

proptest! {
    #[test]
    fn bool_round_trip(value in any::<bool>()) {
        prop_assert_eq!(
            decode_as("bool", encode(value)),
            IndexedValue::Value(DynSolValue::Bool(value))
        );
    }

    #[test]
    fn uint64_round_trip(value in any::<u64>()) {
        prop_assert_eq!(decode_as("uint64", encode(value)), uint(value, 64));
    }

    #[test]
    fn uint8_round_trip(value in any::<u8>()) {
        prop_assert_eq!(decode_as("uint8", encode(value)), uint(value as u64, 8));
    }

    #[test]
    fn int32_round_trip(value in 0..=i32::MAX) {
        prop_assert_eq!(decode_as("int32", encode(value)), int(value as u64, 32));
    }

    #[test]
    fn int32_sign_is_lost(value in (i32::MIN + 1)..0) {
        prop_assert_eq!(encode(value), encode(-value));
        prop_assert_eq!(decode_as("int32", encode(value)), int(value.unsigned_abs() as u64, 32));
    }

    #[test]
    fn uint256_round_trip(bytes in any::<[u8; 32]>()) {
        let value = U256::from_be_bytes(bytes);
        prop_assert_eq!(encode(value), B256::new(bytes));
        prop_assert_eq!(
            decode_as("uint256", encode(value)),
            IndexedValue::Value(DynSolValue::Uint(value, 256))
        );
    }

    #[test]
    fn address_layout(bytes in any::<[u8; 20]>()) {
        let address = Address::new(bytes);
        let topic = encode(address);
        prop_assert_eq!(&topic[..12], &[0u8; 12]);
        prop_assert_eq!(&topic[12..], &bytes);
        prop_assert_eq!(
            decode_as("address", topic),
            IndexedValue::Value(DynSolValue::Address(address))
        );
    }

    #[test]
    fn strings_are_hashed(value in ".*") {
        let topic = encode(value.as_str());
        prop_assert_eq!(topic, keccak256(value.as_bytes()));
        prop_assert_eq!(decode_as("string", topic), IndexedValue::Hash(topic));
    }

    #[test]
    fn bytes_are_hashed(value in proptest::collection::vec(any::<u8>(), 0..128)) {
        let topic = encode(value.clone());
        prop_assert_eq!(topic, keccak256(&value));
        prop_assert_eq!(decode_as("bytes", topic), IndexedValue::Hash(topic));
    }

    #[test]
    fn fixed_bytes_round_trip(bytes in any::<[u8; 4]>()) {
        let topic = encode(bytes);
        prop_assert_eq!(&topic[..4], &bytes);
        prop_assert_eq!(&topic[4..], &[0u8; 28]);
        prop_assert_eq!(
            decode_as("bytes4", topic),
            IndexedValue::Value(DynSolValue::FixedBytes(topic, 4))
        );
    }
}
