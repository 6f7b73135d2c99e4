//! Filter construction and log decoding through the public API.

use alloy_dyn_abi::{DynSolType, DynSolValue};
use alloy_json_abi::Event;
use alloy_primitives::{Address, B256, Bytes, LogData, U256, b256, keccak256};
use logtopic_codec::{
    IndexedFields, IndexedValue, Result, TopicError, TopicRule, event_topics, make_topics,
    unpack_log,
};

#[test]
fn bool_query() {
    crate::init_tracing();

    let topics = make_topics([[true, false]]).unwrap();
    assert_eq!(
        topics.into_inner(),
        vec![vec![
            b256!("0x0000000000000000000000000000000000000000000000000000000000000001"),
            b256!("0x0000000000000000000000000000000000000000000000000000000000000000"),
        ]]
    );
}

#[test]
fn unsupported_runtime_value() {
    let values = vec![
        DynSolValue::Address(Address::repeat_byte(1)),
        DynSolValue::Tuple(vec![
            DynSolValue::Uint(U256::from(1), 256),
            DynSolValue::Address(Address::ZERO),
        ]),
    ];
    let rules: Result<Vec<TopicRule>> = values.into_iter().map(TopicRule::try_from).collect();
    let err = rules.unwrap_err();
    assert!(matches!(err, TopicError::UnsupportedRuleType(ref ty) if ty == "(uint256,address)"));
}

#[test]
fn coerced_values_match_typed_rules() {
    let ty = DynSolType::Address;
    let value = ty.coerce_str("0x00000000219ab540356cBB839Cbe05303d7705Fa").unwrap();
    let from_str = make_topics([[TopicRule::try_from(value).unwrap()]]).unwrap();

    let address: Address = "0x00000000219ab540356cBB839Cbe05303d7705Fa".parse().unwrap();
    let typed = make_topics([[address]]).unwrap();
    assert_eq!(from_str, typed);
}

#[derive(Debug, Default, PartialEq)]
struct Registered {
    owner: Address,
    label_hash: B256,
    expires: U256,
}

impl IndexedFields for Registered {
    fn set_field(&mut self, name: &str, value: IndexedValue) -> Result<()> {
        match name {
            "owner" => self.owner = value.try_into()?,
            "label_hash" => self.label_hash = value.try_into()?,
            "expires" => self.expires = value.try_into()?,
            _ => return Err(TopicError::UnknownField(name.to_string())),
        }
        Ok(())
    }
}

#[test]
fn filter_then_unpack() {
    let event = Event::parse(
        "event Registered(address indexed owner, string indexed labelHash, uint64 indexed expires)",
    )
    .unwrap();
    let owner = Address::repeat_byte(0x77);

    let query: Vec<Vec<TopicRule>> =
        vec![vec![owner.into()], vec!["vitalik".into(), "alice".into()], vec![]];
    let topics = event_topics(&event, query).unwrap();
    assert_eq!(topics.len(), 4);
    assert_eq!(topics.position(0).unwrap(), &[event.selector()]);
    assert_eq!(topics.position(2).unwrap(), &[keccak256("vitalik"), keccak256("alice")]);

    // a matching log, as a node would return it
    let log = LogData::new_unchecked(
        vec![
            event.selector(),
            owner.into_word(),
            keccak256("alice"),
            TopicRule::from(1_700_000_000u64).encode().unwrap(),
        ],
        Bytes::new(),
    );

    let mut out = Registered::default();
    unpack_log(&mut out, &event, &log).unwrap();
    similar_asserts::assert_eq!(
        out,
        Registered {
            owner,
            label_hash: keccak256("alice"),
            expires: U256::from(1_700_000_000u64),
        }
    );

    let filter = topics.to_filter().unwrap();
    let json = serde_json::to_string(&filter).unwrap();
    assert!(json.contains(&event.selector().to_string()));
    assert!(json.contains(&owner.into_word().to_string()));
}
