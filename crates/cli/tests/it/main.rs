//! Runs `logtopic` subcommands end to end through the argument parser.

use alloy_primitives::{Address, B256, U256, keccak256};
use clap::Parser;
use logtopic_cli::args::Logtopic;
use logtopic_config::{Config, FieldStyle};

const REGISTERED: &str =
    "event Registered(address indexed owner, string indexed label, uint64 indexed expires)";

fn run(args: &[&str], config: &Config) -> eyre::Result<String> {
    let args = Logtopic::try_parse_from(std::iter::once("logtopic").chain(args.iter().copied()))?;
    let config = args.global.apply(config.clone());
    args.cmd.output(&config)
}

fn selector() -> B256 {
    keccak256("Registered(address,string,uint64)")
}

#[test]
fn encode_text() {
    let owner = Address::repeat_byte(0x77);
    let owner_arg = owner.to_string();
    let args = ["encode", "-e", REGISTERED, owner_arg.as_str(), "_", "1|2"];
    let out = run(&args, &Config::default()).unwrap();
    let lines: Vec<_> = out.lines().collect();
    similar_asserts::assert_eq!(
        lines,
        vec![
            format!("0: {}", selector()),
            format!("1: {}", owner.into_word()),
            "2: _".to_string(),
            format!("3: {}|{}", B256::with_last_byte(1), B256::with_last_byte(2)),
        ]
    );
}

#[test]
fn encode_json() {
    let out = run(&["encode", "--json", "bool=true", "_"], &Config::default()).unwrap();
    let topics: Vec<Vec<B256>> = serde_json::from_str(&out).unwrap();
    assert_eq!(topics, vec![vec![B256::with_last_byte(1)], vec![]]);
}

#[test]
fn decode_registered_log() {
    let owner = Address::repeat_byte(0x77);
    let label = keccak256("alice");
    let expires = B256::from(U256::from(1_700_000_000u64));
    let topics = [selector(), owner.into_word(), label, expires].map(|t| t.to_string());

    let mut args = vec!["decode", "--event", REGISTERED];
    args.extend(topics.iter().map(String::as_str));
    let out = run(&args, &Config::default()).unwrap();
    similar_asserts::assert_eq!(
        out,
        format!("owner: {owner}\nlabel: {label} (hash)\nexpires: 1700000000")
    );

    let config = Config { json: true, ..Default::default() };
    let json: serde_json::Value = serde_json::from_str(&run(&args, &config).unwrap()).unwrap();
    assert_eq!(json[1]["name"], "label");
    assert_eq!(json[1]["hashed"], true);
    assert_eq!(json[2]["type"], "uint64");
}

#[test]
fn decode_uses_configured_field_style() {
    let event = "event Approval(address indexed tokenOwner)";
    let topics = [keccak256("Approval(address)"), Address::ZERO.into_word()];
    let topics = topics.map(|t| t.to_string());
    let args = ["decode", "--event", event, topics[0].as_str(), topics[1].as_str()];

    let config = Config { field_style: FieldStyle::Snake, ..Default::default() };
    assert!(run(&args, &config).unwrap().starts_with("token_owner: "));

    let mut abi_args = args.to_vec();
    abi_args.extend(["--field-style", "abi"]);
    assert!(run(&abi_args, &config).unwrap().starts_with("tokenOwner: "));
}

#[test]
fn filter_json() {
    let address = Address::repeat_byte(0x99);
    let address_arg = address.to_string();
    let args =
        ["filter", "--json", "-e", REGISTERED, "-a", address_arg.as_str(), "_", "string=alice"];
    let out = run(&args, &Config::default()).unwrap();
    let filter: serde_json::Value = serde_json::from_str(&out).unwrap();
    let text = filter.to_string().to_lowercase();
    assert!(text.contains(&selector().to_string()), "{text}");
    assert!(text.contains(&keccak256("alice").to_string()), "{text}");
    assert!(text.contains(&address.to_string().to_lowercase()), "{text}");
}

#[test]
fn reports_codec_errors() {
    let err = run(&["filter", "bool=true", "_", "_", "_", "_"], &Config::default()).unwrap_err();
    assert!(err.to_string().contains("too many topic positions"), "{err}");

    let err = run(&["decode", "--event", REGISTERED], &Config::default()).unwrap_err();
    assert!(err.to_string().contains("no event signature"), "{err}");
}
