use engine::{decide, ConventionConfig, ConventionId, Decision};
use indexmap::IndexMap;
use std::fs;
use types::{Auction, Call, Hand, Position, Vulnerability};

fn parse_auction(history: &str, dealer: Position, vulnerability: Vulnerability) -> Auction {
    let mut auction = Auction::new(dealer).with_vulnerability(vulnerability);
    for token in history.split_whitespace() {
        let call: Call = token.parse().expect("bad call in test vector");
        auction.add_call(call).expect("illegal call in test vector");
    }
    auction
}

fn parse_dealer(s: &str) -> Position {
    s.chars()
        .next()
        .and_then(Position::from_char)
        .expect("bad dealer in test vector")
}

fn parse_vulnerability(s: &str) -> Vulnerability {
    match s {
        "NS" | "N-S" => Vulnerability::NS,
        "EW" | "E-W" => Vulnerability::EW,
        "Both" => Vulnerability::Both,
        _ => Vulnerability::None,
    }
}

fn field(case: &[serde_yaml::Value], idx: usize) -> String {
    match case.get(idx) {
        Some(serde_yaml::Value::String(s)) => s.clone(),
        Some(serde_yaml::Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// The default config with the conventions named in an optional sixth
/// column switched on, e.g. "cappelletti".
fn config_for(case: &[serde_yaml::Value]) -> ConventionConfig {
    let mut config = ConventionConfig::default();
    for name in field(case, 5).split_whitespace() {
        let id: ConventionId = name.parse().expect("bad convention in test vector");
        config.enable(id);
    }
    config
}

#[test]
fn run_scenario_vectors() {
    let content = fs::read_to_string("tests/bidding/scenarios.yaml")
        .expect("Failed to read test vectors");
    let suites: IndexMap<String, Vec<Vec<serde_yaml::Value>>> =
        serde_yaml::from_str(&content).expect("Failed to parse YAML");

    let mut failures = Vec::new();
    let mut total = 0;
    for (suite_name, cases) in &suites {
        for case in cases {
            total += 1;
            let hand_str = field(case, 0);
            let expected = field(case, 1);
            let history = field(case, 2);
            let dealer = parse_dealer(&field(case, 3));
            let vulnerability = parse_vulnerability(&field(case, 4));
            let config = config_for(case);

            let hand = Hand::parse(&hand_str).expect("bad hand in test vector");
            let auction = parse_auction(&history, dealer, vulnerability);
            let seat = auction.current_player();
            let actual = match decide(&auction, &hand, seat, &config) {
                Decision::Bid(bid) => bid.call.to_string(),
                Decision::Defer => "defer".to_string(),
            };
            let expected: Call = expected.parse().expect("bad expected call");
            if actual != expected.to_string() {
                failures.push(format!(
                    "{suite_name}: {hand_str} after [{history}] expected {expected}, got {actual}"
                ));
            }
        }
    }

    assert!(total > 0, "no test vectors found");
    if !failures.is_empty() {
        for failure in &failures {
            println!("{failure}");
        }
        panic!("{} of {} scenarios failed", failures.len(), total);
    }
}

#[test]
fn every_vector_call_is_legal_at_its_turn() {
    let content = fs::read_to_string("tests/bidding/scenarios.yaml").unwrap();
    let suites: IndexMap<String, Vec<Vec<serde_yaml::Value>>> =
        serde_yaml::from_str(&content).unwrap();
    for cases in suites.values() {
        for case in cases {
            let auction = parse_auction(&field(case, 2), parse_dealer(&field(case, 3)), Vulnerability::None);
            let expected: Call = field(case, 1).parse().unwrap();
            assert!(auction.is_legal(&expected), "{case:?}");
        }
    }
}
