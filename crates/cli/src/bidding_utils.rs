use crate::CliError;
use engine::{BidTrace, Explanation};
use std::fmt::Write;
use types::{Auction, Call, Hand, Position, Rank, Suit, Vulnerability};

/// One line per suit, spades first, e.g. "S: AKJ2".
pub fn get_hand_suits(hand: &Hand) -> Vec<String> {
    [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs]
        .into_iter()
        .map(|suit| {
            let cards: String = Rank::DESCENDING
                .iter()
                .filter(|&&rank| hand.has_card(suit, rank))
                .map(|rank| rank.to_char())
                .collect();
            format!(
                "{}: {}",
                suit.to_char(),
                if cards.is_empty() { "-" } else { &cards }
            )
        })
        .collect()
}

pub fn pos_char(pos: Position) -> char {
    pos.to_char()
}

/// Calls separated by spaces or commas, e.g. "1H 1S" or "1C,P,1D".
pub fn parse_calls(s: &str) -> Result<Vec<Call>, CliError> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<Call>().map_err(CliError::from))
        .collect()
}

pub fn parse_dealer(s: &str) -> Result<Position, CliError> {
    let mut chars = s.trim().chars();
    match (chars.next().and_then(Position::from_char), chars.next()) {
        (Some(pos), None) => Ok(pos),
        _ => match s.trim().to_ascii_lowercase().as_str() {
            "north" => Ok(Position::North),
            "east" => Ok(Position::East),
            "south" => Ok(Position::South),
            "west" => Ok(Position::West),
            _ => Err(CliError::Dealer(s.to_string())),
        },
    }
}

pub fn parse_vulnerability(s: &str) -> Result<Vulnerability, CliError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "none" | "-" => Ok(Vulnerability::None),
        "ns" | "n-s" => Ok(Vulnerability::NS),
        "ew" | "e-w" => Ok(Vulnerability::EW),
        "both" | "all" => Ok(Vulnerability::Both),
        _ => Err(CliError::Vulnerability(s.to_string())),
    }
}

/// Replay `history` from `dealer`, failing on the first illegal call.
pub fn build_auction(
    dealer: Position,
    vulnerability: Vulnerability,
    history: &[Call],
) -> Result<Auction, CliError> {
    let mut auction = Auction::new(dealer).with_vulnerability(vulnerability);
    for call in history {
        auction.add_call(*call)?;
    }
    auction.reseat(auction.current_player());
    Ok(auction)
}

pub fn format_row(idx: usize, pos: char, call: &str, rule: &str, desc: &str) -> String {
    format!(
        "{:<3} | {:<3} | {:<5} | {:<30} | {}",
        idx, pos, call, rule, desc
    )
}

pub fn format_table_header() -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<3} | {:<3} | {:<5} | {:<30} | Description",
        "Idx", "Pos", "Call", "Rule Name"
    );
    let _ = writeln!(
        out,
        "{:-<3}-+-{:-<3}-+-{:-<5}-+-{:-<30}-+---------------------------",
        "", "", "", ""
    );
    out
}

/// The calls already made, one row each.
pub fn format_history(auction: &Auction) -> String {
    let mut out = String::new();
    for (idx, (seat, call)) in auction.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}",
            format_row(idx + 1, pos_char(seat), &call.render(), "", "(History)")
        );
    }
    out
}

pub fn format_full_trace(trace: &BidTrace) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nFull Trace:");
    let _ = writeln!(out, "=======================");
    let _ = writeln!(out, "Forcing: {:?}", trace.forcing);
    let _ = writeln!(
        out,
        "Partner (what we think partner has): {}",
        trace.auction_model.partner_hand()
    );
    let _ = writeln!(
        out,
        "Bidder (what partner thinks we have): {}",
        trace.auction_model.bidder_hand()
    );

    let _ = writeln!(out, "\nSelection Process:");
    let mut current_layer = None;
    for step in &trace.selection_steps {
        if current_layer != Some(step.layer) {
            let _ = writeln!(out, "\n--- Layer: {:?} ---", step.layer);
            current_layer = Some(step.layer);
        }
        let status = if step.satisfied { "MATCHED" } else { "FAILED " };
        let _ = writeln!(out, "[{}] {} ({})", status, step.call.render(), step.rule_name);
        for constraint in &step.semantics.shows {
            let mark = if step.failed_constraints.contains(constraint) {
                "✗"
            } else {
                "✓"
            };
            let _ = writeln!(out, "  {} {}", mark, constraint);
        }
    }
    if trace.forced_override {
        let _ = writeln!(out, "\nPass replaced: partner's last call was forcing.");
    }
    let _ = writeln!(out, "=======================\n");
    out
}

pub fn format_explanations(explanations: &[Explanation]) -> String {
    let mut out = String::new();
    for explanation in explanations {
        let rule = explanation.rule_name.as_deref().unwrap_or("-");
        let _ = writeln!(
            out,
            "{:<5} | {:<30} | {}",
            explanation.call.render(),
            rule,
            explanation.text
        );
    }
    out
}
