use clap::Parser;
use cli::bidding_utils::*;
use cli::CliError;
use engine::{decide_with_trace, explain_all, BidTag, ConventionConfig, Decision, Preferences};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use types::Hand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Ask the bidding engine for one call", long_about = None)]
struct Args {
    /// The hand as Clubs.Diamonds.Hearts.Spades, e.g. "K32.Q32.KJ32.Q32"
    #[arg(long)]
    hand: String,

    /// Calls made so far, e.g. "1H 1S"
    #[arg(short, long, default_value = "")]
    auction: String,

    /// Dealer: N, E, S or W
    #[arg(short, long, default_value = "N")]
    dealer: String,

    /// Vulnerability: none, ns, ew or both
    #[arg(long, default_value = "none")]
    vul: String,

    /// Convention configuration (YAML); the built-in defaults otherwise
    #[arg(short, long, env = "BIDDER_CONFIG")]
    config: Option<PathBuf>,

    /// Saved preferences (JSON) applied on top of the configuration
    #[arg(long)]
    preferences: Option<PathBuf>,

    /// Print every rule and call the engine considered
    #[arg(long)]
    trace: bool,

    /// List what every legal call would mean here
    #[arg(long)]
    explain: bool,

    /// Print the decision as JSON
    #[arg(long)]
    json: bool,
}

fn load_config(args: &Args) -> Result<ConventionConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => ConventionConfig::load(path)?,
        None => ConventionConfig::default(),
    };
    if let Some(path) = &args.preferences {
        let json = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.display().to_string(),
            source,
        })?;
        config.apply(&Preferences::from_json(&json)?);
    }
    Ok(config)
}

fn run(args: &Args) -> Result<(), CliError> {
    let config = load_config(args)?;
    let hand = Hand::parse(&args.hand)?;
    let dealer = parse_dealer(&args.dealer)?;
    let vulnerability = parse_vulnerability(&args.vul)?;
    let history = parse_calls(&args.auction)?;
    let auction = build_auction(dealer, vulnerability, &history)?;
    let seat = auction.our_seat;
    debug!(%seat, calls = history.len(), "auction replayed");

    let (decision, trace) = decide_with_trace(&auction, &hand, seat, &config);

    if args.json {
        match serde_json::to_string_pretty(&decision) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("failed to encode decision: {err}"),
        }
        return Ok(());
    }

    println!("Dealer: {:?}", auction.dealer);
    println!("Vulnerability: {:?}", auction.vulnerability);
    println!("\n{} ({} hcp)", seat, hand.hcp());
    for line in get_hand_suits(&hand) {
        println!("  {line}");
    }
    println!();
    print!("{}", format_table_header());
    print!("{}", format_history(&auction));

    match &decision {
        Decision::Bid(bid) => {
            let label = match bid.tag {
                BidTag::Natural(_) => String::new(),
                tag => format!(" [{tag}]"),
            };
            println!(
                "{}",
                format_row(
                    auction.len() + 1,
                    pos_char(seat),
                    &bid.call.render(),
                    &format!("{}{}", bid.rationale.split(':').next().unwrap_or(""), label),
                    &bid.rationale,
                )
            );
        }
        Decision::Defer => println!("Engine deferred: the auction is over."),
    }

    if args.trace {
        if let Some(trace) = &trace {
            print!("{}", format_full_trace(trace));
        }
    }
    if args.explain {
        println!("\nMeanings of the legal calls:");
        print!("{}", format_explanations(&explain_all(&auction, &config)));
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
