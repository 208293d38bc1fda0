mod cli;

use std::io::Write;
use std::process::ExitCode;

use cardware::symbols::{Capital, SymbolTable};
use cardware::wordlist::read_word_list;
use cardware::{Combined, Plan};
use clap::Parser;
use cli::Cli;
use log::{error, info, Level};
use rand::rngs::OsRng;

fn main() -> ExitCode {
    let cli = Cli::parse();
    build_logger(cli.log_level());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> cardware::Result<()> {
    let words = read_word_list(&cli.wordlist, cli.min_length)?;
    info!("read {} words", words.len());

    let mut device = Combined::new(&cli.dice().0)?;
    info!("using deck of {} cards", device.deck().cards().len());
    info!("using dice: {}", device.dice());

    let plan = Plan::builder()
        .cards(cli.cards)
        .maybe_max_draws(cli.max_draws)
        .build();
    let mut rng = OsRng;
    let listing = plan.run(&mut device, words, &mut rng)?;

    let mut out = std::io::stdout().lock();
    write!(out, "{listing}")?;

    if !cli.no_symbols {
        let table = SymbolTable::shuffled(&mut rng, cli.quotes, cli.space);
        write!(out, "\n{table}")?;
    }

    if !cli.no_capitals {
        writeln!(out, "\n{}", Capital::flip(&mut rng))?;
    }

    Ok(())
}

/// Diagnostics go to stderr so the listing on stdout stays clean.
fn build_logger(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    env_logger::Builder::from_env(env)
        .format(|buf, record| {
            let marker = match record.level() {
                Level::Warn | Level::Error => "[!]",
                _ => "[*]",
            };
            writeln!(buf, "{marker} {}", record.args())
        })
        .target(env_logger::Target::Stderr)
        .init();
}
