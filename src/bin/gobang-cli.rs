//! Console Gobang
//!
//! Plays one or more matches in the terminal, printing the board after
//! every move. Manual players type `row,col`.

use clap::Parser;
use gobang::agent::{Agent, AgentKind, ManualAgent};
use gobang::config::{GameConfig, Overrides};
use gobang::{Game, Outcome, Stone};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
#[command(version, about = "Gobang in the terminal")]
struct Args {
    #[command(flatten)]
    overrides: Overrides,

    /// Player with the black stones (moves first)
    #[arg(short, long, value_enum, default_value_t = AgentKind::Manual)]
    black: AgentKind,

    /// Player with the white stones
    #[arg(short, long, value_enum, default_value_t = AgentKind::Minimax)]
    white: AgentKind,

    /// How many matches to play
    #[arg(short = 'n', long, default_value_t = 1)]
    games: usize,

    /// Only print the final board of each match
    #[arg(short, long, default_value_t = false)]
    quiet: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn build_agent(kind: AgentKind, stone: Stone, config: &GameConfig) -> Box<dyn Agent> {
    let name = stone.name();
    match kind {
        AgentKind::Manual => Box::new(ManualAgent::stdio(name, stone)),
        _ => kind.build(name, stone, config, stone as u64),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    gobang::logging::init(args.log_level);

    let config = args.overrides.resolve()?;
    info!(?config, black = %args.black, white = %args.white, "starting");

    let mut game = Game::new(
        &config,
        build_agent(args.black, Stone::Black, &config),
        build_agent(args.white, Stone::White, &config),
    );

    for _ in 0..args.games {
        game.restart();
        if !args.quiet {
            println!("{}", game.board());
        }
        let outcome = loop {
            let turn = game.play_turn()?;
            if !args.quiet {
                println!("{} plays {}", turn.stone.name(), turn.pos);
                println!("{}", game.board());
            }
            if let Some(outcome) = turn.outcome {
                break outcome;
            }
        };

        if args.quiet {
            println!("{}", game.board());
        }
        match outcome {
            Outcome::Win { stone, line } => {
                println!("{} win! ({} - {})", stone.name(), line.start, line.end)
            }
            Outcome::Draw => println!("No one won."),
        }
    }

    let score = game.scoreboard();
    println!(
        "End result:\n- {} wins by Black ({})\n- {} wins by White ({})\n- {} draws",
        score.wins(Stone::Black),
        args.black,
        score.wins(Stone::White),
        args.white,
        score.draws()
    );
    Ok(())
}
