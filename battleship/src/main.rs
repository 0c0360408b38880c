// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{error::Error, fmt, io, str::FromStr};

use clap::{value_t, App, Arg, ArgMatches};
use once_cell::sync::Lazy;
use rand::{rngs::StdRng, Rng, SeedableRng};
use regex::Regex;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::{LevelFilter, Targets},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use salvo::{
    config::{Fleet, GameConfig},
    placement::RandomPlacement,
    targeting::{HuntTargeting, RandomTargeting, TargetingStrategy},
    Game, Side,
};

/// Ship lengths separated by commas and/or whitespace.
static FLEET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[0-9]+(?:(?:\s*,\s*|\s+)[0-9]+)*\s*$").unwrap());

fn main() -> Result<(), Box<dyn Error>> {
    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Plays automated games of battleship and reports who won.")
        .arg(
            Arg::with_name("size")
                .short("s")
                .long("size")
                .value_name("SIZE")
                .help("width and height of each board")
                .takes_value(true)
                .default_value("10")
                .validator(is_positive),
        )
        .arg(
            Arg::with_name("fleet")
                .short("f")
                .long("fleet")
                .value_name("LENGTHS")
                .help("ship lengths each side places, e.g. \"6,4,3,3,2\"")
                .takes_value(true)
                .default_value("6,4,3,3,2")
                .validator(is_fleet),
        )
        .arg(
            Arg::with_name("games")
                .short("n")
                .long("games")
                .value_name("COUNT")
                .help("number of games to play")
                .takes_value(true)
                .default_value("1")
                .validator(is_positive),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("fix the random seed for reproducible games")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("player")
                .long("player")
                .value_name("STRATEGY")
                .help("strategy standing in for the player's clicks")
                .takes_value(true)
                .possible_values(&["random", "hunt"])
                .case_insensitive(true)
                .default_value("hunt"),
        )
        .arg(
            Arg::with_name("opponent")
                .long("opponent")
                .value_name("STRATEGY")
                .help("strategy used by the automated opponent")
                .takes_value(true)
                .possible_values(&["random", "hunt"])
                .case_insensitive(true)
                .default_value("random"),
        )
        .arg(
            Arg::with_name("log_level")
                .short("l")
                .long("log-level")
                .value_name("LEVEL")
                .help("one of \"off\", \"error\", \"warn\", \"info\", \"debug\", \"trace\"")
                .takes_value(true)
                .default_value("info"),
        )
        .get_matches();

    initialize_logging(value_t!(matches, "log_level", LevelFilter).unwrap_or_else(|e| e.exit()));

    let config = read_config(&matches)?;
    config.validate()?;
    let games = value_t!(matches, "games", usize).unwrap_or_else(|e| e.exit());
    let seed = if matches.is_present("seed") {
        value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit())
    } else {
        rand::random()
    };
    let player = value_t!(matches, "player", ShooterKind).unwrap_or_else(|e| e.exit());
    let opponent = value_t!(matches, "opponent", ShooterKind).unwrap_or_else(|e| e.exit());
    info!(seed, size = config.board_size, fleet = %config.fleet, games, "starting");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut wins = [0usize; 2];
    let mut total_shots = 0;
    for game_idx in 0..games {
        let report = play_game(&mut rng, &config, player, opponent)?;
        debug!(
            game_idx,
            winner = %report.winner,
            player_shots = report.player_shots,
            opponent_shots = report.opponent_shots,
            "game finished"
        );
        match report.winner {
            Side::Player => wins[0] += 1,
            Side::Opponent => wins[1] += 1,
        }
        total_shots += report.player_shots + report.opponent_shots;
    }

    println!(
        "End result after {} game(s) on a {}x{} board with fleet {}:",
        games, config.board_size, config.board_size, config.fleet
    );
    println!("- {} wins by player ({})", wins[0], player);
    println!("- {} wins by opponent ({})", wins[1], opponent);
    println!(
        "- {:.1} shots per game on average",
        total_shots as f64 / games as f64
    );
    Ok(())
}

/// Build the game config from the parsed arguments.
fn read_config(matches: &ArgMatches) -> Result<GameConfig, Box<dyn Error>> {
    let size = value_t!(matches, "size", usize).unwrap_or_else(|e| e.exit());
    let fleet: Fleet = matches.value_of("fleet").unwrap_or_default().parse()?;
    Ok(GameConfig::new(size, fleet))
}

/// Outcome of a single automated game.
struct GameReport {
    winner: Side,
    player_shots: usize,
    opponent_shots: usize,
}

/// Place both fleets at random and play the game to the end.
fn play_game(
    rng: &mut StdRng,
    config: &GameConfig,
    player: ShooterKind,
    opponent: ShooterKind,
) -> Result<GameReport, Box<dyn Error>> {
    let placer = RandomPlacement::from_config(config);
    let player_board = placer.build_board(rng, config)?;
    let opponent_board = placer.build_board(rng, config)?;

    let mut game = Game::new(player_board, opponent_board, opponent.build(rng.gen()));
    let mut shooter = player.build(rng.gen());
    let winner = game.play_out(&mut *shooter)?;
    Ok(GameReport {
        winner,
        player_shots: game.shots_fired(Side::Player),
        opponent_shots: game.shots_fired(Side::Opponent),
    })
}

/// Which targeting strategy a side uses.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum ShooterKind {
    Random,
    Hunt,
}

impl ShooterKind {
    /// Build the strategy with its own generator seeded from `seed`.
    fn build(self, seed: u64) -> Box<dyn TargetingStrategy> {
        let rng = StdRng::seed_from_u64(seed);
        match self {
            ShooterKind::Random => Box::new(RandomTargeting::new(rng)),
            ShooterKind::Hunt => Box::new(HuntTargeting::new(rng)),
        }
    }
}

impl FromStr for ShooterKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(ShooterKind::Random),
            "hunt" => Ok(ShooterKind::Hunt),
            other => Err(format!("unknown strategy {}", other)),
        }
    }
}

impl fmt::Display for ShooterKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            ShooterKind::Random => "random",
            ShooterKind::Hunt => "hunt",
        })
    }
}

/// Argument validator for nonzero counts.
fn is_positive(v: String) -> Result<(), String> {
    match v.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(_) => Ok(()),
        Err(_) => Err(format!("{} is not a number", v)),
    }
}

/// Argument validator for fleet lists.
fn is_fleet(v: String) -> Result<(), String> {
    if FLEET.is_match(&v) {
        Ok(())
    } else {
        Err(format!(
            "{} is not a list of ship lengths, use e.g. \"6,4,3,3,2\"",
            v
        ))
    }
}

/// Install the tracing subscriber, writing compact events to stderr.
fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .event_format(format),
        )
        .with(filter)
        .init();
}
