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
use std::{
    fs,
    io::{self, Write},
    process,
};

use clap::{value_t, App, Arg, ArgMatches};
use log::{debug, LevelFilter};
use once_cell::sync::Lazy;
use regex::Regex;

use navalboard::{
    AttackOutcome, Board, CannotPlaceReason, CannotShootReason, Orientation, Ship,
};

/// Script replayed when no `--script` is given: three ships for each player followed by
/// a volley of attacks.
const DEFAULT_SCRIPT: &str = "\
# player 1
place 5 1,0 horizontal 1
place 4 0,2 vertical 1
place 3 5,5 horizontal 1
# player 2
place 3 0,6 vertical 2
place 4 6,1 horizontal 2
place 5 8,2 vertical 2

attack 0,0
attack 0,1
attack 0,2
attack 0,3
attack 0,4
attack 5,5
attack 5,6
attack 5,7
attack 7,2
attack 7,3
attack 7,4
attack 7,5
attack 7,6
";

fn main() -> io::Result<()> {
    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Replays a script of ship placements and attacks against a single board.")
        .arg(
            Arg::with_name("width")
                .short("w")
                .long("width")
                .value_name("WIDTH")
                .help("width of the board")
                .takes_value(true)
                .default_value("10"),
        )
        .arg(
            Arg::with_name("height")
                .short("H")
                .long("height")
                .value_name("HEIGHT")
                .help("height of the board")
                .takes_value(true)
                .default_value("10"),
        )
        .arg(
            Arg::with_name("script")
                .short("s")
                .long("script")
                .value_name("FILE")
                .help("file of commands to replay instead of the built-in example")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("log board activity; repeat for more detail"),
        )
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));

    let mut board = build_board(&matches);
    let script = match matches.value_of("script") {
        Some(path) => {
            debug!("reading script from {}", path);
            fs::read_to_string(path)?
        }
        None => DEFAULT_SCRIPT.to_owned(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_script(&mut board, &script, &mut out)
}

/// Install the logger. `RUST_LOG` applies unless overridden by `-v`.
fn init_logging(verbosity: u64) {
    let mut builder = env_logger::Builder::from_default_env();
    match verbosity {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.init();
}

/// Construct the board from the size arguments, exiting on invalid sizes.
fn build_board(matches: &ArgMatches) -> Board {
    let width = value_t!(matches, "width", usize).unwrap_or_else(|e| e.exit());
    let height = value_t!(matches, "height", usize).unwrap_or_else(|e| e.exit());
    match Board::try_new(height, width) {
        Some(board) => board,
        None => {
            eprintln!("invalid board size {}x{}", width, height);
            process::exit(2);
        }
    }
}

/// A single line of a script.
#[derive(Debug, Eq, PartialEq)]
enum Command {
    Place {
        length: usize,
        x: isize,
        y: isize,
        orientation: Orientation,
        owner: u8,
    },
    Attack(isize, isize),
    Status,
}

/// Parse a script line. Returns `Ok(None)` for blank lines and comments.
fn parse_command(line: &str) -> Result<Option<Command>, String> {
    /// Matcher for commands with args.
    static PLACE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)(?:place|put)\s+
        (?P<len>[0-9]+)\s+
        (?:(?:at|on)\s+)?
        (?P<x>-?[0-9]+)(?:\s*,\s*|\s+)(?P<y>-?[0-9]+)\s+
        (?P<dir>\w+)\s+
        (?:(?:for|owner|player)\s+)?
        (?P<owner>[0-9]+)$",
        )
        .unwrap()
    });
    static ATTACK: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)(?:attack|fire|shoot)\s+
        (?:(?:at|on)\s+)?
        (?P<x>-?[0-9]+)(?:\s*,\s*|\s+)(?P<y>-?[0-9]+)$",
        )
        .unwrap()
    });

    let line = line.trim().to_ascii_lowercase();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    if line == "status" {
        return Ok(Some(Command::Status));
    }
    if let Some(captures) = PLACE.captures(&line) {
        let number = |name: &str| captures.name(name).map_or("", |m| m.as_str());
        let length = number("len")
            .parse()
            .map_err(|_| format!("invalid length: {}", number("len")))?;
        let x = number("x")
            .parse()
            .map_err(|_| format!("invalid x: {}", number("x")))?;
        let y = number("y")
            .parse()
            .map_err(|_| format!("invalid y: {}", number("y")))?;
        let orientation = match number("dir") {
            "horizontal" | "h" | "across" => Orientation::Horizontal,
            "vertical" | "v" | "down" => Orientation::Vertical,
            other => {
                return Err(format!(
                    "invalid orientation {}, choose \"horizontal\" or \"vertical\"",
                    other
                ))
            }
        };
        let owner = number("owner")
            .parse()
            .map_err(|_| format!("invalid owner: {}", number("owner")))?;
        Ok(Some(Command::Place {
            length,
            x,
            y,
            orientation,
            owner,
        }))
    } else if let Some(captures) = ATTACK.captures(&line) {
        let number = |name: &str| captures.name(name).map_or("", |m| m.as_str());
        let x = number("x")
            .parse()
            .map_err(|_| format!("invalid x: {}", number("x")))?;
        let y = number("y")
            .parse()
            .map_err(|_| format!("invalid y: {}", number("y")))?;
        Ok(Some(Command::Attack(x, y)))
    } else {
        Err(format!("unrecognized command \"{}\"", line))
    }
}

/// Replay every command in the script against the board, printing each result. Stops
/// at the first rejected placement or attack, or once a player has won.
fn run_script<W: Write>(board: &mut Board, script: &str, out: &mut W) -> io::Result<()> {
    for (i, line) in script.lines().enumerate() {
        let cmd = match parse_command(line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(msg) => {
                writeln!(out, "line {}: {}", i + 1, msg)?;
                continue;
            }
        };
        match cmd {
            Command::Place {
                length,
                x,
                y,
                orientation,
                owner,
            } => {
                let ship = match Ship::new(length, x, y, orientation, owner) {
                    Ok(ship) => ship,
                    Err(err) => {
                        writeln!(out, "InvalidShip")?;
                        writeln!(out, "{}", err)?;
                        return Ok(());
                    }
                };
                match board.place_ship(ship) {
                    Ok(placed) => writeln!(out, "{}", placed)?,
                    Err(err) => {
                        writeln!(out, "{}", place_error_kind(err.reason()))?;
                        writeln!(out, "{}", err)?;
                        return Ok(());
                    }
                }
            }
            Command::Attack(x, y) => match board.attack(x, y) {
                Ok(outcome @ AttackOutcome::Victory { .. }) => {
                    writeln!(out, "GameOver")?;
                    writeln!(out, "{}", outcome)?;
                    return Ok(());
                }
                Ok(outcome) => writeln!(out, "{}", outcome)?,
                Err(err) => {
                    writeln!(out, "{}", shot_error_kind(err.reason()))?;
                    writeln!(out, "{}", err)?;
                    return Ok(());
                }
            },
            Command::Status => match board.winner() {
                Some(winner) => writeln!(out, "game over: {} wins", winner)?,
                None => writeln!(
                    out,
                    "in progress: {} ships afloat, {} cells attacked",
                    board.ships().count(),
                    board.hits().len()
                )?,
            },
        }
    }
    Ok(())
}

fn place_error_kind(reason: CannotPlaceReason) -> &'static str {
    match reason {
        CannotPlaceReason::InvalidOwner => "InvalidOwner",
        CannotPlaceReason::OutOfBounds => "OutOfBounds",
        CannotPlaceReason::Overlapping => "Overlapping",
    }
}

fn shot_error_kind(reason: CannotShootReason) -> &'static str {
    match reason {
        CannotShootReason::OutOfBounds => "OutOfBounds",
        CannotShootReason::DuplicateHit => "DuplicateHit",
    }
}
