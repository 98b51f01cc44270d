//! Roshambo Binary
//!
//! Plays the predicting robot against baseline bots on the local harness.
//!
//! Commands: duel, tournament
use clap::Args;
use clap::Parser;
use colored::*;
use roshambo::*;
use std::path::PathBuf;

#[derive(Args)]
struct Common {
    #[arg(long, default_value_t = MATCH_ROUNDS, help = "Rounds per matchup")]
    rounds: usize,
    #[arg(long, help = "Seed for reproducible play")]
    seed: Option<u64>,
    #[arg(long, help = "JSON settings file for the robot's pipeline")]
    config: Option<PathBuf>,
    #[arg(long, help = "Also write debug logs under logs/")]
    log_file: bool,
}

impl Common {
    fn settings(&self) -> anyhow::Result<Settings> {
        match self.config {
            Some(ref path) => Settings::load(path),
            None => Ok(Settings::default()),
        }
    }
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
enum Command {
    #[command(about = "Play the robot against a single opponent")]
    Duel {
        #[arg(
            long,
            default_value = "fish",
            help = "robot, fish, rock, paper, scissors, mirror, beater, repetitive, cycle:<moves>"
        )]
        opponent: Roster,
        #[command(flatten)]
        common: Common,
    },
    #[command(about = "Round-robin between the robot and every baseline bot")]
    Tournament {
        #[arg(long, help = "Write the significance tiers as JSON to this file")]
        leaderboard: Option<PathBuf>,
        #[command(flatten)]
        common: Common,
    },
}

fn main() -> anyhow::Result<()> {
    match Command::parse() {
        Command::Duel { opponent, common } => {
            roshambo::log(common.log_file)?;
            let settings = common.settings()?;
            let ref mut robot = Roster::Robot.spawn(&settings, common.seed)?;
            let ref mut other = opponent.spawn(&settings, common.seed.map(|s| s.wrapping_add(1)))?;
            let score = Matchup::new(common.rounds).play(robot.as_mut(), other.as_mut());
            let verdict = match score.bankroll[0].signum() {
                1 => "WIN".green().bold(),
                -1 => "LOSS".red().bold(),
                _ => "DRAW".yellow().bold(),
            };
            println!("{} vs {}: {} {}", "robot".bold(), opponent, verdict, score);
        }
        Command::Tournament { leaderboard, common } => {
            roshambo::log(common.log_file)?;
            let settings = common.settings()?;
            let tournament = Tournament::new(Roster::field(), settings, Matchup::new(common.rounds));
            let tournament = match common.seed {
                Some(seed) => tournament.seeded(seed),
                None => tournament,
            };
            let standings = tournament.run()?;
            for (rank, standing) in standings.iter().enumerate() {
                let line = format!("{:>2}. {}", rank + 1, standing);
                match standing.mean() {
                    m if m > 0.0 => println!("{}", line.green()),
                    m if m < 0.0 => println!("{}", line.red()),
                    _ => println!("{}", line),
                }
            }
            let board = Leaderboard::from(standings);
            for tier in board.tiers() {
                println!("\n{}", tier.to_string().bold());
            }
            if let Some(ref path) = leaderboard {
                board.save(path)?;
            }
        }
    }
    Ok(())
}
