use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use guandan_backend::config::{load_rules_file, standard_rules};
use guandan_backend::domain::{
    Level, MatchState, RoundLevel, RuleConfig, Side, TableSize, TeamLevelState,
};
use guandan_backend::services::ScoringService;

mod replay;

#[derive(Clone, Copy, ValueEnum)]
enum Team {
    Team1,
    Team2,
}

impl From<Team> for Side {
    fn from(team: Team) -> Self {
        match team {
            Team::Team1 => Side::Team1,
            Team::Team2 => Side::Team2,
        }
    }
}

#[derive(Parser)]
#[command(name = "guandan-score")]
#[command(about = "Score Guandan rounds offline")]
struct Args {
    /// JSON rules file replacing the standard presets
    #[arg(long, global = true)]
    rules: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score a single round from one side's finishing positions
    Score {
        /// Players at the table: 4, 6 or 8
        #[arg(long, default_value_t = 4)]
        players: u8,

        /// The reporting side's positions, e.g. "1 3" or "13"
        #[arg(long)]
        ranks: String,

        /// Side whose positions `--ranks` lists
        #[arg(long, value_enum, default_value = "team1")]
        side: Team,

        /// The winning side must hold first place
        #[arg(long)]
        must1: bool,

        /// Only a team on its own A round may clear A
        #[arg(long)]
        strict_a: bool,

        #[arg(long, value_parser = parse_level, default_value = "2")]
        team1_level: Level,

        #[arg(long, value_parser = parse_level, default_value = "2")]
        team2_level: Level,

        #[arg(long, default_value_t = 0)]
        team1_a_fails: u8,

        #[arg(long, default_value_t = 0)]
        team2_a_fails: u8,

        /// Level the round is played at (defaults to the owner's level)
        #[arg(long, value_parser = parse_level)]
        round_level: Option<Level>,

        /// Side whose level the round is played at
        #[arg(long, value_enum)]
        round_owner: Option<Team>,
    },
    /// Replay a match file: `{ "table_size": 4, "rules": {..}, "rounds": ["13", ..] }`
    Replay { file: PathBuf },
}

fn parse_level(raw: &str) -> Result<Level, String> {
    raw.parse::<Level>().map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "guandan_score=info,guandan_backend=warn".into()),
        )
        .init();

    let args = Args::parse();

    let rules = match &args.rules {
        Some(path) => match load_rules_file(path) {
            Ok(rules) => rules,
            Err(e) => {
                eprintln!("❌ {e}");
                return ExitCode::FAILURE;
            }
        },
        None => standard_rules(),
    };

    let result = match args.command {
        Command::Score {
            players,
            ranks,
            side,
            must1,
            strict_a,
            team1_level,
            team2_level,
            team1_a_fails,
            team2_a_fails,
            round_level,
            round_owner,
        } => {
            let rules = RuleConfig {
                first_place_required: must1 || rules.first_place_required,
                strict_a: strict_a || rules.strict_a,
                ..rules
            };
            let teams = [
                TeamLevelState {
                    level: team1_level,
                    a_fail_count: team1_a_fails,
                },
                TeamLevelState {
                    level: team2_level,
                    a_fail_count: team2_a_fails,
                },
            ];
            let owner = round_owner.map(Side::from);
            let level = round_level
                .or_else(|| owner.map(|side| teams[side.index()].level))
                .unwrap_or(team1_level);
            let state = MatchState {
                teams,
                round_level: RoundLevel { level, owner },
                ..MatchState::default()
            };
            score_one(players, side.into(), &ranks, &rules, &state, args.json)
        }
        Command::Replay { file } => replay::run(&file, rules, args.json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {e}");
            ExitCode::FAILURE
        }
    }
}

fn score_one(
    players: u8,
    side: Side,
    ranks: &str,
    rules: &RuleConfig,
    state: &MatchState,
    json: bool,
) -> Result<(), String> {
    let size = TableSize::try_from(players).map_err(|e| e.to_string())?;
    let scored = ScoringService::new()
        .score_for(size, side, ranks, rules, state)
        .map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&scored).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let t = &scored.transition;
    println!("positions: {}", scored.positions);
    println!("result:    {}", t.note);
    println!(
        "levels:    Team 1 {} -> {}, Team 2 {} -> {}",
        t.before.team(Side::Team1).level,
        t.after.team(Side::Team1).level,
        t.before.team(Side::Team2).level,
        t.after.team(Side::Team2).level,
    );
    println!("next:      {}", replay::describe_round(&t.after.round_level));
    if let Some(champion) = t.after.champion {
        println!("🏆 {} wins the match", champion.label());
    }
    Ok(())
}
