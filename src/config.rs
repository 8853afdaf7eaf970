use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use log::{info, warn};

use crate::{board::Player, evaluator::EvaluatorKind};

pub const DEFAULT_DEPTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opponent {
    Human,
    Random,
}

/// Game settings chosen before the first move. The computer always plays Max.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub depth: usize,
    pub evaluator: EvaluatorKind,
    pub first: Player,
    pub opponent: Opponent,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            evaluator: EvaluatorKind::Heuristic,
            first: Player::Max,
            opponent: Opponent::Human,
        }
    }
}

fn parse_depth(answer: &str) -> Result<usize> {
    let depth: usize = answer.trim().parse().context("depth must be a number")?;
    if depth < 1 {
        bail!("depth should be at least 1");
    }
    Ok(depth)
}

fn parse_evaluator(answer: &str) -> Result<EvaluatorKind> {
    match answer.trim() {
        "1" => Ok(EvaluatorKind::Terminal),
        "2" => Ok(EvaluatorKind::Heuristic),
        other => bail!("unknown evaluator choice {:?}", other),
    }
}

fn parse_first(answer: &str) -> Result<Player> {
    match answer.trim() {
        "1" => Ok(Player::Max),
        "2" => Ok(Player::Min),
        other => bail!("unknown first-move choice {:?}", other),
    }
}

fn parse_opponent(answer: &str) -> Result<Opponent> {
    match answer.trim() {
        "1" => Ok(Opponent::Human),
        "2" => Ok(Opponent::Random),
        other => bail!("unknown opponent choice {:?}", other),
    }
}

/// Prints `question` and reads one line. Fails once input is exhausted.
pub fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    write!(output, "{}", question)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input closed");
    }
    Ok(line)
}

fn ask<R, W, T>(
    input: &mut R,
    output: &mut W,
    question: &str,
    parse: fn(&str) -> Result<T>,
    default: T,
) -> Result<T>
where
    R: BufRead,
    W: Write,
    T: std::fmt::Debug,
{
    let answer = prompt(input, output, question)?;
    Ok(parse(&answer).unwrap_or_else(|err| {
        warn!("{:#}, using {:?}", err, default);
        default
    }))
}

impl Config {
    /// Asks for each setting in turn, keeping the default for any invalid answer.
    pub fn read<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Self> {
        let defaults = Config::default();
        let depth = ask(
            input,
            output,
            "Enter the difficulty level (search depth, higher is harder, e.g. 3): ",
            parse_depth,
            defaults.depth,
        )?;
        let evaluator = ask(
            input,
            output,
            "Evaluation? (1 - win/loss only, 2 - heuristic): ",
            parse_evaluator,
            defaults.evaluator,
        )?;
        let first = ask(
            input,
            output,
            "Who should make the first move? (1 - Computer (X), 2 - Opponent (O)): ",
            parse_first,
            defaults.first,
        )?;
        let opponent = ask(
            input,
            output,
            "Who plays O? (1 - You, 2 - Random): ",
            parse_opponent,
            defaults.opponent,
        )?;

        let config = Config {
            depth,
            evaluator,
            first,
            opponent,
        };
        info!("{:?}", config);
        Ok(config)
    }
}
