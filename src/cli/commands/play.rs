//! Play command - interactive games against the matchbox agent

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::{
    ai::{MatchboxAgent, MatchboxAgentBuilder},
    cli::{
        config::{FirstTurn, LearningArgs},
        output::{render_board, write_session_stats},
    },
    rules::{
        Game, Perspective, Player, Victory, WinReason,
        notation::{move_to_coord, parse_move},
    },
    utils::RandomSource,
};

#[derive(Parser, Debug, Clone)]
#[command(about = "Play Hexapawn against the learning computer")]
pub struct PlayArgs {
    /// Who makes the opening move
    #[arg(long, value_enum, default_value_t = FirstTurn::Human)]
    pub first: FirstTurn,

    /// Random seed for the computer's choices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop after this many games instead of asking to play again
    #[arg(long)]
    pub games: Option<usize>,

    #[command(flatten)]
    pub learning: LearningArgs,
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Every requested game was played, or the player declined another
    Finished,
    /// The player quit or input ran out mid-game
    Quit,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args
        .learning
        .matchbox_config()
        .context("Invalid learning options")?;
    let mut builder = MatchboxAgentBuilder::new()
        .player(Player::Dark)
        .config(config);
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    let mut agent = builder.build().context("Failed to build the computer player")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&args, &mut agent, stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Drive a sequence of games between a human on `input`/`output` and `agent`.
///
/// The agent keeps what it learns from one game to the next. A game
/// abandoned midway is not learned from.
pub fn run_session<R, I, O>(
    args: &PlayArgs,
    agent: &mut MatchboxAgent<R>,
    mut input: I,
    mut output: O,
) -> Result<SessionEnd>
where
    R: RandomSource,
    I: BufRead,
    O: Write,
{
    let human = agent.player().opponent();
    let perspective = Perspective::from(human);
    let mut played = 0usize;

    writeln!(
        output,
        "You play {human}. Enter moves like b1-b2, 'moves' for a list, 'q' to quit."
    )?;

    loop {
        let first = match args.first {
            FirstTurn::Human => human,
            FirstTurn::Computer => agent.player(),
        };
        let Some(victory) = play_game(agent, first, perspective, &mut input, &mut output)? else {
            writeln!(output, "Goodbye.")?;
            return Ok(SessionEnd::Quit);
        };
        played += 1;

        if victory.winner == human {
            writeln!(output, "You win by {}!", victory.reason)?;
        } else {
            writeln!(output, "The computer wins by {}.", victory.reason)?;
        }
        write_session_stats(&mut output, &agent.stats())?;

        if let Some(limit) = args.games {
            if played >= limit {
                return Ok(SessionEnd::Finished);
            }
            continue;
        }

        write!(output, "Play again? [y/N] ")?;
        output.flush()?;
        match read_line(&mut input)? {
            Some(answer) if answer.eq_ignore_ascii_case("y") => {}
            _ => return Ok(SessionEnd::Finished),
        }
    }
}

/// Play one game; `None` if the human quit before it finished.
fn play_game<R, I, O>(
    agent: &mut MatchboxAgent<R>,
    first: Player,
    perspective: Perspective,
    input: &mut I,
    output: &mut O,
) -> Result<Option<Victory>>
where
    R: RandomSource,
    I: BufRead,
    O: Write,
{
    let computer = agent.player();
    let mut game = Game::new(first);

    let victory = loop {
        if let Some(victory) = game.outcome() {
            writeln!(output, "\n{}", render_board(game.board(), perspective))?;
            break victory;
        }

        if game.to_move() == computer {
            let Some(mv) = agent.select_move(game.board()) else {
                break Victory::new(computer.opponent(), WinReason::NoLegalMoves);
            };
            writeln!(output, "Computer plays {}", move_to_coord(mv, perspective))?;
            game.play(mv)?;
            continue;
        }

        writeln!(output, "\n{}", render_board(game.board(), perspective))?;
        write!(output, "Your move: ")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.as_str() {
            "q" | "quit" | "exit" => return Ok(None),
            "moves" | "?" => {
                let listed: Vec<String> = game
                    .legal_moves()
                    .into_iter()
                    .map(|mv| move_to_coord(mv, perspective))
                    .collect();
                writeln!(output, "Legal moves: {}", listed.join(", "))?;
            }
            text => match parse_move(text, perspective) {
                Ok(mv) => {
                    if let Err(err) = game.play(mv) {
                        writeln!(output, "{err}")?;
                    }
                }
                Err(err) => writeln!(output, "{err}")?,
            },
        }
    };

    let won = victory.winner == computer;
    agent.learn_from_game(&game.history_for(computer), won);
    debug!(%victory, plies = game.ply(), "game finished");
    Ok(Some(victory))
}

/// Next trimmed input line, or `None` at end of input
fn read_line<I: BufRead>(input: &mut I) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read from input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::{rules::Board, utils::ScriptedDraws};

    fn args(first: FirstTurn, games: Option<usize>) -> PlayArgs {
        PlayArgs {
            first,
            seed: None,
            games,
            learning: LearningArgs::default(),
        }
    }

    fn scripted_agent() -> MatchboxAgent<ScriptedDraws> {
        MatchboxAgentBuilder::new()
            .build_with_source(ScriptedDraws::new(vec![0]))
            .unwrap()
    }

    fn run(
        args: &PlayArgs,
        agent: &mut MatchboxAgent<ScriptedDraws>,
        input: &str,
    ) -> (SessionEnd, String) {
        let mut output = Vec::new();
        let end = run_session(args, agent, Cursor::new(input.to_string()), &mut output).unwrap();
        (end, String::from_utf8(output).unwrap())
    }

    #[test]
    fn human_promotion_wins_and_computer_learns() {
        let mut agent = scripted_agent();
        // b1-b2, computer answers a3-a2, then b2xc3 promotes
        let (end, text) = run(&args(FirstTurn::Human, Some(1)), &mut agent, "b1-b2\nb2-c3\n");

        assert_eq!(end, SessionEnd::Finished);
        assert!(text.contains("Computer plays a3-a2"), "{text}");
        assert!(text.contains("You win by promotion"), "{text}");

        let stats = agent.stats();
        assert_eq!(stats.games_learned, 1);
        assert_eq!(stats.losses, 1);

        let after_first = Board::from_string("DDD|.L.|L.L").unwrap();
        let weights = agent.weights_for_board(&after_first);
        assert_eq!(weights[&crate::rules::Move::new(0, 0, 1, 0).key()], 2);
    }

    #[test]
    fn bad_input_is_reported_and_reprompted() {
        let mut agent = scripted_agent();
        let (end, text) = run(&args(FirstTurn::Human, None), &mut agent, "zz\nb1-b3\nq\n");

        assert_eq!(end, SessionEnd::Quit);
        assert!(text.contains("invalid coordinate 'zz'"), "{text}");
        assert!(text.contains("illegal move"), "{text}");
        assert_eq!(agent.stats().games_learned, 0);
    }

    #[test]
    fn computer_can_open() {
        let mut agent = scripted_agent();
        let (end, text) = run(&args(FirstTurn::Computer, None), &mut agent, "");

        assert_eq!(end, SessionEnd::Quit);
        assert!(text.contains("Computer plays a3-a2"), "{text}");
        assert_eq!(agent.known_states(), 1);
    }

    #[test]
    fn moves_lists_legal_options() {
        let mut agent = scripted_agent();
        let (_, text) = run(&args(FirstTurn::Human, None), &mut agent, "moves\nq\n");
        assert!(text.contains("Legal moves: a1-a2, b1-b2, c1-c2"), "{text}");
    }
}
