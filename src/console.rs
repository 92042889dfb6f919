//! Line-oriented driver for a practice session.
//!
//! Reads one command per line and writes plain text, so the same loop
//! works on a terminal or on scripted input.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::info;

use crate::error::GeneratorError;
use crate::models::{NUM_OPTIONS, SessionState};
use crate::random::RandomSource;
use crate::session::{PracticeSession, Tally};

const OPTION_LABELS: [char; NUM_OPTIONS] = ['A', 'B', 'C', 'D'];

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Generator(#[from] GeneratorError),
}

enum Command {
    Pick(usize),
    Next,
    Previous,
    Submit,
    Quit,
    Unknown,
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Submit;
    }

    match line.to_ascii_lowercase().as_str() {
        "q" | "quit" => Command::Quit,
        "j" => Command::Next,
        "k" => Command::Previous,
        "a" | "1" => Command::Pick(0),
        "b" | "2" => Command::Pick(1),
        "c" | "3" => Command::Pick(2),
        "d" | "4" => Command::Pick(3),
        _ => Command::Unknown,
    }
}

/// Runs the session until the learner quits or input ends.
pub fn run_practice<R, W>(
    session: &mut PracticeSession,
    input: R,
    output: &mut W,
    rng: &mut impl RandomSource,
) -> Result<Tally, ConsoleError>
where
    R: BufRead,
    W: Write,
{
    render_question(output, session)?;

    for line in input.lines() {
        let line = line?;
        let command = parse_command(&line);

        if matches!(command, Command::Quit) {
            break;
        }

        match session.state() {
            SessionState::Presenting => handle_presenting(session, command, output)?,
            SessionState::FeedbackCorrect | SessionState::FeedbackIncorrect => {
                session.acknowledge(rng)?;
                render_question(output, session)?;
            }
        }
    }

    let tally = session.tally();
    render_summary(output, &tally)?;
    info!(
        attempts = tally.attempts,
        correct = tally.correct,
        best_streak = tally.best_streak,
        "Practice session ended"
    );

    Ok(tally)
}

fn handle_presenting<W: Write>(
    session: &mut PracticeSession,
    command: Command,
    output: &mut W,
) -> io::Result<()> {
    let outcome = match command {
        Command::Next => {
            session.select_next_option();
            return render_question(output, session);
        }
        Command::Previous => {
            session.select_previous_option();
            return render_question(output, session);
        }
        Command::Pick(index) => {
            session.select_option(index);
            session.submit_answer()
        }
        Command::Submit => session.submit_answer(),
        Command::Unknown => {
            return writeln!(output, "Pick A-D (or 1-4), j/k to move, enter to submit, q to quit");
        }
        Command::Quit => None,
    };

    match outcome {
        Some(true) => writeln!(output, "Correct! Press enter for the next question."),
        Some(false) => writeln!(output, "Incorrect. Press enter to try again."),
        None => Ok(()),
    }
}

fn render_question<W: Write>(output: &mut W, session: &PracticeSession) -> io::Result<()> {
    let question = session.current_question();
    writeln!(output)?;
    writeln!(output, "{}", question.prompt())?;

    for (index, option) in question.options().iter().enumerate() {
        let marker = if index == session.selected_option() { ">" } else { " " };
        writeln!(output, " {} {}. {}", marker, OPTION_LABELS[index], option)?;
    }

    Ok(())
}

fn render_summary<W: Write>(output: &mut W, tally: &Tally) -> io::Result<()> {
    writeln!(
        output,
        "{} / {} correct  ({:.0}%)  ·  best streak {}",
        tally.correct,
        tally.attempts,
        tally.accuracy(),
        tally.best_streak
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::Generator;
    use crate::models::OperationKind;
    use crate::random::ScriptedSource;

    fn run(script: &str) -> (Tally, String, PracticeSession) {
        // 42 ÷ 7 with options [4, 7, 9, 6]
        let mut rng = ScriptedSource::new([7, 6, -2, 1, 3, 3, 2, 1]);
        let mut session =
            PracticeSession::start(Generator::default(), OperationKind::Division, &mut rng)
                .unwrap();

        let mut next = ScriptedSource::new([3, 5, 1, 2, 3, 3, 2, 1]);
        let mut output = Vec::new();
        let tally = run_practice(&mut session, script.as_bytes(), &mut output, &mut next).unwrap();
        (tally, String::from_utf8(output).unwrap(), session)
    }

    #[test]
    fn test_wrong_then_right() {
        let (tally, output, session) = run("a\n\nd\n\nq\n");

        assert!(output.contains("What is 42 ÷ 7?"));
        assert!(output.contains("Incorrect. Press enter to try again."));
        assert!(output.contains("Correct! Press enter for the next question."));
        assert!(output.contains("What is 15 ÷ 3?"));
        assert_eq!(tally.attempts, 2);
        assert_eq!(tally.correct, 1);
        assert_eq!(session.current_question().correct_answer(), 5);
    }

    #[test]
    fn test_navigation_then_submit() {
        let (tally, output, _) = run("k\n\n");

        assert!(output.contains(" > D. 6"));
        assert_eq!(tally.correct, 1);
        assert!(output.contains("1 / 1 correct  (100%)"));
    }

    #[test]
    fn test_unknown_command_shows_help() {
        let (tally, output, _) = run("zzz\nq\n");
        assert!(output.contains("Pick A-D"));
        assert_eq!(tally.attempts, 0);
    }

    #[test]
    fn test_generator_failure_ends_practice() {
        use crate::config::GeneratorConfig;

        // three attempts is exactly enough for the opening question
        let config = GeneratorConfig {
            max_decoy_attempts: 3,
            ..GeneratorConfig::default()
        };
        let generator = Generator::new(config).unwrap();
        let mut rng = ScriptedSource::new([7, 6, -2, 1, 3, 3, 2, 1]);
        let mut session =
            PracticeSession::start(generator, OperationKind::Division, &mut rng).unwrap();

        // an empty script gives answer 1 and perturbation -3 on every draw
        let mut exhausted = ScriptedSource::default();
        let mut output = Vec::new();
        let err = run_practice(&mut session, "d\n\n".as_bytes(), &mut output, &mut exhausted)
            .unwrap_err();

        assert!(matches!(
            err,
            ConsoleError::Generator(GeneratorError::Configuration(_))
        ));
        assert_eq!(session.state(), SessionState::FeedbackCorrect);
        assert_eq!(session.tally().correct, 1);
    }
}
