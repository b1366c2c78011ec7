use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use shell_grammars::calc::Parser;

fn main() -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline("Calc> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                rl.add_history_entry(line.as_str())?;
                evaluate_line(&line);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

/// Evaluate every `;`-terminated statement on the line, printing each result.
/// The first error abandons the rest of the line; the session goes on.
fn evaluate_line(line: &str) {
    let mut parser = Parser::new(line);
    while let Some(result) = parser.next_statement() {
        match result {
            Ok(value) => println!("=> {}", value),
            Err(err) => {
                eprintln!("{}", err);
                break;
            }
        }
    }
}
