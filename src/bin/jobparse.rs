use argh::FromArgs;
use shell_grammars::{Job, parse_job};

/// A line exercising every corner of the grammar: repeated separators,
/// glued pipes, and a redirect stuck to the last word.
const SELF_TEST_LINE: &str = "cmd1 aaa    bbb     | cmd2 |cmd3|cmd4 xxx>out.txt";

#[derive(FromArgs)]
/// Parse a shell-like line into a pipeline of commands plus an optional
/// output redirection and print the result.
struct Args {
    #[argh(positional)]
    /// the line to parse; when omitted, a built-in self-test line is used.
    line: Option<String>,
}

fn main() {
    let args: Args = argh::from_env();
    let line = args.line.unwrap_or_else(|| SELF_TEST_LINE.to_string());

    println!("input: {:?}", line);
    print_job(&parse_job(&line));
}

fn print_job(job: &Job) {
    for (i, command) in job.commands.iter().enumerate() {
        println!("command[{}]: {}", i, command);
    }
    match &job.redirect {
        Some(target) => println!("redirect: {}", target),
        None => println!("redirect: (none)"),
    }
}
