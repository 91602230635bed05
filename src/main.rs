use std::io::{BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use apptalk::{AppTalk, Config, TaskStore};

#[derive(Parser)]
#[command(name = "apptalk", about = "Free-text desktop application control")]
struct Cli {
    /// Command to run once, e.g. `apptalk open safari`
    #[arg(trailing_var_arg = true)]
    command: Vec<String>,

    /// Start an interactive session
    #[arg(short, long)]
    interactive: bool,

    /// Set the task description before running
    #[arg(long, value_name = "DESCRIPTION")]
    task: Option<String>,

    /// Log filter, e.g. `info` or `apptalk=debug` (overrides the config file)
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut config = Config::load();
    init_tracing(cli.log_level.as_deref().unwrap_or_else(|| config.log_level()));

    if let Some(task) = &cli.task {
        if let Err(error) = config.set_task_description(task) {
            eprintln!("failed to save task description: {error}");
            return ExitCode::FAILURE;
        }
        println!("✅ Task description saved.");
        if cli.command.is_empty() && !cli.interactive {
            return ExitCode::SUCCESS;
        }
    }

    let mut talk = AppTalk::new(config);
    if let Err(error) = talk.start() {
        eprintln!("failed to start: {error}");
        return ExitCode::FAILURE;
    }

    let code = if cli.command.is_empty() || cli.interactive {
        repl(&mut talk)
    } else {
        one_shot(&mut talk, &cli.command.join(" "))
    };

    if let Err(error) = talk.stop() {
        eprintln!("failed to stop cleanly: {error}");
    }
    code
}

fn one_shot(talk: &mut AppTalk, line: &str) -> ExitCode {
    match talk.send_message(line) {
        Ok(response) => {
            println!("{response}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn repl(talk: &mut AppTalk) -> ExitCode {
    println!("apptalk interactive session. Type 'exit' to leave.");
    let stdin = std::io::stdin();
    loop {
        print!("> ");
        if std::io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return ExitCode::SUCCESS, // EOF
            Ok(_) => {}
            Err(error) => {
                eprintln!("failed to read input: {error}");
                return ExitCode::FAILURE;
            }
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
            return ExitCode::SUCCESS;
        }
        match talk.send_message(line) {
            Ok(response) => println!("{response}"),
            Err(error) => {
                eprintln!("{error}");
                return ExitCode::FAILURE;
            }
        }
    }
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
