use mathdrill::algorithm::ShuffledSelector;
use mathdrill::console::{LineConsole, TerminalConsole};
use mathdrill::operation::Operation;
use mathdrill::table::{TableGenerator, OPERAND_MAX, OPERAND_MIN};
use mathdrill::training::{SessionEnd, Training};
use mathdrill::traits::{Console, Selector};

use log::{error, info, warn};
use std::io::IsTerminal;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};

/// Drill the facts of an arithmetic table, answer 'q' to stop.
#[derive(Parser, Debug)]
#[clap(long_about = None)]
struct Args {
    /// The operation to practice.
    #[clap(value_enum)]
    operation: Operation,

    /// First operands of the facts to ask, each from 1 to 10.
    #[clap(required = true, value_parser = clap::value_parser!(u8).range(OPERAND_MIN as i64..=OPERAND_MAX as i64))]
    values: Vec<u8>,

    /// Seed for the question order, random if not provided.
    #[clap(long)]
    seed: Option<u64>,

    /// Do not clear the screen before each question.
    #[clap(long)]
    no_clear: bool,
}

fn drill<C: Console>(
    operation: Operation,
    selector: Box<dyn Selector>,
    console: C,
) -> mathdrill::traits::Result<SessionEnd> {
    Training::new(operation, selector, console).run()
}

fn run(args: &Args) -> mathdrill::traits::Result<SessionEnd> {
    let combinations = TableGenerator::new(args.operation).combinations(&args.values);
    info!(
        "{} facts for {:?} with {:?}",
        combinations.len(),
        args.operation,
        args.values
    );
    let selector = Box::new(ShuffledSelector::new(combinations, args.seed));

    if std::io::stdin().is_terminal() && std::io::stdout().is_terminal() {
        drill(args.operation, selector, TerminalConsole::new(!args.no_clear))
    } else {
        let console = LineConsole::new(std::io::stdin().lock(), std::io::stdout());
        drill(args.operation, selector, console)
    }
}

/// Parse the arguments, argument errors always end with the usage line.
fn parse_args() -> Result<Args, ExitCode> {
    Args::try_parse().map_err(|e| {
        let _ = e.print();
        if e.use_stderr() && !e.to_string().contains("Usage:") {
            eprintln!("\n{}", Args::command().render_usage());
        }
        ExitCode::from(e.exit_code() as u8)
    })
}

fn leave_on_interrupt() -> ! {
    info!("interrupted");
    let _ = crossterm::terminal::disable_raw_mode();
    println!();
    std::process::exit(0);
}

/// Catch Ctrl-C for the whole process, returns once the handler is registered.
fn install_interrupt_handler() -> std::io::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let (ready_tx, ready_rx) = std::sync::mpsc::channel();

    std::thread::spawn(move || {
        runtime.block_on(async {
            let ctrl_c = tokio::signal::ctrl_c();
            tokio::pin!(ctrl_c);
            // The first poll registers the handler.
            let early = tokio::select! {
                biased;
                result = &mut ctrl_c => Some(result),
                _ = std::future::ready(()) => None,
            };
            let result = match early {
                Some(result) => result,
                None => {
                    let _ = ready_tx.send(Ok(()));
                    ctrl_c.await
                }
            };
            match result {
                Ok(()) => leave_on_interrupt(),
                Err(e) => {
                    let _ = ready_tx.send(Err(e));
                }
            }
        })
    });

    ready_rx
        .recv()
        .unwrap_or_else(|_| Err(std::io::Error::other("interrupt handler thread stopped")))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(code) => return code,
    };

    if let Err(e) = install_interrupt_handler() {
        warn!("could not install the interrupt handler: {e}");
    }

    match run(&args) {
        Ok(end) => {
            info!("done: {end:?}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
