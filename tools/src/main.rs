//! loan-desk: command-line front end for the loan interest desk.
//!
//! Usage:
//!   loan-desk                                        (interactive prompt)
//!   loan-desk --principal 1000 --days 30 --repayment 1100
//!   loan-desk --history --db loans.db
//!   loan-desk --ipc-mode --config desk.json

use anyhow::Result;
use loan_desk_core::{
    chart::{CompositionChart, ScatterDataset},
    config::DeskConfig,
    desk::{Calculation, LoanDesk},
    error::LoanError,
    report::{history_table, HistoryRow, ResultSummary},
};
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    GetState,
    Calculate {
        principal: String,
        days:      String,
        repayment: String,
    },
    ToggleHistory,
    Quit,
}

#[derive(serde::Serialize)]
struct UiState {
    record_count:    usize,
    history_visible: bool,
    /// Empty while the history panel is collapsed.
    history:         Vec<HistoryRow>,
    scatter:         ScatterDataset,
    last_result:     Option<ResultSummary>,
    composition:     Option<CompositionChart>,
    error:           Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut config = match find_arg(&args, "--config") {
        Some(path) => DeskConfig::load(path)?,
        None => DeskConfig::default(),
    };
    if let Some(db) = find_arg(&args, "--db") {
        config.db_path = db.to_string();
    }
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let show_history = args.iter().any(|a| a == "--history");

    let mut desk = LoanDesk::open(&config)?;

    let outcome = if ipc_mode {
        run_ipc_loop(&mut desk)
    } else if show_history {
        print_history(&desk)
    } else if let Some(principal) = find_arg(&args, "--principal") {
        let days = find_arg(&args, "--days").unwrap_or_default();
        let repayment = find_arg(&args, "--repayment").unwrap_or_default();
        run_once(&mut desk, principal, days, repayment)
    } else {
        run_interactive(&mut desk)
    };

    // Close on every exit path, then report the first failure.
    let closed = desk.close();
    outcome?;
    closed?;
    Ok(())
}

fn run_once(desk: &mut LoanDesk, principal: &str, days: &str, repayment: &str) -> Result<()> {
    match desk.calculate(principal, days, repayment) {
        Ok(calc) => {
            print_calculation(&calc);
            Ok(())
        }
        Err(e) if e.is_user_error() => anyhow::bail!("{}", e.user_message()),
        Err(e) => Err(e.into()),
    }
}

fn run_interactive(desk: &mut LoanDesk) -> Result<()> {
    println!("Loan Interest Desk");
    println!("  db:      {}", desk.store.path().unwrap_or(":memory:"));
    println!("  records: {}", desk.store.count()?);
    println!("Leave the principal empty to quit.");
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        let Some(principal) = prompt(&mut lines, "Principal: ")? else { break };
        if principal.trim().is_empty() {
            break;
        }
        let Some(days) = prompt(&mut lines, "Days: ")? else { break };
        let Some(repayment) = prompt(&mut lines, "Repayment: ")? else { break };

        match desk.calculate(&principal, &days, &repayment) {
            Ok(calc) => print_calculation(&calc),
            Err(e) if e.is_user_error() => println!("Error: {}", e.user_message()),
            Err(e) => return Err(e.into()),
        }
        println!();
    }
    Ok(())
}

fn prompt<B: BufRead>(lines: &mut io::Lines<B>, label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None), // EOF
    }
}

fn run_ipc_loop(desk: &mut LoanDesk) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();
    let mut last: Option<Calculation> = None;

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("ipc: unparseable command: {e}");
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
                stdout.flush()?;
                continue;
            }
        };

        let mut error = None;
        match cmd {
            IpcCommand::Quit => break,
            IpcCommand::GetState => {}
            IpcCommand::ToggleHistory => {
                desk.toggle_history();
            }
            IpcCommand::Calculate {
                principal,
                days,
                repayment,
            } => match desk.calculate(&principal, &days, &repayment) {
                Ok(calc) => last = Some(calc),
                Err(e) if e.is_user_error() => {
                    log::warn!("ipc: calculation rejected: {e}");
                    error = Some(e.user_message());
                }
                Err(e) => return Err(e.into()),
            },
        }

        let state = build_ui_state(desk, last.as_ref(), error)?;
        writeln!(stdout, "{}", serde_json::to_string(&state)?)?;
        stdout.flush()?;
    }
    Ok(())
}

fn build_ui_state(
    desk: &LoanDesk,
    last: Option<&Calculation>,
    error: Option<String>,
) -> Result<UiState, LoanError> {
    let view = desk.load_history()?;
    let visible = desk.history_visible();
    Ok(UiState {
        record_count: view.rows.len(),
        history_visible: visible,
        history: if visible { view.rows } else { Vec::new() },
        scatter: view.scatter,
        last_result: last.map(|c| c.summary.clone()),
        composition: last.map(|c| c.composition.clone()),
        error,
    })
}

fn print_calculation(calc: &Calculation) {
    println!("{}", calc.summary);
    println!();
    let c = &calc.composition;
    println!("=== CURRENT LOAN ===");
    for slice in [&c.principal, &c.interest] {
        println!("  {:<10} {:>6.1}%  (${})", slice.label, slice.percent, slice.absolute);
    }
    println!("  {}", c.duration_caption());
    println!();
    print_scatter(&calc.scatter);
}

fn print_scatter(scatter: &ScatterDataset) {
    if scatter.is_empty() {
        return;
    }
    println!("=== LOAN HISTORY ({} records) ===", scatter.points.len());
    if let (Some(lo), Some(hi)) = (scatter.min_rate, scatter.max_rate) {
        println!("  rate range: {lo:.2}% .. {hi:.2}%");
    }
}

fn print_history(desk: &LoanDesk) -> Result<()> {
    let view = desk.load_history()?;
    if view.rows.is_empty() {
        println!("(No calculations stored yet)");
        return Ok(());
    }
    println!("{}", history_table(&view.rows));
    println!();
    print_scatter(&view.scatter);
    Ok(())
}

fn find_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
