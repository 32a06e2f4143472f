use std::io::IsTerminal;
use std::process;

use anyhow::Result;

use sw_lang::{CheckError, CheckOptions, Severity};

fn print_diag(diag: &CheckError, color: bool) {
    let code = match diag.severity {
        Severity::Error => "\x1b[1;31m", // bold red
        Severity::Warning => "\x1b[1;38;5;208m", // bold orange
    };
    if color {
        eprintln!("{code}{diag}\x1b[0m");
    } else {
        eprintln!("{diag}");
    }
}

pub fn run(source: &str, options: &CheckOptions) -> Result<()> {
    let color = std::io::stderr().is_terminal();

    let expr = sw_lang::parse_window(source)?;
    let diags = sw_lang::check_window_with(&expr, options);
    tracing::info!(
        domain = "pipe",
        kind = %expr.spec().kind(),
        diagnostics = diags.len(),
        "window clause checked"
    );

    for diag in &diags {
        print_diag(diag, color);
    }
    eprintln!("{}", summary(&diags));

    if sw_lang::has_errors(&diags) {
        process::exit(1);
    }
    Ok(())
}

fn summary(diags: &[CheckError]) -> String {
    if diags.is_empty() {
        return "No issues found.".to_string();
    }
    let ec = diags.iter().filter(|d| d.severity == Severity::Error).count();
    let wc = diags.len() - ec;
    format!("{ec} error(s), {wc} warning(s)")
}
