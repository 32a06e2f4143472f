use anyhow::Result;

pub fn run(source: &str) -> Result<()> {
    println!("{}", format_clause(source)?);
    Ok(())
}

/// Canonical text of the clause in `source`.
fn format_clause(source: &str) -> Result<String> {
    let expr = sw_lang::parse_window(source)?;
    Ok(expr.spec().canonical_text())
}
