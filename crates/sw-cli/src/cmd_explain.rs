use anyhow::Result;

use sw_lang::{CheckOptions, has_errors};

pub fn run(source: &str, options: &CheckOptions) -> Result<()> {
    print!("{}", render(source, options)?);
    Ok(())
}

/// Explanation plus lowered descriptor. Refuses clauses with check errors.
fn render(source: &str, options: &CheckOptions) -> Result<String> {
    let expr = sw_lang::parse_window(source)?;

    let diags = sw_lang::check_window_with(&expr, options);
    if has_errors(&diags) {
        let msgs: Vec<String> = diags.iter().map(|d| d.to_string()).collect();
        anyhow::bail!("check errors:\n{}", msgs.join("\n"));
    }

    let explanation = sw_lang::explain_window(&expr)?;
    let descriptor = sw_core::lower_window(expr.spec())?;
    tracing::debug!(domain = "pipe", %descriptor, "window clause lowered");

    let mut out = explanation.to_string();
    out.push_str(&format!("  Lowered: {descriptor}\n"));
    for diag in diags {
        out.push_str(&format!("  Note: {diag}\n"));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_hopping() {
        let out = render(
            "HOPPING ( SIZE 6 SECONDS , ADVANCE BY 2 SECONDS )",
            &CheckOptions::default(),
        )
        .unwrap();
        let expected = "\
Window: HOPPING (at 1:1)
  Clause: HOPPING ( SIZE 6 SECONDS , ADVANCE BY 2 SECONDS )
  Size: 6000ms
  Advance: 2000ms
  Windows per record: up to 3
  Lowered: TimeWindows(size=6000ms, advance=2000ms)
";
        assert_eq!(out, expected);
    }

    #[test]
    fn render_includes_warnings() {
        let out = render(
            "TUMBLING ( SIZE 1 MINUTE )",
            &CheckOptions::default(),
        )
        .unwrap();
        assert!(out.contains("Lowered: TimeWindows(size=60000ms, advance=60000ms)"));

        let out = render(
            "HOPPING ( SIZE 5 SECONDS , ADVANCE BY 2 SECONDS )",
            &CheckOptions::default(),
        )
        .unwrap();
        assert!(out.contains("  Note: warning at 1:1:"), "{out}");
    }

    #[test]
    fn render_rejects_invalid() {
        let err = render("SESSION ( 0 SECONDS )", &CheckOptions::default()).unwrap_err();
        assert!(err.to_string().contains("must be greater than zero"), "{err}");
    }
}
