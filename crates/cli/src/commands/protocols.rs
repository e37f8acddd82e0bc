use super::Terminal;
use std::io::Write;

pub fn run(terminal: &Terminal, out: &mut impl Write) -> anyhow::Result<()> {
    let source = match &terminal.config.protocol_file {
        Some(path) => path.display().to_string(),
        None => "built-in".to_string(),
    };
    writeln!(out, "Authorization protocols ({}):", source)?;

    for (label, digits) in terminal.protocols.iter() {
        writeln!(out, "  {:<48} {}-digit code", label, digits)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{output, terminal};

    #[test]
    fn test_lists_builtin_protocols() {
        let mut buf = Vec::new();
        run(&terminal(), &mut buf).unwrap();

        let text = output(buf);
        assert!(text.starts_with("Authorization protocols (built-in):"));
        assert_eq!(text.lines().count(), 9);
        assert!(text.contains("POS Terminal -101.8 (PIN-LESS transaction)"));
        assert!(text.contains("4-digit code"));
    }
}
