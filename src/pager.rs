use std::io::{self, Write};
use std::process::{Command, Stdio};

/// Pager for PGN text: the configured command, then `$PAGER`, then `less`.
pub fn choose_pager(configured: Option<&str>, env_pager: Option<&str>) -> String {
    [configured, env_pager]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|cmd| !cmd.is_empty())
        .unwrap_or("less")
        .to_string()
}

pub fn detect_pager(configured: Option<&str>) -> String {
    let env_pager = std::env::var("PAGER").ok();
    choose_pager(configured, env_pager.as_deref())
}

/// Feed `content` to the pager on stdin and wait for it to exit.
pub fn open_pager(content: &str, pager_cmd: &str) -> io::Result<()> {
    let mut child = Command::new("sh")
        .args(["-c", pager_cmd])
        .stdin(Stdio::piped())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        // A pager quit early closes the pipe; that is not an error here.
        let _ = stdin.write_all(content.as_bytes());
        let _ = stdin.write_all(b"\n");
    }

    child.wait()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_pager_wins() {
        assert_eq!(choose_pager(Some("bat -l pgn"), Some("more")), "bat -l pgn");
    }

    #[test]
    fn env_pager_when_not_configured() {
        assert_eq!(choose_pager(None, Some("more")), "more");
    }

    #[test]
    fn blank_values_are_skipped() {
        assert_eq!(choose_pager(Some("  "), Some("")), "less");
        assert_eq!(choose_pager(Some(""), Some("most")), "most");
    }

    #[test]
    fn falls_back_to_less() {
        assert_eq!(choose_pager(None, None), "less");
    }

    #[test]
    fn cat_pager_consumes_content() {
        open_pager("1. e4 e5 2. Nf3 Nc6", "cat > /dev/null").unwrap();
    }
}
