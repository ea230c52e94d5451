use std::io;
use std::process::{Command, Stdio};

/// Command that hands a URL to the platform's default handler.
pub fn opener_command(url: &str) -> Command {
    let mut command = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    } else {
        Command::new("xdg-open")
    };
    command.arg(url);
    command
}

/// Launches the system player for `url` without waiting for it.
pub fn play(url: &str) -> io::Result<()> {
    opener_command(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    tracing::info!(%url, "launched player");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_the_last_argument() {
        let command = opener_command("https://www.youtube.com/watch?v=abc123");
        let last = command.get_args().last().unwrap();
        assert_eq!(last, "https://www.youtube.com/watch?v=abc123");
    }
}
