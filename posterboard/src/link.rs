use std::io;
use std::process::{Command, Stdio};

use tracing::debug;

/// Program and leading arguments that hand a URL to the desktop
pub fn opener() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "windows") {
        ("cmd", &["/C", "start", ""])
    } else if cfg!(target_os = "macos") {
        ("open", &[])
    } else {
        ("xdg-open", &[])
    }
}

/// Open `url` in the user's browser without waiting for it
pub fn open(url: &str) -> io::Result<()> {
    let (program, args) = opener();
    debug!(program, url, "opening link");
    Command::new(program)
        .args(args)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(target_os = "linux")]
    fn test_linux_uses_xdg_open() {
        assert_eq!(opener(), ("xdg-open", &[][..]));
    }
}
