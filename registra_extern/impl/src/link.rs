use std::{
    io::Write,
    process::{Command, Stdio},
    thread::JoinHandle,
};

use registra_extern_contracts::link::LinkOpenerService;
use registra_utils::trace_instrument;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy)]
pub struct LinkOpenerServiceImpl {
    config: LinkOpenerServiceConfig,
}

impl LinkOpenerServiceImpl {
    pub fn new(config: LinkOpenerServiceConfig) -> Self {
        Self { config }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOpenerServiceConfig {
    /// Hand the link to the desktop's default browser.
    Browser,
    /// Write the link to stdout.
    Print,
}

impl LinkOpenerService for LinkOpenerServiceImpl {
    #[trace_instrument(skip(self, link))]
    fn open(&self, link: &str) {
        match self.config {
            LinkOpenerServiceConfig::Browser => {
                // The browser is a separate process, so the new page has no
                // opener and no referrer.
                match spawn_reaped(browser_command(link)) {
                    Ok(_) => info!("Opened chat link in browser"),
                    Err(err) => warn!("Failed to launch browser: {err}"),
                }
            }
            LinkOpenerServiceConfig::Print => {
                let mut stdout = std::io::stdout().lock();
                if let Err(err) = writeln!(stdout, "{link}") {
                    warn!("Failed to print chat link: {err}");
                }
            }
        }
    }
}

fn browser_command(link: &str) -> Command {
    let mut command = if cfg!(target_os = "windows") {
        let mut command = Command::new("rundll32");
        command.arg("url.dll,FileProtocolHandler");
        command
    } else if cfg!(target_os = "macos") {
        Command::new("open")
    } else {
        Command::new("xdg-open")
    };

    command
        .arg(link)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    command
}

/// Spawn `command` and wait for it on a background thread, so the caller is
/// never blocked and no zombie is left behind.
fn spawn_reaped(mut command: Command) -> std::io::Result<JoinHandle<()>> {
    let mut child = command.spawn()?;
    let pid = child.id();

    Ok(std::thread::spawn(move || match child.wait() {
        Ok(status) if status.success() => debug!(pid, "Browser opener exited"),
        Ok(status) => warn!(pid, %status, "Browser opener failed"),
        Err(err) => warn!(pid, "Failed to wait for browser opener: {err}"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_command_passes_link_as_single_argument() {
        // Arrange
        let link = "https://wa.me/6281200000000?text=a%20b%26c";

        // Act
        let command = browser_command(link);

        // Assert
        let args = command.get_args().collect::<Vec<_>>();
        assert_eq!(args.last().copied(), Some(std::ffi::OsStr::new(link)));
        if cfg!(target_os = "linux") {
            assert_eq!(command.get_program(), "xdg-open");
            assert_eq!(args.len(), 1);
        }
    }

    #[test]
    fn print_does_not_panic() {
        let sut = LinkOpenerServiceImpl::new(LinkOpenerServiceConfig::Print);
        sut.open("https://wa.me/6281200000000?text=hi");
    }

    #[cfg(unix)]
    #[test]
    fn spawn_reaped_waits_for_child() {
        for program in ["true", "false"] {
            let handle = spawn_reaped(Command::new(program)).unwrap();
            handle.join().unwrap();
        }
    }

    #[test]
    fn spawn_reaped_missing_program() {
        let result = spawn_reaped(Command::new("registra-no-such-browser-opener"));
        assert!(result.is_err());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn browser_opener_leaves_no_zombies() {
        use std::{os::unix::fs::PermissionsExt, time::Duration};

        // Arrange
        let dir = std::env::temp_dir().join(format!("registra-opener-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let opener = dir.join("xdg-open");
        std::fs::write(&opener, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&opener, std::fs::Permissions::from_mode(0o755)).unwrap();
        let path = std::env::var_os("PATH").unwrap_or_default();
        let path = std::env::join_paths(
            std::iter::once(dir.clone()).chain(std::env::split_paths(&path)),
        )
        .unwrap();
        std::env::set_var("PATH", path);

        let sut = LinkOpenerServiceImpl::new(LinkOpenerServiceConfig::Browser);

        // Act
        for _ in 0..3 {
            sut.open("https://wa.me/6281200000000?text=hi");
        }

        // Assert
        let mut zombies = usize::MAX;
        for _ in 0..50 {
            zombies = zombie_children();
            if zombies == 0 {
                break;
            }
            std::thread::sleep(Duration::from_millis(100));
        }
        std::fs::remove_dir_all(&dir).unwrap();
        assert_eq!(zombies, 0);
    }

    /// Children of this process in state `Z`, read from `/proc/<pid>/stat`.
    #[cfg(target_os = "linux")]
    fn zombie_children() -> usize {
        let parent = std::process::id().to_string();
        std::fs::read_dir("/proc")
            .unwrap()
            .filter_map(|entry| std::fs::read_to_string(entry.ok()?.path().join("stat")).ok())
            .filter(|stat| {
                // the command name may contain spaces, fields resume after the last `)`
                let Some((_, fields)) = stat.rsplit_once(')') else {
                    return false;
                };
                let mut fields = fields.split_whitespace();
                fields.next() == Some("Z") && fields.next() == Some(parent.as_str())
            })
            .count()
    }
}
