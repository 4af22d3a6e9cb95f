use crate::api::Backend;
use crate::errors::ClientError;
use crate::render::{self, Format};
use crate::runtime::EventLoop;
use controller::Action;
use controller::types::FileUpload;
use controller::state::View;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

const HELP: &str = "\
commands:
  issue <path>   issue a credential from a mock passport JSON file
  verify         prove the issued credential meets the age threshold
  stats          refresh system statistics
  show           print the whole screen
  help           this text
  quit           leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Issue(Option<PathBuf>),
    Verify,
    Stats,
    Show,
    Help,
    Quit,
}

impl ShellCommand {
    /// `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let mut words = line.split_whitespace();
        let Some(cmd) = words.next() else {
            return Ok(None);
        };

        let parsed = match cmd {
            "issue" => {
                // Paths may contain spaces; take the remainder of the line.
                let rest = line.trim_start()[cmd.len()..].trim();
                ShellCommand::Issue((!rest.is_empty()).then(|| PathBuf::from(rest)))
            }
            "verify" => ShellCommand::Verify,
            "stats" => ShellCommand::Stats,
            "show" => ShellCommand::Show,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => return Err(format!("unknown command {other:?}, try `help`")),
        };
        Ok(Some(parsed))
    }
}

pub async fn load_passport(path: &Path) -> Result<FileUpload, ClientError> {
    let bytes = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "passport.json".to_string());
    Ok(FileUpload::new(file_name, bytes))
}

/// Print whatever changed since `shown`, then remember the new view.
fn repaint<B: Backend + 'static>(shown: &mut View, ev: &EventLoop<B>, format: Format) {
    let next = &ev.state().view;
    for block in render::changes(shown, next, format) {
        println!("{block}");
    }
    *shown = next.clone();
}

pub async fn run_shell<B: Backend + 'static>(ev: &mut EventLoop<B>, format: Format) -> Result<(), ClientError> {
    println!("{HELP}");

    let mut shown = ev.state().view.clone();
    ev.dispatch(Action::Init);
    repaint(&mut shown, ev, format);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let pending = ev.in_flight() > 0;

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted");
                break;
            }
            applied = ev.next_completion(), if pending => {
                if applied {
                    repaint(&mut shown, ev, format);
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };

                let cmd = match ShellCommand::parse(&line) {
                    Ok(Some(cmd)) => cmd,
                    Ok(None) => continue,
                    Err(msg) => {
                        eprintln!("{msg}");
                        continue;
                    }
                };

                match cmd {
                    ShellCommand::Issue(path) => {
                        let file = match path {
                            Some(path) => match load_passport(&path).await {
                                Ok(file) => Some(file),
                                Err(e) => {
                                    warn!(path = %path.display(), error = %e, "could not read passport file");
                                    eprintln!("could not read {}: {e}", path.display());
                                    None
                                }
                            },
                            None => None,
                        };
                        ev.dispatch(Action::IssueRequested { file });
                    }
                    ShellCommand::Verify => ev.dispatch(Action::VerifyRequested),
                    ShellCommand::Stats => ev.dispatch(Action::StatsRequested),
                    ShellCommand::Show => {
                        println!("{}", render::full(&ev.state().view, format));
                        continue;
                    }
                    ShellCommand::Help => {
                        println!("{HELP}");
                        continue;
                    }
                    ShellCommand::Quit => break,
                }
                repaint(&mut shown, ev, format);
            }
        }
    }

    if ev.in_flight() > 0 {
        info!(pending = ev.in_flight(), "leaving with requests outstanding");
    }
    Ok(())
}

/// Run init, issuance, verification and a stats refresh back to back, settling each step.
///
/// Returns the final screen.
pub async fn run_demo<B: Backend + 'static>(
    ev: &mut EventLoop<B>,
    passport: &Path,
    format: Format,
) -> Result<String, ClientError> {
    let file = load_passport(passport).await?;

    ev.dispatch(Action::Init);
    ev.settle().await;

    ev.dispatch(Action::IssueRequested { file: Some(file) });
    ev.settle().await;

    if ev.state().credential_id().is_some() {
        ev.dispatch(Action::VerifyRequested);
        ev.settle().await;
    }

    ev.dispatch(Action::StatsRequested);
    ev.settle().await;

    Ok(render::full(&ev.state().view, format))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(ShellCommand::parse("   "), Ok(None));
        assert_eq!(ShellCommand::parse("verify"), Ok(Some(ShellCommand::Verify)));
        assert_eq!(ShellCommand::parse("exit"), Ok(Some(ShellCommand::Quit)));
        assert_eq!(ShellCommand::parse("issue"), Ok(Some(ShellCommand::Issue(None))));
        assert_eq!(
            ShellCommand::parse("  issue  my docs/passport.json "),
            Ok(Some(ShellCommand::Issue(Some(PathBuf::from("my docs/passport.json")))))
        );
        assert!(ShellCommand::parse("prove").is_err());
    }
}
