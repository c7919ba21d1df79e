//! Console rendition of the update notification panel.
//!
//! Lines typed on stdin stand in for the updater feed and the panel's close
//! control; every panel change pushed by the backend is printed as it
//! arrives.

pub mod command;
pub mod formatting;

use std::io::{BufRead, Write};
use std::thread;

use adtouch_bridge::{MessageFromBackend, MessageToBackend};
use tokio::sync::mpsc;

use crate::command::Command;

/// Writes every message the backend pushes to `out` until the backend drops
/// its sender.
fn render_backend_messages(
    mut rx: mpsc::Receiver<MessageFromBackend>,
    mut out: impl Write,
) -> std::io::Result<()> {
    while let Some(message) = rx.blocking_recv() {
        log::debug!("Got a message from backend: {message:?}");
        let text = match message {
            MessageFromBackend::PanelStateUpdate(panel) => formatting::format_panel(&panel),
            MessageFromBackend::VersionInfoResponse(versions) => {
                formatting::format_versions(&versions)
            }
            MessageFromBackend::ConfigurationResponse(config) => {
                formatting::format_config(&config)
            }
        };
        writeln!(out, "{text}")?;
        out.flush()?;
    }

    Ok(())
}

/// Parses console lines from `input` and forwards them to the backend until
/// `quit` or end of input. Malformed lines are reported and skipped.
fn forward_commands(
    input: impl BufRead,
    tx: &mpsc::Sender<MessageToBackend>,
) -> anyhow::Result<()> {
    for line in input.lines() {
        match Command::parse(&line?) {
            Ok(Command::Backend(message)) => tx.blocking_send(message)?,
            Ok(Command::Help) => println!("{}", command::HELP),
            Ok(Command::Quit) => break,
            Ok(Command::Nothing) => {}
            Err(error) => eprintln!("{error}"),
        }
    }

    Ok(())
}

pub fn run(
    rx: mpsc::Receiver<MessageFromBackend>,
    tx: mpsc::Sender<MessageToBackend>,
) -> anyhow::Result<()> {
    let renderer = thread::spawn(move || render_backend_messages(rx, std::io::stdout()));

    println!("{}", command::HELP);
    tx.blocking_send(MessageToBackend::PanelStateRequest)?;
    forward_commands(std::io::stdin().lock(), &tx)?;

    // Closing the bridge lets the backend drain and stop, which in turn ends
    // the renderer.
    drop(tx);
    renderer
        .join()
        .map_err(|_| anyhow::anyhow!("panel renderer panicked"))??;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use adtouch_bridge::{
        panel::PanelState,
        update::{OriginVersion, UpdateInstalled},
    };

    use super::*;

    #[test]
    fn forwards_valid_lines_until_quit() {
        let (tx, mut rx) = mpsc::channel(8);
        let input = Cursor::new(
            "available app AutodartsTouch update available!\n\
             reboot\n\
             \n\
             installed extension\n\
             close\n\
             quit\n\
             panel\n",
        );

        forward_commands(input, &tx).expect("commands should be forwarded");
        drop(tx);

        match rx.blocking_recv() {
            Some(MessageToBackend::UpdateAvailable(update)) => {
                assert_eq!(update.origin.as_str(), "app");
                assert_eq!(update.message, "AutodartsTouch update available!");
            }
            other => panic!("expected an update, got {other:?}"),
        }
        assert_eq!(
            rx.blocking_recv(),
            Some(MessageToBackend::UpdateInstalled(UpdateInstalled {
                origin: "extension".into(),
            }))
        );
        assert_eq!(rx.blocking_recv(), Some(MessageToBackend::DismissPanel));
        assert_eq!(rx.blocking_recv(), None);
    }

    #[test]
    fn closed_backend_stops_forwarding() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        let result = forward_commands(Cursor::new("close\n"), &tx);
        assert!(result.is_err());
    }

    #[test]
    fn renders_backend_messages_in_order() {
        let (tx, rx) = mpsc::channel(8);
        tx.blocking_send(MessageFromBackend::PanelStateUpdate(PanelState {
            visible: true,
            text: "A | B".to_string(),
        }))
        .expect("renderer channel should be open");
        tx.blocking_send(MessageFromBackend::PanelStateUpdate(PanelState::hidden()))
            .expect("renderer channel should be open");
        tx.blocking_send(MessageFromBackend::VersionInfoResponse(vec![OriginVersion {
            origin: "app".into(),
            latest: None,
        }]))
        .expect("renderer channel should be open");
        drop(tx);

        let mut out = Vec::new();
        render_backend_messages(rx, &mut out).expect("rendering should succeed");

        assert_eq!(
            String::from_utf8(out).expect("output should be utf-8"),
            "[update] A | B [x]\n[update] (hidden)\napp: Loading...\n"
        );
    }
}
