//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Queues `cmd`; the error is the user-facing reason it could not be queued.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), String> {
    let cmd_name = cmd.name();
    tracing::debug!(command = cmd_name, "queueing ui->backend command");
    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "ui->backend command queue is full");
            Err("UI command queue is full; please retry".to_string())
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd_name, "ui->backend command queue disconnected");
            Err("Backend worker is not running (possible startup failure)".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use client_core::FormInputSet;
    use crossbeam_channel::bounded;

    use super::*;

    #[test]
    fn queues_command_when_backend_is_listening() {
        let (tx, rx) = bounded(1);
        dispatch_backend_command(&tx, BackendCommand::LoadExamples).expect("queued");
        assert!(matches!(rx.try_recv(), Ok(BackendCommand::LoadExamples)));
    }

    #[test]
    fn reports_full_queue() {
        let (tx, _rx) = bounded(1);
        dispatch_backend_command(&tx, BackendCommand::LoadExamples).expect("queued");
        let err = dispatch_backend_command(
            &tx,
            BackendCommand::Generate {
                input: FormInputSet::new(),
            },
        )
        .unwrap_err();
        assert!(err.contains("full"));
    }

    #[test]
    fn reports_stopped_backend() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let err = dispatch_backend_command(&tx, BackendCommand::LoadExamples).unwrap_err();
        assert!(err.contains("not running"));
    }
}
