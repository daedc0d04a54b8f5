use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::loader::{load_allowlists, AllowlistSources};
use crate::{CheckId, EngineEvent};

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub sources: AllowlistSources,
    pub fetch: FetchSettings,
    /// Cosmetic delay before a scheduled check resolves; zero disables it.
    pub reveal_delay: Duration,
}

enum EngineCommand {
    LoadAllowlists,
    ScheduleResolve { check_id: CheckId },
}

/// Cloneable command half of the engine, for the effect-dispatch side.
#[derive(Clone)]
pub struct EngineCommander {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineCommander {
    pub fn load_allowlists(&self) {
        let _ = self.cmd_tx.send(EngineCommand::LoadAllowlists);
    }

    pub fn schedule_resolve(&self, check_id: CheckId) {
        let _ = self.cmd_tx.send(EngineCommand::ScheduleResolve { check_id });
    }
}

pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let fetcher = Arc::new(ReqwestFetcher::new(config.fetch.clone()));
        let config = Arc::new(config);

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let config = config.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), &config, command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn commander(&self) -> EngineCommander {
        EngineCommander {
            cmd_tx: self.cmd_tx.clone(),
        }
    }

    pub fn load_allowlists(&self) {
        let _ = self.cmd_tx.send(EngineCommand::LoadAllowlists);
    }

    pub fn schedule_resolve(&self, check_id: CheckId) {
        let _ = self.cmd_tx.send(EngineCommand::ScheduleResolve { check_id });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    fetcher: &dyn Fetcher,
    config: &EngineConfig,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::LoadAllowlists => {
            let (a, b) = load_allowlists(fetcher, &config.sources).await;
            let _ = event_tx.send(EngineEvent::AllowlistsLoaded { a, b });
        }
        EngineCommand::ScheduleResolve { check_id } => {
            if !config.reveal_delay.is_zero() {
                tokio::time::sleep(config.reveal_delay).await;
            }
            let _ = event_tx.send(EngineEvent::CheckResolved { check_id });
        }
    }
}
