use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use sunborn_core::{AddressSet, Effect, Msg};
use sunborn_engine::{
    EngineCommander, EngineConfig, EngineEvent, EngineHandle, FetchSettings, LoadError,
};
use sunborn_logging::{sunborn_debug, sunborn_error, sunborn_info, sunborn_warn};

use crate::app::AppEvent;
use crate::config::AppConfig;

pub struct EffectRunner {
    engine: EngineCommander,
}

impl EffectRunner {
    pub fn new(config: &AppConfig, event_tx: mpsc::Sender<AppEvent>) -> Self {
        let engine = EngineHandle::new(EngineConfig {
            sources: config.sources(),
            fetch: FetchSettings::default(),
            reveal_delay: config.reveal_delay(),
        });
        let commander = engine.commander();
        spawn_event_loop(engine, event_tx);
        Self { engine: commander }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadAllowlists => {
                    sunborn_info!("LoadAllowlists requested");
                    self.engine.load_allowlists();
                }
                Effect::ScheduleResolve { check_id } => {
                    sunborn_debug!("ScheduleResolve check_id={}", check_id);
                    self.engine.schedule_resolve(check_id);
                }
            }
        }
    }
}

fn spawn_event_loop(engine: EngineHandle, event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || loop {
        if let Some(event) = engine.try_recv() {
            let msg = match event {
                EngineEvent::AllowlistsLoaded { a, b } => map_loaded(a, b),
                EngineEvent::CheckResolved { check_id } => Msg::CheckResolved { check_id },
            };
            if event_tx.send(AppEvent::Core(msg)).is_err() {
                return;
            }
        } else {
            thread::sleep(Duration::from_millis(20));
        }
    });
}

/// Both sides failing is a load failure; a single failing side degrades to
/// an empty set so the checker stays usable.
fn map_loaded(a: Result<String, LoadError>, b: Result<String, LoadError>) -> Msg {
    if let (Err(err_a), Err(err_b)) = (&a, &b) {
        sunborn_error!("both allowlists failed to load: A: {} B: {}", err_a, err_b);
        return Msg::ListsFailed;
    }
    Msg::ListsLoaded {
        a: parse_or_empty(a, "A"),
        b: parse_or_empty(b, "B"),
    }
}

fn parse_or_empty(result: Result<String, LoadError>, label: &str) -> AddressSet {
    match result {
        Ok(text) => {
            let set = AddressSet::parse(&text);
            sunborn_info!("allowlist {} ready with {} addresses", label, set.len());
            set
        }
        Err(err) => {
            sunborn_warn!(
                "allowlist {} failed to load, degrading to empty set: {}",
                label,
                err
            );
            AddressSet::default()
        }
    }
}
