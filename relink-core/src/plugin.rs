use tracing::{error, info};

use crate::config::{ConfigStore, RecoverConfig, ScanOptions};
use crate::error::Result;
use crate::report::ScanReport;
use crate::repo_factory::SessionFactory;
use crate::scan::recover;

/// Host-side lifecycle: load settings, honor the run-once switch, persist.
pub struct RecoverPlugin<S, H> {
    store: S,
    history: H,
    config: RecoverConfig,
    last_report: Option<ScanReport>,
}

impl<S: ConfigStore, H: SessionFactory> RecoverPlugin<S, H> {
    /// Loads the config. When `onlyonce` is set the recovery runs right away
    /// (enabled or not), then the switch is cleared and saved even if the run
    /// failed.
    pub fn init(store: S, history: H) -> Result<Self> {
        let config = store.load()?;
        let mut plugin = Self {
            store,
            history,
            config,
            last_report: None,
        };

        if plugin.config.onlyonce {
            info!("recover origin media: running once now");
            match plugin.run() {
                Ok(report) => plugin.last_report = Some(report),
                Err(e) => error!("one-shot recovery failed: {e}"),
            }
            plugin.config.onlyonce = false;
            plugin.store.save(&plugin.config)?;
        }
        Ok(plugin)
    }

    /// One scan with the current settings. The history session lives only for
    /// the duration of the call.
    pub fn run(&self) -> Result<ScanReport> {
        let session = self.history.session()?;
        recover(&*session, &ScanOptions::from(&self.config))
    }

    pub fn state(&self) -> bool {
        self.config.enabled
    }

    pub fn config(&self) -> &RecoverConfig {
        &self.config
    }

    /// Report of the run-once pass performed by `init`, if any.
    pub fn last_report(&self) -> Option<&ScanReport> {
        self.last_report.as_ref()
    }

    pub fn disable(&mut self) -> Result<()> {
        self.config.enabled = false;
        self.store.save(&self.config)
    }

    pub fn update(&mut self, config: RecoverConfig) -> Result<()> {
        self.config = config;
        self.store.save(&self.config)
    }
}
