//! Top-level app state: the landing screen and the optional panel

use glam::Vec2;
use tokio::runtime::Handle;

use crate::core::config::AppConfig;
use crate::panel::FloatingPanel;

pub const APP_NAME: &str = "GH-X PRO";
pub const TAGLINE: &str = "The ultimate game hacking simulator.";

pub struct Shell {
    panel: Option<FloatingPanel>,
    runtime: Handle,
    config: AppConfig,
}

impl Shell {
    pub fn new(runtime: Handle, config: AppConfig) -> Self {
        Self {
            panel: None,
            runtime,
            config,
        }
    }

    /// Open the panel centred in `viewport`; no-op if it is already open
    pub fn launch(&mut self, viewport: Vec2) {
        if self.panel.is_some() {
            return;
        }
        tracing::info!("panel launched");
        self.panel = Some(FloatingPanel::new(self.runtime.clone(), &self.config, viewport));
    }

    /// Close the panel, dropping every view it owned
    pub fn close(&mut self) {
        if self.panel.take().is_some() {
            tracing::info!("panel closed");
        }
    }

    pub fn is_panel_visible(&self) -> bool {
        self.panel.is_some()
    }

    pub fn panel(&self) -> Option<&FloatingPanel> {
        self.panel.as_ref()
    }

    pub fn panel_mut(&mut self) -> Option<&mut FloatingPanel> {
        self.panel.as_mut()
    }

    /// Deliver pending timer events; call once per frame
    pub fn pump(&mut self) {
        if let Some(panel) = self.panel.as_mut() {
            panel.pump();
        }
    }

    /// True while something is waiting on a timer and needs repaints
    pub fn is_busy(&self) -> bool {
        self.panel.as_ref().is_some_and(FloatingPanel::is_busy)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
