//! Floating panel state
//!
//! The panel owns its screen position, the drag anchor while a drag is in
//! progress, the active tab and the view that tab shows. Only one view is
//! alive at a time: switching tabs drops the old one, which cancels any
//! sequence it still had running.

use glam::Vec2;
use tokio::runtime::Handle;

use crate::core::config::AppConfig;
use crate::core::types::PanelSize;
use crate::injector::{Currency, InjectorView};
use crate::scanner::ScannerView;

/// Title shown in the panel header
pub const PANEL_TITLE: &str = "GH-X PRO v9.1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Scanner,
    Robux,
    Diamonds,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Scanner, Tab::Robux, Tab::Diamonds];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Scanner => "Scanner",
            Tab::Robux => "Roblox",
            Tab::Diamonds => "Free Fire",
        }
    }
}

/// The view behind the active tab
pub enum TabContent {
    Scanner(ScannerView),
    Injector(InjectorView),
}

impl TabContent {
    fn build(tab: Tab, runtime: &Handle, config: &AppConfig) -> Self {
        match tab {
            Tab::Scanner => TabContent::Scanner(ScannerView::new(
                runtime.clone(),
                &config.scanner,
                &config.timing,
            )),
            Tab::Robux => TabContent::Injector(InjectorView::new(
                Currency::Robux,
                runtime.clone(),
                &config.injector,
                &config.timing,
            )),
            Tab::Diamonds => TabContent::Injector(InjectorView::new(
                Currency::Diamonds,
                runtime.clone(),
                &config.injector,
                &config.timing,
            )),
        }
    }

    fn pump(&mut self) {
        match self {
            TabContent::Scanner(view) => view.pump(),
            TabContent::Injector(view) => view.pump(),
        }
    }

    fn is_busy(&self) -> bool {
        match self {
            TabContent::Scanner(view) => view.is_scanning(),
            TabContent::Injector(view) => view.is_generating(),
        }
    }
}

pub struct FloatingPanel {
    /// Top-left corner in screen coordinates
    position: Vec2,
    size: PanelSize,
    /// Pointer offset from `position` while dragging
    drag_anchor: Option<Vec2>,
    active_tab: Tab,
    content: TabContent,
    runtime: Handle,
    config: AppConfig,
}

impl FloatingPanel {
    /// Open a panel on the scanner tab, centred in `viewport`
    pub fn new(runtime: Handle, config: &AppConfig, viewport: Vec2) -> Self {
        let size = PanelSize::default();
        let position = centered_position(viewport, size);
        let content = TabContent::build(Tab::Scanner, &runtime, config);

        Self {
            position,
            size,
            drag_anchor: None,
            active_tab: Tab::Scanner,
            content,
            runtime,
            config: config.clone(),
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn size(&self) -> PanelSize {
        self.size
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Pointer pressed on the header
    ///
    /// Presses that land on a header button never start a drag.
    pub fn pointer_down(&mut self, pointer: Vec2, over_button: bool) {
        if over_button {
            return;
        }
        self.drag_anchor = Some(pointer - self.position);
    }

    /// Pointer moved anywhere on screen
    ///
    /// The panel is not clamped and can be dragged off-screen.
    pub fn pointer_move(&mut self, pointer: Vec2) {
        if let Some(anchor) = self.drag_anchor {
            self.position = pointer - anchor;
        }
    }

    pub fn pointer_up(&mut self) {
        self.drag_anchor = None;
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Switch tabs; the previous tab's state is discarded
    pub fn select_tab(&mut self, tab: Tab) {
        if tab == self.active_tab {
            return;
        }
        tracing::debug!(from = ?self.active_tab, to = ?tab, "tab switched");
        self.active_tab = tab;
        self.content = TabContent::build(tab, &self.runtime, &self.config);
    }

    pub fn content(&self) -> &TabContent {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut TabContent {
        &mut self.content
    }

    /// Deliver pending timer events to the active view
    pub fn pump(&mut self) {
        self.content.pump();
    }

    /// True while the active view is waiting on a timer
    pub fn is_busy(&self) -> bool {
        self.content.is_busy()
    }
}

/// Top-left corner that centres a panel of `size` in `viewport`
pub fn centered_position(viewport: Vec2, size: PanelSize) -> Vec2 {
    Vec2::new(
        viewport.x / 2.0 - size.width / 2.0,
        viewport.y / 2.0 - size.height / 2.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> FloatingPanel {
        FloatingPanel::new(Handle::current(), &AppConfig::default(), Vec2::new(1280.0, 800.0))
    }

    #[test]
    fn test_centered_position() {
        let pos = centered_position(Vec2::new(1000.0, 800.0), PanelSize::new(400.0, 600.0));
        assert_eq!(pos, Vec2::new(300.0, 100.0));
    }

    #[tokio::test]
    async fn test_opens_centered_on_scanner() {
        let panel = panel();
        assert_eq!(panel.position(), Vec2::new(416.0, 100.0));
        assert_eq!(panel.active_tab(), Tab::Scanner);
        assert!(matches!(panel.content(), TabContent::Scanner(_)));
    }

    #[tokio::test]
    async fn test_drag_follows_pointer_delta() {
        let mut panel = panel();
        let start = panel.position();

        panel.pointer_down(start + Vec2::new(20.0, 10.0), false);
        assert!(panel.is_dragging());

        panel.pointer_move(start + Vec2::new(70.0, -40.0));
        assert_eq!(panel.position(), start + Vec2::new(50.0, -50.0));

        panel.pointer_up();
        panel.pointer_move(Vec2::new(0.0, 0.0));
        assert_eq!(panel.position(), start + Vec2::new(50.0, -50.0));
    }

    #[tokio::test]
    async fn test_drag_is_unclamped() {
        let mut panel = panel();
        let start = panel.position();

        panel.pointer_down(start, false);
        panel.pointer_move(Vec2::new(-5000.0, 9000.0));
        assert_eq!(panel.position(), Vec2::new(-5000.0, 9000.0));
    }

    #[tokio::test]
    async fn test_press_on_button_does_not_drag() {
        let mut panel = panel();
        let start = panel.position();

        panel.pointer_down(start + Vec2::new(5.0, 5.0), true);
        assert!(!panel.is_dragging());

        panel.pointer_move(Vec2::new(10.0, 10.0));
        assert_eq!(panel.position(), start);
    }

    #[tokio::test]
    async fn test_select_tab_swaps_content() {
        let mut panel = panel();

        panel.select_tab(Tab::Diamonds);
        assert_eq!(panel.active_tab(), Tab::Diamonds);
        match panel.content() {
            TabContent::Injector(view) => assert_eq!(view.currency(), Currency::Diamonds),
            TabContent::Scanner(_) => panic!("expected injector"),
        }
    }

    #[tokio::test]
    async fn test_reselecting_active_tab_keeps_state() {
        let mut panel = panel();
        if let TabContent::Scanner(view) = panel.content_mut() {
            view.search_input = "77".into();
        }

        panel.select_tab(Tab::Scanner);

        match panel.content() {
            TabContent::Scanner(view) => assert_eq!(view.search_input, "77"),
            TabContent::Injector(_) => panic!("expected scanner"),
        }
    }

    #[test]
    fn test_tab_labels() {
        let labels: Vec<_> = Tab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["Scanner", "Roblox", "Free Fire"]);
    }
}
