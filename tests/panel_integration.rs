//! Integration tests for the shell and floating panel
//!
//! These tests verify teardown behaviour across component boundaries:
//! - Switching tabs discards the old view, including an in-flight run
//! - Closing the panel stops pending timers
//! - A scan through the panel yields well-formed results

use std::time::Duration;

use ghx_pro::core::config::AppConfig;
use ghx_pro::core::types::ResultId;
use ghx_pro::panel::{Tab, TabContent};
use ghx_pro::shell::Shell;
use glam::Vec2;
use tokio::runtime::Handle;

fn open_shell() -> Shell {
    let mut shell = Shell::new(Handle::current(), AppConfig::default());
    shell.launch(Vec2::new(1280.0, 800.0));
    shell
}

fn start_robux_run(shell: &mut Shell) {
    let panel = shell.panel_mut().unwrap();
    panel.select_tab(Tab::Robux);
    match panel.content_mut() {
        TabContent::Injector(view) => {
            view.username = "neo".into();
            assert!(view.generate());
        }
        TabContent::Scanner(_) => panic!("expected injector"),
    }
}

// ============================================================================
// Scanner Through The Panel
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_scan_via_panel() {
    let mut shell = open_shell();

    if let Some(TabContent::Scanner(view)) = shell.panel_mut().map(|p| p.content_mut()) {
        view.search_input = "1337".into();
        view.scan();
    }
    assert!(shell.is_busy());

    tokio::time::sleep(Duration::from_millis(1600)).await;
    shell.pump();
    assert!(!shell.is_busy());

    let Some(TabContent::Scanner(view)) = shell.panel_mut().map(|p| p.content_mut()) else {
        panic!("expected scanner");
    };
    let count = view.results().len();
    assert!((5..=14).contains(&count));
    assert!(view.results().iter().all(|r| r.value == 1337));
    assert!(view.results().iter().all(|r| r.address.len() == 10));

    view.toggle_freeze(ResultId(0));
    view.toggle_freeze(ResultId(0));
    assert!(!view.is_frozen(ResultId(0)));
}

// ============================================================================
// Teardown
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_tab_switch_discards_running_injection() {
    let mut shell = open_shell();
    start_robux_run(&mut shell);

    tokio::time::sleep(Duration::from_millis(2000)).await;
    shell.pump();

    let panel = shell.panel_mut().unwrap();
    panel.select_tab(Tab::Diamonds);
    assert!(!panel.is_busy());

    tokio::time::sleep(Duration::from_secs(15)).await;
    shell.pump();

    match shell.panel().unwrap().content() {
        TabContent::Injector(view) => {
            assert!(view.log().is_empty());
            assert_eq!(view.username, "");
        }
        TabContent::Scanner(_) => panic!("expected injector"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_switching_back_starts_fresh() {
    let mut shell = open_shell();
    start_robux_run(&mut shell);

    let panel = shell.panel_mut().unwrap();
    panel.select_tab(Tab::Scanner);
    panel.select_tab(Tab::Robux);

    tokio::time::sleep(Duration::from_secs(15)).await;
    shell.pump();

    match shell.panel().unwrap().content() {
        TabContent::Injector(view) => {
            assert!(view.log().is_empty());
            assert!(!view.is_generating());
        }
        TabContent::Scanner(_) => panic!("expected injector"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_close_mid_run_then_relaunch() {
    let mut shell = open_shell();
    start_robux_run(&mut shell);

    tokio::time::sleep(Duration::from_millis(1000)).await;
    shell.close();
    assert!(!shell.is_busy());

    tokio::time::sleep(Duration::from_secs(15)).await;
    shell.pump();

    shell.launch(Vec2::new(1280.0, 800.0));
    let panel = shell.panel().unwrap();
    assert_eq!(panel.active_tab(), Tab::Scanner);
    assert!(!panel.is_busy());
}

// ============================================================================
// Dragging
// ============================================================================

#[tokio::test]
async fn test_drag_then_tab_switch_keeps_position() {
    let mut shell = open_shell();
    let panel = shell.panel_mut().unwrap();
    let start = panel.position();

    panel.pointer_down(start + Vec2::new(10.0, 10.0), false);
    panel.pointer_move(start + Vec2::new(110.0, 60.0));
    panel.pointer_up();

    panel.select_tab(Tab::Robux);
    assert_eq!(panel.position(), start + Vec2::new(100.0, 50.0));
}
