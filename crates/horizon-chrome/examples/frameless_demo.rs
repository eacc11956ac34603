//! A frameless winit window with chrome behavior.
//!
//! Drag the edges to resize, drag the top 38 pixels to move, double-click
//! them to maximize. F11 toggles maximize (fullscreen on macOS), `M`
//! minimizes and Escape closes.
//!
//! Nothing is drawn; the clip the renderer should apply is logged instead.
//! Set `HORIZON_CHROME_CONFIG` to a TOML file to override the defaults.
//!
//! Run with: cargo run -p horizon-chrome --example frameless_demo

use std::error::Error;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowId;

use horizon_chrome::{
    ChromeConfig, PointerTranslator, Size, WindowAction, WindowChrome, WinitWindow,
    frameless_window_attributes,
};

struct DemoApp {
    config: ChromeConfig,
    chrome: Option<WindowChrome<WinitWindow>>,
    translator: PointerTranslator,
    close_requested: Arc<AtomicBool>,
}

impl DemoApp {
    fn new(config: ChromeConfig) -> Self {
        let translator = PointerTranslator::new(config.double_click_interval());
        Self {
            config,
            chrome: None,
            translator,
            close_requested: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl ApplicationHandler for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.chrome.is_some() {
            return;
        }

        let attributes = frameless_window_attributes("Horizon Chrome", Size::new(800.0, 600.0));
        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                tracing::error!(%err, "failed to create window");
                event_loop.exit();
                return;
            }
        };

        let chrome = WindowChrome::new(WinitWindow::new(Arc::clone(&window)), self.config.clone());

        let cursor_window = Arc::clone(&window);
        chrome.cursor_hint_changed().connect(move |hint| {
            cursor_window.set_cursor(hint.to_cursor_icon());
        });
        chrome.clip_changed().connect(|clip| match clip {
            Some(clip) => tracing::info!(
                width = clip.rect.width,
                height = clip.rect.height,
                radius = clip.radius,
                "clip content to rounded rect"
            ),
            None => tracing::info!("content unclipped"),
        });
        chrome.state_changed.connect(|(from, to)| {
            tracing::info!(?from, ?to, "window state changed");
        });
        let close_requested = Arc::clone(&self.close_requested);
        chrome.close_requested.connect(move |_| {
            close_requested.store(true, Ordering::SeqCst);
        });

        self.chrome = Some(chrome);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(chrome) = self.chrome.as_mut() else {
            return;
        };

        match &event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
                return;
            }
            WindowEvent::Moved(_) => {
                chrome.window_mut().observe_moved();
                chrome.sync_window_state();
            }
            WindowEvent::Resized(_) => {
                chrome.sync_window_state();
                chrome.notify_bounds_changed();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => match logical_key {
                Key::Named(NamedKey::Escape) => chrome.perform(WindowAction::Close),
                Key::Named(NamedKey::F11) => chrome.perform(WindowAction::ToggleMaximize),
                Key::Character(c) if c.as_str().eq_ignore_ascii_case("m") => {
                    chrome.perform(WindowAction::Minimize)
                }
                _ => {}
            },
            _ => {}
        }

        if let Some(pointer) = self.translator.translate(&event, chrome.window()) {
            chrome.handle_pointer(&pointer);
        }

        if self.close_requested.load(Ordering::SeqCst) {
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(chrome) = self.chrome.as_mut() {
            chrome.run_idle_tasks();
        }
    }
}

fn load_config() -> Result<ChromeConfig, Box<dyn Error>> {
    match std::env::var_os("HORIZON_CHROME_CONFIG") {
        Some(path) => {
            let source = std::fs::read_to_string(&path)?;
            Ok(ChromeConfig::from_toml_str(&source)?)
        }
        None => Ok(ChromeConfig::new()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,horizon_chrome=debug".into()),
        )
        .init();

    let config = load_config()?;
    tracing::info!(platform = ?config.platform(), "starting frameless demo");

    let event_loop = EventLoop::new()?;
    let mut app = DemoApp::new(config);
    event_loop.run_app(&mut app)?;
    Ok(())
}
