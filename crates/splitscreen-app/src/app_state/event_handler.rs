//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, ModifiersState, NamedKey};
use winit::window::WindowId;

use splitscreen_common::{Action, InteractionKind};

use super::core::SplitscreenApp;

impl ApplicationHandler for SplitscreenApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_layout();
                }
            }

            WindowEvent::CursorMoved { .. } => {
                self.dispatch(Action::Interaction(InteractionKind::PointerMove));
            }

            WindowEvent::MouseWheel { .. } => {
                self.dispatch(Action::Interaction(InteractionKind::Scroll));
            }

            WindowEvent::Touch(_) => {
                self.dispatch(Action::Interaction(InteractionKind::Touch));
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                ..
            } => {
                self.dispatch(Action::Interaction(InteractionKind::Click));
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            self.shutdown();
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

impl SplitscreenApp {
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        if event.state != ElementState::Pressed {
            return;
        }
        let action = key_action(&event.logical_key, self.modifiers);
        self.dispatch(action);
    }
}

/// Map a key press to an action. Unbound keys still count as activity.
pub(super) fn key_action(key: &Key, mods: ModifiersState) -> Action {
    let command = mods.super_key() || mods.control_key();
    match key {
        Key::Named(NamedKey::Escape) => Action::ToggleMenu,
        Key::Character(c) if command && c.eq_ignore_ascii_case("q") => Action::Quit,
        Key::Character(c) if !command => match c.as_str() {
            "m" | "M" => Action::ToggleMenu,
            "1" | "2" | "3" | "4" => c
                .parse()
                .map(Action::SetPaneCount)
                .unwrap_or(Action::Interaction(InteractionKind::Key)),
            _ => Action::Interaction(InteractionKind::Key),
        },
        _ => Action::Interaction(InteractionKind::Key),
    }
}
