//! [`TuiRunner`]: the cooperative, single-threaded event loop that owns
//! terminal mode setup/teardown and drives an [`App`] to completion.

use std::io::Write;
use std::panic::AssertUnwindSafe;
use std::time::Instant;

use tracing::{debug, warn};

use crate::error::{isolate_render, ErrorAction, RenderFailure};
use crate::event::{Event, TickEvent};
use crate::render::{Backend, Frame, Terminal, TerminalError};

use super::config::{Stream, TuiConfig};
use super::focus::FocusManager;
use super::router::EventRouter;

/// Write a line to whichever of stdout/stderr `stream` names. Best-effort:
/// a failure here (e.g. a closed pipe) is not itself a reason to fail the
/// run, since the render outcome it's reporting already determined that.
fn write_to_stream(stream: Stream, message: &str) {
    let result = match stream {
        Stream::Stdout => writeln!(std::io::stdout(), "{message}"),
        Stream::Stderr => writeln!(std::io::stderr(), "{message}"),
    };
    if let Err(error) = result {
        warn!(%error, "failed to write render diagnostic to the configured stream");
    }
}

/// Everything a [`TuiRunner`] drives each iteration: event handling,
/// rendering, and the quit signal. Implemented by application code, not
/// this crate — the runner supplies the loop, not the UI.
pub trait App {
    /// Handle one event; return `true` if it changed anything that needs
    /// redrawing.
    fn handle_event(&mut self, event: Event) -> bool;

    fn render(&mut self, frame: &mut Frame<'_>);

    fn should_quit(&self) -> bool;
}

/// Failure surfaced by [`TuiRunner::run`]: either the backend itself
/// failed, or a render closure panicked and the configured
/// [`ErrorAction`] was [`ErrorAction::QuitImmediately`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RunError<E>
where
    E: std::error::Error + 'static,
{
    #[error(transparent)]
    Terminal(#[from] TerminalError<E>),
    #[error(transparent)]
    Render(#[from] RenderFailure),
}

pub struct TuiRunner<B: Backend> {
    terminal: Terminal<B>,
    config: TuiConfig,
    focus: FocusManager,
    router: EventRouter,
}

impl<B: Backend> TuiRunner<B> {
    pub fn new(backend: B, config: TuiConfig) -> Result<Self, TerminalError<B::Error>> {
        let mut terminal = Terminal::new(backend)?;
        terminal.set_fault_tolerant(config.fault_tolerant);
        Ok(Self { terminal, config, focus: FocusManager::new(), router: EventRouter::new() })
    }

    pub fn focus_manager(&mut self) -> &mut FocusManager {
        &mut self.focus
    }

    pub fn event_router(&mut self) -> &mut EventRouter {
        &mut self.router
    }

    fn enter(&mut self) -> Result<(), TerminalError<B::Error>> {
        let backend = self.terminal.backend_mut();
        if self.config.raw_mode {
            backend.enable_raw_mode().map_err(TerminalError::Io)?;
        }
        if self.config.alternate_screen {
            backend.enter_alternate_screen().map_err(TerminalError::Io)?;
        }
        if self.config.mouse_capture {
            backend.enable_mouse_capture().map_err(TerminalError::Io)?;
        }
        if self.config.hide_cursor {
            backend.hide_cursor().map_err(TerminalError::Io)?;
        }
        Ok(())
    }

    /// Best-effort restoration, run on every exit path (including after
    /// a panic was caught at the render boundary): each step runs even
    /// if an earlier one failed, since leaving the terminal half-restored
    /// is worse than one more ignored error.
    fn leave(&mut self) {
        let backend = self.terminal.backend_mut();
        if self.config.hide_cursor {
            if let Err(error) = backend.show_cursor() {
                warn!(%error, "failed to restore cursor visibility");
            }
        }
        if self.config.mouse_capture {
            if let Err(error) = backend.disable_mouse_capture() {
                warn!(%error, "failed to disable mouse capture");
            }
        }
        if self.config.alternate_screen {
            if let Err(error) = backend.leave_alternate_screen() {
                warn!(%error, "failed to leave alternate screen");
            }
        }
        if self.config.raw_mode {
            if let Err(error) = backend.disable_raw_mode() {
                warn!(%error, "failed to disable raw mode");
            }
        }
    }

    /// Apply terminal modes, run `app` to completion, and guarantee
    /// terminal state is restored before returning — even if `app`
    /// requests a quit, the backend errors, or a render panics.
    pub fn run(mut self, app: &mut impl App) -> Result<(), RunError<B::Error>> {
        self.enter().map_err(RunError::Terminal)?;
        let result = self.run_loop(app);
        self.leave();
        result
    }

    fn run_loop(&mut self, app: &mut impl App) -> Result<(), RunError<B::Error>> {
        let mut last_tick = Instant::now();
        let mut frame_count = 0u64;

        loop {
            let timeout = self.config.tick_rate.map_or(self.config.poll_timeout, |rate| {
                rate.saturating_sub(last_tick.elapsed()).min(self.config.poll_timeout)
            });

            let polled = self
                .terminal
                .backend_mut()
                .poll_event(timeout)
                .map_err(TerminalError::Io)
                .map_err(RunError::Terminal)?;

            let mut redraw = false;
            if let Some(event) = polled {
                redraw |= matches!(event, Event::Resize(_));
                redraw |= app.handle_event(event);
            }

            if let Some(tick_rate) = self.config.tick_rate {
                if last_tick.elapsed() >= tick_rate {
                    let elapsed = last_tick.elapsed();
                    last_tick = Instant::now();
                    frame_count += 1;
                    redraw |= app.handle_event(Event::Tick(TickEvent { frame_count, elapsed }));
                }
            }

            if redraw {
                self.draw(app)?;
            }

            if app.should_quit() {
                break;
            }
        }

        Ok(())
    }

    fn draw(&mut self, app: &mut impl App) -> Result<(), RunError<B::Error>> {
        let terminal = &mut self.terminal;
        let outcome = isolate_render(AssertUnwindSafe(|| terminal.draw(|frame| app.render(frame))));

        match outcome {
            Ok(draw_result) => {
                let completed = draw_result.map_err(RunError::Terminal)?;
                let elements: Vec<String> = completed.styled_areas.iter().map(|a| a.tag.clone()).collect();
                self.focus.set_elements(elements);
                let hit_elements =
                    completed.styled_areas.into_iter().map(|a| (a.tag, a.rect)).collect();
                self.router.set_elements(hit_elements);
                Ok(())
            }
            Err(failure) => match self.config.error_handler.handle(&failure) {
                ErrorAction::QuitImmediately => {
                    write_to_stream(self.config.error_output, &format!("render error: {}", failure.message));
                    Err(RunError::Render(failure))
                }
                ErrorAction::DisplayAndQuit => {
                    debug!(message = %failure.message, "render failed, quitting after displaying the failure");
                    write_to_stream(self.config.error_output, &format!("render error: {}", failure.message));
                    let _ = self.terminal.draw(|frame| {
                        frame.buffer_mut().set_string(
                            0,
                            0,
                            &format!("render error: {}", failure.message),
                            crate::style::Style::EMPTY,
                        );
                    });
                    Err(RunError::Render(failure))
                }
                ErrorAction::Suppress => {
                    warn!(message = %failure.message, "render failed, keeping previous frame");
                    write_to_stream(
                        self.config.error_output,
                        &format!("warning: render failed, keeping previous frame: {}", failure.message),
                    );
                    Ok(())
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{KeyCode, KeyEvent};
    use crate::render::TestBackend;

    struct CountingApp {
        renders: usize,
        quit_after: usize,
    }

    impl App for CountingApp {
        fn handle_event(&mut self, event: Event) -> bool {
            matches!(event, Event::Key(_)) || matches!(event, Event::Resize(_))
        }

        fn render(&mut self, frame: &mut Frame<'_>) {
            self.renders += 1;
            frame.buffer_mut().set_string(0, 0, "x", crate::style::Style::EMPTY);
        }

        fn should_quit(&self) -> bool {
            self.renders >= self.quit_after
        }
    }

    #[test]
    fn run_restores_terminal_modes_on_quit() {
        let mut backend = TestBackend::new(5, 1);
        backend.push_event(Event::Key(KeyEvent::plain(KeyCode::Char('a'))));
        let runner = TuiRunner::new(backend, TuiConfig::new()).unwrap();
        let mut app = CountingApp { renders: 0, quit_after: 1 };
        runner.run(&mut app).unwrap();
        assert_eq!(app.renders, 1);
    }

    struct IndifferentApp {
        renders: usize,
        quit_after: usize,
    }

    impl App for IndifferentApp {
        // Never claims an event warrants a redraw on its own — a legal
        // implementation that relies on the runner to force one on resize.
        fn handle_event(&mut self, _event: Event) -> bool {
            false
        }

        fn render(&mut self, frame: &mut Frame<'_>) {
            self.renders += 1;
            frame.buffer_mut().set_string(0, 0, "x", crate::style::Style::EMPTY);
        }

        fn should_quit(&self) -> bool {
            self.renders >= self.quit_after
        }
    }

    #[test]
    fn resize_forces_a_redraw_even_when_handle_event_declines_one() {
        let mut backend = TestBackend::new(5, 1);
        backend.push_event(Event::Resize(crate::event::ResizeEvent { width: 8, height: 2 }));
        let runner = TuiRunner::new(backend, TuiConfig::new()).unwrap();
        let mut app = IndifferentApp { renders: 0, quit_after: 1 };
        runner.run(&mut app).unwrap();
        assert_eq!(app.renders, 1);
    }

    struct FaultTolerantApp {
        renders: usize,
    }

    impl App for FaultTolerantApp {
        fn handle_event(&mut self, _event: Event) -> bool {
            true
        }

        fn render(&mut self, frame: &mut Frame<'_>) {
            self.renders += 1;
            struct Exploding;
            impl crate::render::Widget for Exploding {
                fn render(self, _area: crate::geometry::Rect, _buffer: &mut crate::buffer::Buffer) {
                    panic!("child widget exploded");
                }
            }
            frame.render_child("broken", Exploding, crate::geometry::Rect::new(0, 0, 5, 1));
        }

        fn should_quit(&self) -> bool {
            self.renders >= 1
        }
    }

    #[test]
    fn fault_tolerant_config_survives_a_panicking_child_widget() {
        let previous_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(|_| {}));

        let mut backend = TestBackend::new(5, 1);
        backend.push_event(Event::Key(KeyEvent::plain(KeyCode::Char('a'))));
        let runner = TuiRunner::new(backend, TuiConfig::new().fault_tolerant(true)).unwrap();
        let mut app = FaultTolerantApp { renders: 0 };
        let result = runner.run(&mut app);

        std::panic::set_hook(previous_hook);
        assert!(result.is_ok());
    }

    struct PanickingApp;

    impl App for PanickingApp {
        fn handle_event(&mut self, _event: Event) -> bool {
            true
        }

        fn render(&mut self, _frame: &mut Frame<'_>) {
            panic!("widget exploded");
        }

        fn should_quit(&self) -> bool {
            false
        }
    }

    #[test]
    fn a_panicking_render_is_caught_and_surfaced_as_render_error() {
        let previous_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(|_| {}));

        let mut backend = TestBackend::new(5, 1);
        backend.push_event(Event::Key(KeyEvent::plain(KeyCode::Char('a'))));
        let runner = TuiRunner::new(
            backend,
            TuiConfig::new().error_handler(crate::error::FixedErrorHandler(ErrorAction::QuitImmediately)),
        )
        .unwrap();
        let mut app = PanickingApp;
        let result = runner.run(&mut app);

        std::panic::set_hook(previous_hook);
        assert!(matches!(result, Err(RunError::Render(_))));
    }
}
