//! PadApp - application builder and event loop

use std::{
    io,
    time::{Duration, Instant},
};

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyCode, KeyEventKind,
    },
    execute,
};
use ratatui::DefaultTerminal;

use saavy_pad::{
    host::device::CpalHost, PointerEvent, Scale, Selection, Session, SessionConfig, Timbre,
};

use super::{input::pointer_event, ui::PadView};

/// Main application builder
pub struct PadApp {
    selection: Selection,
    config: SessionConfig,
}

impl PadApp {
    pub fn new() -> Self {
        Self {
            selection: Selection::default(),
            config: SessionConfig::default(),
        }
    }

    /// Starting scale
    pub fn scale(mut self, scale: Scale) -> Self {
        self.selection.scale = scale;
        self
    }

    /// Starting sound preset
    pub fn timbre(mut self, timbre: Timbre) -> Self {
        self.selection.timbre = timbre;
        self
    }

    /// Voice timing (attack, release and stop delay)
    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the application (takes over the terminal until quit)
    pub fn run(self) -> EyreResult<()> {
        let mut terminal = ratatui::init();

        let result = execute!(io::stdout(), EnableMouseCapture, EnableFocusChange)
            .wrap_err("failed to enable mouse capture")
            .and_then(|()| self.event_loop(&mut terminal));

        // Restore the terminal on every exit path
        if let Err(err) = execute!(io::stdout(), DisableFocusChange, DisableMouseCapture) {
            log::warn!("failed to disable mouse capture: {err}");
        }
        ratatui::restore();

        result
    }

    fn event_loop(self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        let mut selection = self.selection;
        let mut session = Session::with_config(CpalHost::new(), self.config);
        let mut view = PadView::new();

        // Audio comes up with the play surface; a failure here is retried on
        // the first press
        session.warm_up();

        // Focus loss lets the released voice ring out before output sleeps
        let mut suspend_at: Option<Instant> = None;

        loop {
            session.poll(&selection);

            if session.is_playing() {
                suspend_at = None;
            }
            if suspend_at.is_some_and(|deadline| Instant::now() >= deadline) {
                suspend_at = None;
                if let Some(ctx) = session.context_mut() {
                    if let Err(err) = ctx.suspend() {
                        log::warn!("failed to suspend audio output: {err}");
                    }
                }
            }

            if !view.has_scope() {
                if let Some(scope) = session.context_mut().and_then(|ctx| ctx.take_scope()) {
                    view.attach_scope(scope);
                }
            }
            view.poll_scope();

            terminal.draw(|frame| view.render(frame, &session, &selection))?;

            // ~60fps
            if !event::poll(Duration::from_millis(16))? {
                continue;
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => break,
                    KeyCode::Right => selection.next_timbre(),
                    KeyCode::Left => selection.previous_timbre(),
                    KeyCode::Up => selection.next_scale(),
                    KeyCode::Down => selection.previous_scale(),
                    _ => {}
                },
                Event::Mouse(mouse) => {
                    if let Some(pointer) = pointer_event(mouse, view.surface()) {
                        session.handle(pointer, &selection, &mut view);
                    }
                }
                Event::FocusLost => {
                    // Like a page going to the background: drop the voice and
                    // let the output sleep until the next press
                    session.handle(PointerEvent::Leave, &selection, &mut view);
                    let release = Duration::try_from_secs_f32(session.config().stop_delay)
                        .unwrap_or(Duration::ZERO);
                    suspend_at = Some(Instant::now() + release);
                }
                Event::FocusGained => suspend_at = None,
                _ => {}
            }
        }

        log::info!("quit");
        Ok(())
    }
}

impl Default for PadApp {
    fn default() -> Self {
        Self::new()
    }
}
