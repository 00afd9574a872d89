use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Frame, Terminal};
use tokio::runtime::Handle;

use crate::config::Config;
use crate::form::FormController;
use crate::model::FormKind;
use crate::submit::{Dispatcher, SimulatedSubmission, SubmissionAction, SubmissionEvent};

use super::action::Action;
use super::error::AppError;
use super::screens::{
    EnquiryState, HelpState, HomeState, draw_enquiry, draw_help, draw_home, help, home,
};

/// How long the event loop waits for input before draining submission events.
const TICK: Duration = Duration::from_millis(50);

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// The brochure page.
    Home,
    /// The contact form.
    Contact,
    /// The service-request form.
    ServiceRequest,
    /// Keybinding help.
    Help,
}

/// Top-level application state.
pub struct App {
    screen: Screen,
    home: HomeState,
    contact: EnquiryState,
    service: EnquiryState,
    help: HelpState,
    dispatcher: Dispatcher,
    contact_action: Arc<dyn SubmissionAction>,
    service_action: Arc<dyn SubmissionAction>,
    should_quit: bool,
}

impl App {
    /// Creates an `App` with simulated submissions timed by `config`, spawning onto `handle`.
    pub fn new(config: &Config, handle: Handle) -> Self {
        Self::with_actions(
            Dispatcher::new(handle, config.restore_delay()),
            Arc::new(SimulatedSubmission::new(config.contact_delay())),
            Arc::new(SimulatedSubmission::new(config.service_delay())),
        )
    }

    /// Creates an `App` starting on [`Screen::Home`] with the given submission actions.
    pub fn with_actions(
        dispatcher: Dispatcher,
        contact_action: Arc<dyn SubmissionAction>,
        service_action: Arc<dyn SubmissionAction>,
    ) -> Self {
        Self {
            screen: Screen::Home,
            home: HomeState::new(),
            contact: EnquiryState::contact(),
            service: EnquiryState::service(),
            help: HelpState::new(),
            dispatcher,
            contact_action,
            service_action,
            should_quit: false,
        }
    }

    /// Main event loop: layout → draw → poll input → drain submission events → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            let size = terminal.size()?;
            self.home.set_viewport(home::content_height(size.height));
            self.help.set_viewport(help::content_height(size.height));
            terminal.draw(|frame| self.draw(frame))?;
            if event::poll(TICK)?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key(key);
            }
            self.tick();
        }
        Ok(())
    }

    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        match self.screen {
            Screen::Home => draw_home(&self.home, frame, area),
            Screen::Contact => draw_enquiry(&self.contact, frame, area),
            Screen::ServiceRequest => draw_enquiry(&self.service, frame, area),
            Screen::Help => draw_help(&self.help, frame, area),
        }
    }

    /// Handles a key event: global keys first, then screen-specific.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if key.code == KeyCode::F(1) {
            if self.screen != Screen::Help {
                self.help.set_origin(self.screen);
                self.help.reset();
                self.screen = Screen::Help;
            }
            return;
        }

        let action = match self.screen {
            Screen::Home => self.home.handle_key(key),
            Screen::Contact => self.contact.handle_key(key),
            Screen::ServiceRequest => self.service.handle_key(key),
            Screen::Help => self.help.handle_key(key),
        };
        self.apply(action);
    }

    /// Applies every submission event that has arrived since the last tick.
    pub fn tick(&mut self) {
        while let Some(event) = self.dispatcher.try_next() {
            let controller = self.controller_mut(event.form());
            match event {
                SubmissionEvent::Settled { result, .. } => controller.settle(result),
                SubmissionEvent::Restored { .. } => controller.restore(),
            }
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => self.screen = screen,
            Action::Submit(snapshot) => {
                let submission = match snapshot.form {
                    FormKind::Contact => Arc::clone(&self.contact_action),
                    FormKind::Service => Arc::clone(&self.service_action),
                };
                self.dispatcher.dispatch(submission, snapshot);
            }
            Action::Quit => self.should_quit = true,
        }
    }

    fn controller_mut(&mut self, form: FormKind) -> &mut FormController {
        match form {
            FormKind::Contact => self.contact.controller_mut(),
            FormKind::Service => self.service.controller_mut(),
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn home(&self) -> &HomeState {
        &self.home
    }

    /// Returns the controller for `form`.
    pub fn controller(&self, form: FormKind) -> &FormController {
        match form {
            FormKind::Contact => self.contact.controller(),
            FormKind::Service => self.service.controller(),
        }
    }
}
