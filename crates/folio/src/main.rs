mod background;
mod host;
mod logging;
mod surface;
mod ui;

use std::io::stdout;
use std::time::Instant;

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEventKind,
    },
    execute,
};
use folio_config::Config;
use folio_core::{AnimationSpeed, ColorTheme, Viewport};
use folio_scene::EventKind;
use folio_skills::{SkillCategory, categories};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
};

use crate::background::Background;
use crate::host::TerminalHost;
use crate::logging::{LOG_FILE, LoggingConfig, init_logging};
use crate::surface::LayerStack;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    if std::env::args().skip(1).any(|arg| arg == "--skills-json") {
        println!("{}", serde_json::to_string_pretty(categories())?);
        return Ok(());
    }

    let config = Config::load()?;
    init_logging(LoggingConfig {
        env_filter: config.log_filter.clone(),
        file: Config::project_dirs().map(|dirs| dirs.data_local_dir().join(LOG_FILE)),
    })?;
    log::info!("starting folio {}", env!("CARGO_PKG_VERSION"));

    let terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture)?;
    let result = App::new(config).run(terminal);
    execute!(stdout(), DisableMouseCapture)?;
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Current color theme.
    color_theme: ColorTheme,
    /// Current background animation speed.
    speed: AnimationSpeed,
    /// Whether to mount the background on start.
    show_background: bool,
    /// Skill categories being displayed.
    categories: &'static [SkillCategory],
    /// Index of the visible category.
    category: usize,
    /// Index of the highlighted skill within the category.
    selected: usize,
    /// Event and frame source for the background.
    host: TerminalHost,
    /// Layers drawn beneath the UI.
    surface: LayerStack,
    /// The animated background.
    background: Background,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        Self {
            running: false,
            color_theme: config.theme,
            speed: config.speed,
            show_background: config.background,
            categories: categories(),
            category: 0,
            selected: 0,
            host: TerminalHost::new(Viewport::default(), config.scene.fps),
            surface: LayerStack::new(),
            background: Background::new(config.scene),
        }
    }

    /// Run the application's main loop.
    ///
    /// The background is unmounted however the loop ends, including on error.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let result = self.event_loop(&mut terminal);
        self.shutdown();
        result
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let size = terminal.size()?;
        self.host.set_viewport(Viewport::new(size.width, size.height));
        if self.show_background {
            self.mount_background();
        }

        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
            self.deliver_frame();
        }
        Ok(())
    }

    /// Release the background and its listeners.
    fn shutdown(&mut self) {
        self.running = false;
        self.background.unmount(&mut self.host, &mut self.surface);
        log::info!("exiting");
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let accent = self.color_theme.color();

        // Background layer first, only while it is mounted at the bottom.
        if let Some(layer) = self.background.layer()
            && self.surface.bottom() == Some(layer)
            && let Some(view) = self.background.view()
        {
            frame.render_widget(view, area);
        }

        let [body, help] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

        let panel = ui::panel_area(body, ui::panel_height(self.categories));
        ui::render_skills(
            frame,
            panel,
            self.categories,
            self.category,
            self.selected,
            accent,
        );
        ui::render_help(frame, help, accent, self.speed, self.background.is_mounted());
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits no longer than the next scheduled background frame.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let timeout = self.host.poll_timeout(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => {
                    if matches!(mouse.kind, MouseEventKind::Moved | MouseEventKind::Drag(_))
                        && self.host.is_listening(EventKind::PointerMove)
                    {
                        self.background.handle_pointer_move(mouse.column, mouse.row);
                    }
                }
                Event::Resize(width, height) => {
                    let viewport = Viewport::new(width, height);
                    self.host.set_viewport(viewport);
                    if self.host.is_listening(EventKind::Resize) {
                        self.background.handle_resize(viewport);
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Hands a due frame to the background.
    fn deliver_frame(&mut self) {
        if let Some(handle) = self.host.due_frame(Instant::now()) {
            self.background.on_frame(handle, &mut self.host);
        }
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Right | KeyCode::Tab | KeyCode::Char('l')) => self.next_category(),
            (_, KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h')) => self.previous_category(),
            (_, KeyCode::Down | KeyCode::Char('j')) => self.select_next_skill(),
            (_, KeyCode::Up | KeyCode::Char('k')) => self.select_previous_skill(),
            (_, KeyCode::Char('c')) => self.cycle_color_theme(),
            (_, KeyCode::Char('s')) => self.cycle_speed(),
            (_, KeyCode::Char('b')) => self.toggle_background(),
            _ => {}
        }
    }

    fn next_category(&mut self) {
        if !self.categories.is_empty() {
            self.category = (self.category + 1) % self.categories.len();
            self.selected = 0;
        }
    }

    fn previous_category(&mut self) {
        if !self.categories.is_empty() {
            self.category = (self.category + self.categories.len() - 1) % self.categories.len();
            self.selected = 0;
        }
    }

    fn skill_count(&self) -> usize {
        self.categories
            .get(self.category)
            .map_or(0, |category| category.skills.len())
    }

    fn select_next_skill(&mut self) {
        let count = self.skill_count();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    fn select_previous_skill(&mut self) {
        let count = self.skill_count();
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
        }
    }

    /// Cycle through available color themes.
    fn cycle_color_theme(&mut self) {
        self.color_theme = self.color_theme.next();
        self.background.set_theme(self.color_theme);
    }

    /// Cycle through background speeds.
    fn cycle_speed(&mut self) {
        self.speed = self.speed.next();
        self.background.set_speed(self.speed);
    }

    /// Mount or unmount the background.
    fn toggle_background(&mut self) {
        self.background.toggle(
            &mut self.host,
            &mut self.surface,
            self.speed,
            self.color_theme,
        );
    }

    fn mount_background(&mut self) {
        self.background.mount(
            &mut self.host,
            &mut self.surface,
            self.speed,
            self.color_theme,
        );
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let mut config = Config::default();
        config.scene.particle_count = 20;
        config.scene.line_vertex_count = 20;
        config.scene.seed = Some(5);
        let mut app = App::new(config);
        app.host.set_viewport(Viewport::new(80, 24));
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        app.on_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_category_navigation_wraps() {
        let mut app = test_app();
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected, 1);

        press(&mut app, KeyCode::Left);
        assert_eq!(app.category, app.categories.len() - 1);
        assert_eq!(app.selected, 0);

        press(&mut app, KeyCode::Right);
        assert_eq!(app.category, 0);
    }

    #[test]
    fn test_skill_selection_wraps() {
        let mut app = test_app();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected, app.skill_count() - 1);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_toggle_background() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('b'));
        assert!(app.background.is_mounted());
        assert_eq!(app.surface.bottom(), app.background.layer());

        press(&mut app, KeyCode::Char('b'));
        assert!(!app.background.is_mounted());
        assert_eq!(app.surface.bottom(), None);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();
        app.running = true;
        app.on_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);

        app.running = true;
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn test_shutdown_unmounts_background() {
        let mut app = test_app();
        app.running = true;
        app.mount_background();
        assert!(app.host.is_listening(EventKind::Resize));

        app.shutdown();
        assert!(!app.running);
        assert!(!app.background.is_mounted());
        assert_eq!(app.surface.bottom(), None);
        assert!(!app.host.is_listening(EventKind::Resize));
        assert!(!app.host.is_listening(EventKind::PointerMove));

        // A second shutdown finds nothing left to release.
        app.shutdown();
        assert!(!app.background.is_mounted());
    }

    #[test]
    fn test_theme_and_speed_cycle() {
        let mut app = test_app();
        let theme = app.color_theme;
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.color_theme, theme.next());

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.speed, AnimationSpeed::Fast);
    }
}
