//! Terminal point cloud viewer
//!
//! Draws the normalized cloud on a braille canvas through an orbit camera.
//! Blocks until the user quits.

use std::io;

use cloudnorm_core::{CoreError, CoreResult, NormalizedCloud, OrbitCamera, PointSink};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Block, Borders, Paragraph,
    },
    Frame, Terminal,
};

/// Radians per orbit key press
const ORBIT_STEP: f64 = 0.1;

/// Zoom factor per key press
const ZOOM_STEP: f64 = 1.25;

/// Half the visible height of the canvas in normalized units
const VIEW_HALF_HEIGHT: f64 = 0.75;

/// Viewer state shared by rendering and key handling
pub struct ViewerState {
    pub title: String,
    pub camera: OrbitCamera,
    pub point_count: usize,
}

impl ViewerState {
    pub fn new(title: String, point_count: usize) -> Self {
        Self {
            title,
            camera: OrbitCamera::default(),
            point_count,
        }
    }

    /// Apply a key press. Returns `true` when the viewer should close.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
            KeyCode::Char('h') | KeyCode::Left => self.camera.orbit(-ORBIT_STEP, 0.0),
            KeyCode::Char('l') | KeyCode::Right => self.camera.orbit(ORBIT_STEP, 0.0),
            KeyCode::Char('k') | KeyCode::Up => self.camera.orbit(0.0, -ORBIT_STEP),
            KeyCode::Char('j') | KeyCode::Down => self.camera.orbit(0.0, ORBIT_STEP),
            KeyCode::Char('+') | KeyCode::Char('=') => self.camera.zoom_by(ZOOM_STEP),
            KeyCode::Char('-') => self.camera.zoom_by(1.0 / ZOOM_STEP),
            KeyCode::Char('r') => self.camera.reset(),
            _ => {}
        }
        false
    }

    /// Render the cloud and status bar
    pub fn render(&self, frame: &mut Frame, cloud: &NormalizedCloud) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        self.render_canvas(frame, chunks[0], cloud);
        self.render_status_bar(frame, chunks[1]);
    }

    fn render_canvas(&self, frame: &mut Frame, area: Rect, cloud: &NormalizedCloud) {
        let coords: Vec<(f64, f64)> = self
            .camera
            .project_all(&cloud.points)
            .into_iter()
            .map(|p| (p.x, p.y))
            .collect();
        let color = point_color(cloud);

        // Terminal cells are roughly twice as tall as they are wide
        let half_width = VIEW_HALF_HEIGHT * aspect_ratio(area);

        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", self.title)),
            )
            .marker(Marker::Braille)
            .x_bounds([-half_width, half_width])
            .y_bounds([-VIEW_HALF_HEIGHT, VIEW_HALF_HEIGHT])
            .paint(move |ctx| {
                ctx.draw(&Points {
                    coords: &coords,
                    color,
                });
            });

        frame.render_widget(canvas, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                format!(" {} points ", self.point_count),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                "| yaw {:.0}° pitch {:.0}° zoom {:.2}x ",
                self.camera.yaw.to_degrees(),
                self.camera.pitch.to_degrees(),
                self.camera.zoom
            )),
            Span::styled(
                "| h/l j/k orbit  +/- zoom  r reset  q quit",
                Style::default().fg(Color::Cyan),
            ),
        ]);

        let status_bar = Paragraph::new(line).style(Style::default().bg(Color::DarkGray));
        frame.render_widget(status_bar, area);
    }
}

/// Width-to-height ratio of a canvas area in visual units
fn aspect_ratio(area: Rect) -> f64 {
    if area.height == 0 {
        return 1.0;
    }
    area.width as f64 / (2.0 * area.height as f64)
}

fn point_color(cloud: &NormalizedCloud) -> Color {
    match cloud.color {
        Some(c) => {
            let [r, g, b] = c.to_rgb8();
            Color::Rgb(r, g, b)
        }
        None => Color::White,
    }
}

/// Interactive sink that takes over the terminal while showing a cloud
pub struct TerminalViewer {
    title: String,
}

impl TerminalViewer {
    pub fn new(title: String) -> Self {
        Self { title }
    }
}

impl PointSink for TerminalViewer {
    fn show(&mut self, cloud: &NormalizedCloud) -> CoreResult<()> {
        tracing::info!("Press 'q' in the viewer to exit");

        let mut state = ViewerState::new(self.title.clone(), cloud.len());

        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = run_viewer(&mut terminal, &mut state, cloud);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        res.map_err(|e| CoreError::Display(e.to_string()))?;
        tracing::info!("Viewer closed");
        Ok(())
    }
}

fn run_viewer<B: Backend>(
    terminal: &mut Terminal<B>,
    state: &mut ViewerState,
    cloud: &NormalizedCloud,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| state.render(f, cloud))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && state.handle_key(key.code) {
                return Ok(());
            }
        }
    }
}
