//! Interactive portfolio page in the terminal.
//!
//! Same page, same two state cells as the HTML output: the nav menu opens
//! as an overlay and closes when a destination is picked, and the email card
//! stays masked until it is activated.

use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};
use tracing::debug;

use crate::error::{FolioError, Result};
use crate::launcher::{Launcher, MailOutcome, open_mail_composer};
use crate::page::model::{CardAction, Link, Page, SectionBody};
use crate::page::sections::SectionId;
use crate::page::state::PageState;
use crate::page::text::{LineKind, TextLine, page_layout};
use crate::profile::Profile;

/// Menu overlay height: one row per section plus borders.
#[allow(clippy::cast_possible_truncation)]
const MENU_HEIGHT: u16 = SectionId::COUNT as u16 + 2;

/// Action to take after handling input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    Continue,
}

/// Links reachable with Tab/`o`: the contact cards that navigate somewhere.
fn contact_links(page: &Page) -> Vec<Link> {
    page.section(SectionId::Contact)
        .and_then(|section| match &section.body {
            SectionBody::Contact(cards) => Some(
                cards
                    .iter()
                    .filter_map(|card| match &card.action {
                        CardAction::Link(link) => Some(link.clone()),
                        CardAction::RevealEmail { .. } => None,
                    })
                    .collect(),
            ),
            _ => None,
        })
        .unwrap_or_default()
}

/// TUI application state.
pub struct PageView<'a> {
    profile: &'a Profile,
    launcher: Box<dyn Launcher + 'a>,
    /// Menu and email cells
    state: PageState,
    /// Page snapshot for the current state
    page: Page,
    lines: Vec<TextLine>,
    offsets: [usize; SectionId::COUNT],
    /// Content scroll offset, in lines
    scroll: u16,
    /// Highlighted entry in the open nav menu
    menu_list: ListState,
    links: Vec<Link>,
    /// Link opened by `o`
    selected_link: usize,
    status_message: Option<String>,
}

impl<'a> PageView<'a> {
    pub fn new(profile: &'a Profile, state: PageState, launcher: Box<dyn Launcher + 'a>) -> Self {
        let page = Page::build(profile, state);
        let (lines, offsets) = page_layout(&page);
        let links = contact_links(&page);
        let mut menu_list = ListState::default();
        menu_list.select(Some(0));

        Self {
            profile,
            launcher,
            state,
            page,
            lines,
            offsets,
            scroll: 0,
            menu_list,
            links,
            selected_link: 0,
            status_message: None,
        }
    }

    /// Run the TUI main loop.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code, key.modifiers) == Action::Quit {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Rebuild the page snapshot after a state change.
    fn refresh(&mut self) {
        self.page = Page::build(self.profile, self.state);
        let (lines, offsets) = page_layout(&self.page);
        self.lines = lines;
        self.offsets = offsets;
    }

    fn draw(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Nav bar
                Constraint::Min(5),    // Page content
                Constraint::Length(1), // Help bar
            ])
            .split(f.area());

        self.draw_nav_bar(f, chunks[0]);
        self.draw_content(f, chunks[1]);
        self.draw_help_bar(f, chunks[2]);

        if self.state.menu.is_open() {
            self.draw_menu_overlay(f);
        }
    }

    fn draw_nav_bar(&self, f: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            format!("{} ", self.page.nav.logo),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        let current = self.current_section();
        for (i, item) in self.page.nav.items.iter().enumerate() {
            let style = if Some(item.id) == current {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            spans.push(Span::styled(format!(" {}:{}", i + 1, item.label), style));
        }
        if let Some(message) = &self.status_message {
            spans.push(Span::styled(
                format!("  | {message}"),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::Cyan));
        f.render_widget(paragraph, area);
    }

    fn draw_content(&self, f: &mut Frame, area: Rect) {
        let lines: Vec<Line<'static>> = self.lines.iter().map(styled_line).collect();
        let title = self
            .links
            .get(self.selected_link)
            .map(|link| format!(" {} [o: open {}] ", self.page.hero.name, link.label))
            .unwrap_or_else(|| format!(" {} ", self.page.hero.name));

        let paragraph = Paragraph::new(Text::from(lines))
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        f.render_widget(paragraph, area);
    }

    fn draw_help_bar(&self, f: &mut Frame, area: Rect) {
        let help_text = if self.state.menu.is_open() {
            "j/k: move  Enter: go  Esc/m: close menu"
        } else {
            "m: menu  1-7: jump  j/k: scroll  e: reveal email  M: mail  Tab/o: links  q: quit"
        };
        let paragraph = Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray));
        f.render_widget(paragraph, area);
    }

    fn draw_menu_overlay(&mut self, f: &mut Frame) {
        let area = f.area();
        let width = 30.min(area.width.saturating_sub(4));
        let height = MENU_HEIGHT.min(area.height.saturating_sub(2));
        let menu_area = Rect::new(area.width.saturating_sub(width + 1), 1, width, height);

        f.render_widget(Clear, menu_area);

        let items: Vec<ListItem> = self
            .page
            .nav
            .items
            .iter()
            .map(|item| ListItem::new(item.label))
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(" Menu "),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        f.render_stateful_widget(list, menu_area, &mut self.menu_list);
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) -> Action {
        if key == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        if self.state.menu.is_open() {
            self.handle_menu_key(key);
            return Action::Continue;
        }

        match key {
            KeyCode::Char('q') => return Action::Quit,
            KeyCode::Char('m') => self.state.toggle_menu(),
            KeyCode::Char(c @ '1'..='7') => {
                let index = c as usize - '1' as usize;
                self.go_to(SectionId::ALL[index]);
            }
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(10),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(10),
            KeyCode::Char('g') => self.scroll = 0,
            KeyCode::Char('G') => {
                self.scroll = u16::try_from(self.lines.len().saturating_sub(1)).unwrap_or(u16::MAX);
            }
            KeyCode::Char('e') => {
                self.state.reveal_email();
                self.refresh();
                self.go_to(SectionId::Contact);
                self.status_message = Some("Email revealed".to_string());
            }
            KeyCode::Char('M') => {
                self.status_message = Some(
                    match open_mail_composer(self.launcher.as_ref(), &self.profile.contact.email) {
                        MailOutcome::Opened => "Opened mail composer".to_string(),
                        MailOutcome::Fallback(href) => format!("No mail handler; use {href}"),
                    },
                );
            }
            KeyCode::Tab => {
                if !self.links.is_empty() {
                    self.selected_link = (self.selected_link + 1) % self.links.len();
                    self.status_message = self
                        .links
                        .get(self.selected_link)
                        .map(|link| format!("Selected {}", link.label));
                }
            }
            KeyCode::Char('o') | KeyCode::Enter => self.open_selected_link(),
            _ => {}
        }
        Action::Continue
    }

    fn handle_menu_key(&mut self, key: KeyCode) {
        let count = self.page.nav.items.len();
        match key {
            KeyCode::Down | KeyCode::Char('j') => {
                let next = self.menu_list.selected().map_or(0, |i| (i + 1) % count);
                self.menu_list.select(Some(next));
            }
            KeyCode::Up | KeyCode::Char('k') => {
                let prev = self
                    .menu_list
                    .selected()
                    .map_or(0, |i| if i == 0 { count - 1 } else { i - 1 });
                self.menu_list.select(Some(prev));
            }
            KeyCode::Enter => {
                let index = self.menu_list.selected().unwrap_or(0);
                if let Some(item) = self.page.nav.items.get(index) {
                    self.go_to(item.id);
                }
            }
            KeyCode::Char(c @ '1'..='7') => {
                let index = c as usize - '1' as usize;
                self.go_to(SectionId::ALL[index]);
            }
            KeyCode::Esc | KeyCode::Char('m' | 'q') => self.state.close_menu(),
            _ => {}
        }
    }

    /// Follow a nav link: close the menu and scroll the section to the top.
    fn go_to(&mut self, id: SectionId) {
        let id = self.state.activate_nav_link(id);
        self.scroll = u16::try_from(self.offsets[id.index()]).unwrap_or(u16::MAX);
        debug!(section = %id, scroll = self.scroll, "jumped to section");
    }

    fn open_selected_link(&mut self) {
        let Some(link) = self.links.get(self.selected_link) else {
            return;
        };
        self.status_message = Some(match self.launcher.open(&link.href) {
            Ok(()) => format!("Opened {}", link.label),
            Err(err) => format!("Could not open {}: {err}", link.label),
        });
    }

    /// Section whose heading is at or above the top of the viewport.
    fn current_section(&self) -> Option<SectionId> {
        let top = usize::from(self.scroll);
        SectionId::ALL
            .into_iter()
            .rev()
            .find(|id| self.offsets[id.index()] <= top)
    }

    #[cfg(test)]
    fn state(&self) -> PageState {
        self.state
    }

    #[cfg(test)]
    fn visible_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn styled_line(line: &TextLine) -> Line<'static> {
    match line.kind {
        LineKind::Title => Line::from(Span::styled(
            line.text.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        LineKind::Heading => Line::from(Span::styled(
            format!("  {}", line.text),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        LineKind::Meta => Line::from(Span::styled(
            format!("  {}", line.text),
            Style::default().fg(Color::DarkGray),
        )),
        LineKind::Body => Line::from(format!("  {}", line.text)),
        LineKind::Bullet => Line::from(format!("    • {}", line.text)),
        LineKind::Blank => Line::from(""),
    }
}

/// RAII Guard to ensure terminal state is restored even on panic.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the page view until the user quits.
pub fn run_page_view(
    profile: &Profile,
    state: PageState,
    launcher: Box<dyn Launcher + '_>,
) -> Result<()> {
    if !io::stdout().is_terminal() {
        return Err(FolioError::Terminal(
            "browse command requires an interactive terminal".to_string(),
        ));
    }

    let _guard = TerminalGuard::new()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    PageView::new(profile, state, launcher).run(&mut terminal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launcher::testing::RecordingLauncher;
    use crate::page::model::EMAIL_PLACEHOLDER;
    use crate::page::state::{EmailState, MenuState};
    use crate::profile::fixtures::sample_profile;

    fn view_of(profile: &Profile) -> PageView<'_> {
        PageView::new(profile, PageState::new(), Box::new(RecordingLauncher::default()))
    }

    fn press(view: &mut PageView<'_>, key: KeyCode) -> Action {
        view.handle_key(key, KeyModifiers::NONE)
    }

    #[test]
    fn menu_opens_and_enter_closes_it() {
        let profile = sample_profile();
        let mut view = view_of(&profile);

        press(&mut view, KeyCode::Char('m'));
        assert_eq!(view.state().menu, MenuState::Open);

        press(&mut view, KeyCode::Down);
        press(&mut view, KeyCode::Down);
        press(&mut view, KeyCode::Enter);

        assert_eq!(view.state().menu, MenuState::Closed);
        assert_eq!(view.current_section(), Some(SectionId::Skills));
    }

    #[test]
    fn menu_cursor_wraps() {
        let profile = sample_profile();
        let mut view = view_of(&profile);
        press(&mut view, KeyCode::Char('m'));
        press(&mut view, KeyCode::Up);
        assert_eq!(view.menu_list.selected(), Some(SectionId::COUNT - 1));
    }

    #[test]
    fn escape_closes_menu_without_jumping() {
        let profile = sample_profile();
        let mut view = view_of(&profile);
        press(&mut view, KeyCode::Char('m'));
        assert_eq!(press(&mut view, KeyCode::Char('q')), Action::Continue);
        assert_eq!(view.state().menu, MenuState::Closed);
        assert_eq!(view.scroll, 0);
    }

    #[test]
    fn number_keys_jump_to_sections() {
        let profile = sample_profile();
        let mut view = view_of(&profile);
        press(&mut view, KeyCode::Char('7'));
        assert_eq!(view.current_section(), Some(SectionId::Achievements));
        press(&mut view, KeyCode::Char('1'));
        assert_eq!(view.current_section(), Some(SectionId::Contact));
    }

    #[test]
    fn reveal_email_is_one_way() {
        let profile = sample_profile();
        let mut view = view_of(&profile);
        assert!(view.visible_text().contains(EMAIL_PLACEHOLDER));

        press(&mut view, KeyCode::Char('e'));
        assert_eq!(view.state().email, EmailState::Revealed);
        assert!(view.visible_text().contains("Email: ada@example.com"));

        press(&mut view, KeyCode::Char('e'));
        press(&mut view, KeyCode::Char('m'));
        press(&mut view, KeyCode::Enter);
        assert_eq!(view.state().email, EmailState::Revealed);
        assert!(!view.visible_text().contains(EMAIL_PLACEHOLDER));
    }

    #[test]
    fn mail_key_opens_composer() {
        let profile = sample_profile();
        let launcher = RecordingLauncher::default();
        let mut view = PageView::new(&profile, PageState::new(), Box::new(&launcher));
        press(&mut view, KeyCode::Char('M'));
        drop(view);
        assert_eq!(launcher.opened.borrow().as_slice(), ["mailto:ada@example.com"]);
    }

    #[test]
    fn mail_key_reports_fallback() {
        let profile = sample_profile();
        let launcher = Box::new(RecordingLauncher::failing());
        let mut view = PageView::new(&profile, PageState::new(), launcher);
        press(&mut view, KeyCode::Char('M'));
        assert_eq!(
            view.status_message.as_deref(),
            Some("No mail handler; use mailto:ada@example.com")
        );
    }

    #[test]
    fn tab_cycles_links_and_o_opens() {
        let profile = sample_profile();
        let launcher = RecordingLauncher::default();
        let mut view = PageView::new(&profile, PageState::new(), Box::new(&launcher));
        press(&mut view, KeyCode::Tab);
        press(&mut view, KeyCode::Char('o'));
        drop(view);
        assert_eq!(
            launcher.opened.borrow().as_slice(),
            ["https://www.linkedin.com/in/ada"]
        );
    }

    #[test]
    fn quit_keys() {
        let profile = sample_profile();
        let mut view = view_of(&profile);
        assert_eq!(
            view.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Action::Quit
        );
        assert_eq!(press(&mut view, KeyCode::Char('q')), Action::Quit);
    }
}
