//! Skills panel and help line drawn over the background.

use folio_core::AnimationSpeed;
use folio_skills::SkillCategory;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Clear, LineGauge, Paragraph, Tabs, Wrap},
};

/// Maximum panel width in columns.
const PANEL_WIDTH: u16 = 72;

/// Rows used by the panel around the skill rows: borders, tabs, the category
/// description, two spacers and a two-line detail area.
const PANEL_CHROME: u16 = 8;

/// Height needed to show the largest category without clipping.
pub fn panel_height(categories: &[SkillCategory]) -> u16 {
    let rows = categories.iter().map(|c| c.skills.len()).max().unwrap_or(0);
    rows as u16 + PANEL_CHROME
}

/// Centered panel area inside `area`.
pub fn panel_area(area: Rect, height: u16) -> Rect {
    let [_, column, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(PANEL_WIDTH.min(area.width)),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, panel, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(area.height)),
        Constraint::Fill(1),
    ])
    .areas(column);
    panel
}

/// Render the tabbed skills panel.
pub fn render_skills(
    frame: &mut Frame,
    area: Rect,
    categories: &[SkillCategory],
    current: usize,
    selected: usize,
    accent: Color,
) {
    let Some(category) = categories.get(current) else {
        return;
    };

    let block = Block::bordered()
        .border_style(Style::new().fg(accent))
        .title(Line::from(" folio · skills ").bold().fg(accent));
    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let rows = category.skills.len() as u16;
    let [tabs_area, description_area, _, skills_area, _, detail_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(rows),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(inner);

    let titles = categories
        .iter()
        .map(|c| format!("{} {}", c.icon.glyph(), c.title));
    let tabs = Tabs::new(titles)
        .select(current)
        .style(Style::new().dark_gray())
        .highlight_style(Style::new().fg(accent).add_modifier(Modifier::BOLD))
        .divider("│");
    frame.render_widget(tabs, tabs_area);

    frame.render_widget(
        Paragraph::new(category.description).italic().dark_gray(),
        description_area,
    );

    let skill_rows = Layout::vertical(vec![Constraint::Length(1); category.skills.len()])
        .split(skills_area);
    for (index, (skill, row)) in category.skills.iter().zip(skill_rows.iter()).enumerate() {
        let color = skill.color().unwrap_or(accent);
        let mut label_style = Style::new().fg(color);
        if index == selected {
            label_style = label_style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        let label = Line::from(vec![
            Span::styled(format!("{:>3} {:<14}", skill.icon.glyph(), skill.name), label_style),
            Span::raw(format!(" {:>3}% ", skill.level)),
        ]);
        let gauge = LineGauge::default()
            .ratio(skill.ratio())
            .label(label)
            .filled_style(Style::new().fg(color))
            .unfilled_style(Style::new().dark_gray());
        frame.render_widget(gauge, *row);
    }

    if let Some(skill) = category.skills.get(selected) {
        let detail = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(skill.name, Style::new().fg(accent).bold()),
                Span::raw(" · "),
                Span::raw(skill.experience).dark_gray(),
            ]),
            Line::from(skill.description),
        ])
        .wrap(Wrap { trim: true });
        frame.render_widget(detail, detail_area);
    }
}

/// Render the key help line.
pub fn render_help(frame: &mut Frame, area: Rect, accent: Color, speed: AnimationSpeed, background: bool) {
    let help = Line::from(vec![
        "q".bold().fg(accent),
        " quit  ".dark_gray(),
        "←→".bold().fg(accent),
        " category  ".dark_gray(),
        "↑↓".bold().fg(accent),
        " skill  ".dark_gray(),
        "c".bold().fg(accent),
        " color  ".dark_gray(),
        "s".bold().fg(accent),
        format!(" speed: {}  ", speed.label()).dark_gray(),
        "b".bold().fg(accent),
        if background {
            " background: on".dark_gray()
        } else {
            " background: off".dark_gray()
        },
    ])
    .centered();
    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_skills::categories;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_panel_height_fits_largest_category() {
        let largest = categories().iter().map(|c| c.skills.len()).max().unwrap();
        assert_eq!(panel_height(categories()), largest as u16 + PANEL_CHROME);
        assert_eq!(panel_height(&[]), PANEL_CHROME);
    }

    #[test]
    fn test_panel_area_is_centered_and_clamped() {
        let area = Rect::new(0, 0, 100, 40);
        let panel = panel_area(area, 20);
        assert_eq!(panel.width, PANEL_WIDTH);
        assert_eq!(panel.height, 20);
        assert_eq!(panel.x, 14);
        assert_eq!(panel.y, 10);

        let tiny = panel_area(Rect::new(0, 0, 30, 5), 20);
        assert_eq!(tiny.width, 30);
        assert_eq!(tiny.height, 5);
    }

    #[test]
    fn test_render_skills_shows_category_and_selection() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_skills(frame, area, categories(), 0, 1, Color::Cyan);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        let first = &categories()[0];
        assert!(text.contains(first.title));
        assert!(text.contains(first.skills[0].name));
        assert!(text.contains(first.skills[1].description));
    }

    #[test]
    fn test_out_of_range_category_draws_nothing() {
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_skills(frame, area, categories(), 99, 0, Color::Cyan);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        assert!(buffer.content().iter().all(|cell| cell.symbol() == " "));
    }
}
