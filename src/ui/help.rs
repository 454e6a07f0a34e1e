use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub struct HelpSection {
    pub title: &'static str,
    pub items: &'static [(&'static str, &'static str)],
}

pub const SECTIONS: &[HelpSection] = &[
    HelpSection {
        title: "Cards:",
        items: &[
            ("a/n    ", "Add a card"),
            ("⇥/⇧⇥   ", "Select next / previous card"),
            ("e/⏎    ", "Edit selected card"),
            ("d/Del  ", "Delete selected card"),
            ("hjkl   ", "Nudge selected card"),
            ("c      ", "Connect selected card to another"),
            ("c … x  ", "Remove the connection to the chosen card"),
        ],
    },
    HelpSection {
        title: "Editing:",
        items: &[
            ("⏎      ", "Next field / new line"),
            ("⇥      ", "Switch between title and content"),
            ("^S     ", "Save changes"),
            ("Esc    ", "Discard changes"),
            ("^W ^U ^K", "Delete word / to start / to end"),
            ("^V     ", "Paste"),
        ],
    },
    HelpSection {
        title: "View:",
        items: &[
            ("←↓↑→   ", "Pan"),
            ("+/-    ", "Zoom in / out"),
            ("0      ", "Fit all cards"),
            ("m      ", "Toggle minimap"),
        ],
    },
    HelpSection {
        title: "Mouse:",
        items: &[
            ("click  ", "Select card"),
            ("dbl-click", "Edit card"),
            ("drag   ", "Move card, or pan on empty canvas"),
            ("drag •  ", "Connect from a card's bottom edge"),
            ("wheel  ", "Zoom at pointer"),
        ],
    },
    HelpSection {
        title: "General:",
        items: &[("?      ", "Help"), ("q/^C   ", "Quit")],
    },
];

const POPUP_WIDTH: u16 = 60;

pub struct HelpRenderer;

impl HelpRenderer {
    /// Draws the key reference as a popup centred on `area`, over whatever
    /// is already there.
    pub fn render(frame: &mut Frame, area: Rect) {
        let lines = Self::build_help_text();
        let popup = Self::popup_area(area, lines.len() as u16 + 2);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Help ");
        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });

        frame.render_widget(Clear, popup);
        frame.render_widget(paragraph, popup);
    }

    fn popup_area(area: Rect, height: u16) -> Rect {
        let width = POPUP_WIDTH.min(area.width);
        let height = height.min(area.height);
        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        )
    }

    fn build_help_text() -> Vec<Line<'static>> {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let key_style = Style::default().fg(Color::Cyan);

        let mut lines = vec![
            Line::from(Span::styled("Bulletin Board Help", bold)),
            Line::from(""),
        ];
        for section in SECTIONS {
            lines.push(Line::from(Span::styled(section.title, bold)));
            lines.extend(section.items.iter().map(|(key, desc)| {
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(*key, key_style),
                    Span::raw("  "),
                    Span::raw(*desc),
                ])
            }));
            lines.push(Line::from(""));
        }
        lines.push(Line::from("Press ESC or q to close help"));
        lines
    }
}
