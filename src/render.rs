//! Text layout of month grids for the terminal.
//!
//! Every month is rendered as a block of lines of identical visible width
//! ([`MONTH_WIDTH`]), so blocks can be placed side by side by plain joining.
//! Widths are always measured on the uncoloured text; styling is applied
//! after padding is decided. Whether styles reach the output is up to
//! `colored`, which also honours `NO_COLOR`, `CLICOLOR` and the terminal check.

use colored::Colorize;
use tracing::trace;

use crate::JalaliDate;
use crate::consts::{DAYS_IN_WEEK, ESFAND, FARVARDIN, MONTH_NAMES, NO_DAY, WEEKDAY_NAMES};
use crate::grid::{month_calendar, next_month, previous_month};
use crate::request::{DisplayMode, Request};

/// How a cell is painted when colour is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Plain,
    Header,
    Weekday,
    Today,
}

const COLUMN_GAP: &str = "  ";
const MONTH_GAP: &str = "  ";
const MONTHS_PER_ROW: usize = 3;

const fn longest(names: &[&str]) -> usize {
    let mut longest = 0;
    let mut i = 0;
    while i < names.len() {
        if names[i].len() > longest {
            longest = names[i].len();
        }
        i += 1;
    }
    longest
}

/// Width of one day column
const COLUMN_WIDTH: usize = longest(&WEEKDAY_NAMES);

/// Visible width of a month block
const MONTH_WIDTH: usize = DAYS_IN_WEEK * COLUMN_WIDTH + (DAYS_IN_WEEK - 1) * COLUMN_GAP.len();

/// Visible width of a row of months in the full-year view
const YEAR_WIDTH: usize = MONTHS_PER_ROW * MONTH_WIDTH + (MONTHS_PER_ROW - 1) * MONTH_GAP.len();

/// Formats month grids as text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Renderer {
    color: bool,
    today: Option<JalaliDate>,
}

impl Renderer {
    /// A renderer without colour and without a highlighted date
    pub const fn new() -> Self {
        Self {
            color: false,
            today: None,
        }
    }

    /// Enables or disables styling
    pub const fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Highlights `today` wherever it appears
    pub const fn with_today(mut self, today: JalaliDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Renders a resolved request in its display mode.
    pub fn render(&self, request: &Request) -> String {
        let year = request.year.get();
        let month = request.month.get();
        match request.mode {
            DisplayMode::Month => self.month(year, month),
            DisplayMode::ThreeMonths => self.three_months(year, month),
            DisplayMode::Year => self.year(year),
        }
    }

    /// A single month headed by its name and year.
    pub fn month(&self, year: i32, month: u8) -> String {
        let title = format!("{} {year}", month_name(month));
        join_lines(&self.month_lines(year, month, &title))
    }

    /// The month before, the month itself and the month after, side by side.
    ///
    /// A neighbour outside the supported years is left out.
    pub fn three_months(&self, year: i32, month: u8) -> String {
        let blocks: Vec<Vec<String>> = [
            previous_month(year, month),
            Some((year, month)),
            next_month(year, month),
        ]
        .into_iter()
        .flatten()
        .map(|(year, month)| self.month_lines(year, month, month_name(month)))
        .collect();

        join_lines(&side_by_side(&blocks, tallest(&blocks)))
    }

    /// The whole year in four rows of three months.
    pub fn year(&self, year: i32) -> String {
        let blocks: Vec<Vec<String>> = (FARVARDIN..=ESFAND)
            .map(|month| self.month_lines(year, month, month_name(month)))
            .collect();
        let height = tallest(&blocks);

        let mut lines = vec![self.title(&year.to_string(), YEAR_WIDTH), String::new()];
        for row in blocks.chunks(MONTHS_PER_ROW) {
            lines.extend(side_by_side(row, height));
            lines.push(String::new());
        }
        join_lines(&lines)
    }

    /// Header, weekday names and one line per week.
    fn month_lines(&self, year: i32, month: u8, title: &str) -> Vec<String> {
        let grid = month_calendar(year, month);
        trace!(year, month, weeks = grid.week_count(), "laying out month");

        let mut lines = Vec::with_capacity(grid.week_count() + 2);
        lines.push(self.cell(title, MONTH_WIDTH, Style::Header));
        lines.push(row(WEEKDAY_NAMES
            .iter()
            .map(|name| self.cell(name, COLUMN_WIDTH, Style::Weekday))));
        for week in grid.weeks() {
            lines.push(row(week.iter().map(|&day| self.day_cell(year, month, day))));
        }
        lines
    }

    fn day_cell(&self, year: i32, month: u8, day: u8) -> String {
        if day == NO_DAY {
            return " ".repeat(COLUMN_WIDTH);
        }
        let style = if self.today == Some(JalaliDate::new(year, month, day)) {
            Style::Today
        } else {
            Style::Plain
        };
        self.cell(&day.to_string(), COLUMN_WIDTH, style)
    }

    /// `text` centred in `width` columns, padded on both sides.
    fn cell(&self, text: &str, width: usize, style: Style) -> String {
        let free = width.saturating_sub(text.len());
        let left = free / 2;
        format!(
            "{}{}{}",
            " ".repeat(left),
            self.paint(text, style),
            " ".repeat(free - left)
        )
    }

    /// `text` centred in `width` columns without trailing padding.
    fn title(&self, text: &str, width: usize) -> String {
        let left = width.saturating_sub(text.len()) / 2;
        format!("{}{}", " ".repeat(left), self.paint(text, Style::Header))
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if !self.color {
            return text.to_owned();
        }
        match style {
            Style::Plain => text.to_owned(),
            Style::Header => text.cyan().bold().to_string(),
            Style::Weekday => text.bright_white().bold().to_string(),
            Style::Today => text.yellow().bold().to_string(),
        }
    }
}

fn month_name(month: u8) -> &'static str {
    MONTH_NAMES[usize::from(month) - 1]
}

fn row(cells: impl Iterator<Item = String>) -> String {
    cells.collect::<Vec<_>>().join(COLUMN_GAP)
}

fn tallest(blocks: &[Vec<String>]) -> usize {
    blocks.iter().map(Vec::len).max().unwrap_or(0)
}

/// Joins blocks line by line, padding shorter blocks with blank lines.
fn side_by_side(blocks: &[Vec<String>], height: usize) -> Vec<String> {
    let blank = " ".repeat(MONTH_WIDTH);
    (0..height)
        .map(|i| {
            blocks
                .iter()
                .map(|block| block.get(i).map_or(blank.as_str(), String::as_str))
                .collect::<Vec<_>>()
                .join(MONTH_GAP)
        })
        .collect()
}

fn join_lines(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Month, Year};

    const HEADER_COLOR: &str = "\x1b[1;36m";
    const WEEKDAY_COLOR: &str = "\x1b[1;97m";
    const TODAY_COLOR: &str = "\x1b[1;33m";
    const RESET_COLOR: &str = "\x1b[0m";

    /// Test output is not a terminal, so styling has to be forced on.
    fn colored_renderer() -> Renderer {
        colored::control::set_override(true);
        Renderer::new().with_color(true)
    }

    #[test]
    fn test_widths() {
        assert_eq!(COLUMN_WIDTH, 6);
        assert_eq!(MONTH_WIDTH, 54);
        assert_eq!(YEAR_WIDTH, 166);
    }

    #[test]
    fn test_single_month_layout() {
        let out = Renderer::new().month(1404, 1);
        let lines: Vec<&str> = out.lines().collect();

        // header, weekday names, six weeks
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0].trim(), "Farvardin 1404");
        assert_eq!(
            lines[1].split_whitespace().collect::<Vec<_>>(),
            WEEKDAY_NAMES.to_vec()
        );
        for line in &lines {
            assert_eq!(line.len(), MONTH_WIDTH, "{line:?}");
        }

        // 1 Farvardin 1404 is a Friday: last column, centred in its cell
        assert_eq!(lines[2].trim(), "1");
        assert_eq!(lines[2].find('1'), Some(6 * (COLUMN_WIDTH + 2) + 2));
        assert_eq!(
            lines[3].split_whitespace().collect::<Vec<_>>(),
            ["2", "3", "4", "5", "6", "7", "8"]
        );
        assert_eq!(lines[7].split_whitespace().collect::<Vec<_>>(), ["30", "31"]);
    }

    #[test]
    fn test_plain_output_has_no_escape_codes() {
        let renderer = Renderer::new().with_today(JalaliDate::new(1404, 1, 1));
        assert!(!renderer.month(1404, 1).contains('\x1b'));
        assert!(!renderer.year(1404).contains('\x1b'));
    }

    #[test]
    fn test_colored_header_and_today() {
        let renderer = colored_renderer().with_today(JalaliDate::new(1404, 1, 15));
        let out = renderer.month(1404, 1);
        assert!(out.contains(&format!("{HEADER_COLOR}Farvardin 1404{RESET_COLOR}")));
        assert!(out.contains(&format!("{WEEKDAY_COLOR}Shanbe{RESET_COLOR}")));
        assert!(out.contains(&format!("{TODAY_COLOR}15{RESET_COLOR}")));
        assert_eq!(out.matches(TODAY_COLOR).count(), 1);
    }

    #[test]
    fn test_styling_does_not_change_layout() {
        let styled = colored_renderer()
            .with_today(JalaliDate::new(1404, 1, 15))
            .three_months(1404, 1);
        let stripped = [HEADER_COLOR, WEEKDAY_COLOR, TODAY_COLOR, RESET_COLOR]
            .iter()
            .fold(styled, |out, code| out.replace(code, ""));
        assert_eq!(stripped, Renderer::new().three_months(1404, 1));
    }

    #[test]
    fn test_today_only_on_exact_date() {
        // same day and month, different year
        let renderer = colored_renderer().with_today(JalaliDate::new(1403, 1, 15));
        assert!(!renderer.month(1404, 1).contains(TODAY_COLOR));
    }

    #[test]
    fn test_three_months() {
        let out = Renderer::new().three_months(1404, 1);
        let lines: Vec<&str> = out.lines().collect();

        let headers: Vec<&str> = lines[0].split_whitespace().collect();
        assert_eq!(headers, ["Esfand", "Farvardin", "Ordibehesht"]);

        // Farvardin 1404 has the most weeks (6)
        assert_eq!(lines.len(), 8);
        for line in &lines {
            assert_eq!(line.len(), YEAR_WIDTH);
        }
    }

    #[test]
    fn test_three_months_at_first_year() {
        let out = Renderer::new().three_months(1, 1);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines[0].split_whitespace().collect::<Vec<_>>(),
            ["Farvardin", "Ordibehesht"]
        );
        assert_eq!(lines[0].len(), 2 * MONTH_WIDTH + MONTH_GAP.len());
    }

    #[test]
    fn test_full_year() {
        let out = Renderer::new().year(1404);
        let lines: Vec<&str> = out.lines().collect();
        let height = 2 + (1..=12)
            .map(|m| month_calendar(1404, m).week_count())
            .max()
            .unwrap();

        assert_eq!(lines[0].trim(), "1404");
        assert!(lines[1].is_empty());
        assert_eq!(lines.len(), 2 + 4 * (height + 1));

        let quarter_headers: Vec<Vec<&str>> = (0..4)
            .map(|q| lines[2 + q * (height + 1)].split_whitespace().collect())
            .collect();
        assert_eq!(quarter_headers[0], ["Farvardin", "Ordibehesht", "Khordad"]);
        assert_eq!(quarter_headers[1], ["Tir", "Mordad", "Shahrivar"]);
        assert_eq!(quarter_headers[2], ["Mehr", "Aban", "Azar"]);
        assert_eq!(quarter_headers[3], ["Dey", "Bahman", "Esfand"]);

        for q in 0..4 {
            let start = 2 + q * (height + 1);
            for line in &lines[start..start + height] {
                assert_eq!(line.len(), YEAR_WIDTH);
            }
            assert!(lines[start + height].is_empty());
        }
    }

    #[test]
    fn test_render_dispatch() {
        let renderer = Renderer::new();
        let request = |mode| Request {
            mode,
            year: Year::new(1404).unwrap(),
            month: Month::new(7).unwrap(),
        };
        assert_eq!(
            renderer.render(&request(DisplayMode::Month)),
            renderer.month(1404, 7)
        );
        assert_eq!(
            renderer.render(&request(DisplayMode::ThreeMonths)),
            renderer.three_months(1404, 7)
        );
        assert_eq!(
            renderer.render(&request(DisplayMode::Year)),
            renderer.year(1404)
        );
    }
}
