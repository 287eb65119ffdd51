//! # RecommendationTable Component
//!
//! Renders a `Ranking` in one of two display modes:
//!
//! - **Table**: every crop with its probability as a percentage.
//! - **Podium**: the top three crops labeled 1st/2nd/3rd, no score.
//!
//! An empty ranking renders the "no recommendations" hint instead.

use chrono::{DateTime, Local};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Cell, Paragraph, Row, Table};

use crate::DisplayMode;
use crate::core::ranking::{EMPTY_MESSAGE, Ranking, format_probability};
use crate::tui::component::Component;

pub struct RecommendationTable<'a> {
    pub ranking: &'a Ranking,
    pub mode: DisplayMode,
    pub updated_at: Option<DateTime<Local>>,
}

impl<'a> RecommendationTable<'a> {
    pub fn new(ranking: &'a Ranking, mode: DisplayMode) -> Self {
        Self {
            ranking,
            mode,
            updated_at: None,
        }
    }

    pub fn updated_at(mut self, updated_at: Option<DateTime<Local>>) -> Self {
        self.updated_at = updated_at;
        self
    }

    fn block(&self) -> Block<'static> {
        let title = match self.mode {
            DisplayMode::Table => " Recommended Crops ",
            DisplayMode::Podium => " Top Recommended Crops ",
        };
        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Green))
            .title(title);
        if let Some(ts) = self.updated_at {
            block = block.title_bottom(
                Line::from(format!(" updated {} ", ts.format("%H:%M:%S"))).right_aligned(),
            );
        }
        block
    }

    fn header_style() -> Style {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    }

    /// Zebra striping for readability on wide lists.
    fn row_style(index: usize) -> Style {
        if index % 2 == 1 {
            Style::default().bg(Color::Rgb(20, 40, 20))
        } else {
            Style::default()
        }
    }

    fn full_table(&self) -> Table<'a> {
        let rows = self.ranking.entries().iter().enumerate().map(|(i, entry)| {
            Row::new(vec![
                Cell::from(entry.crop.as_str()),
                Cell::from(format_probability(entry.probability)),
            ])
            .style(Self::row_style(i))
        });

        Table::new(rows, [Constraint::Fill(1), Constraint::Length(20)])
            .header(Row::new(vec!["CROP", "PROBABILITY SCORE"]).style(Self::header_style()))
            .column_spacing(2)
    }

    fn podium(&self) -> Table<'a> {
        let rows = self
            .ranking
            .top_three()
            .into_iter()
            .enumerate()
            .map(|(i, entry)| {
                let rank_style = match i {
                    0 => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    1 => Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
                    _ => Style::default().fg(Color::Rgb(205, 127, 50)).add_modifier(Modifier::BOLD),
                };
                Row::new(vec![
                    Cell::from(entry.label).style(rank_style),
                    Cell::from(entry.crop.to_string()),
                ])
                .style(Self::row_style(i))
            })
            .collect::<Vec<_>>();

        Table::new(rows, [Constraint::Length(6), Constraint::Fill(1)])
            .header(Row::new(vec!["RANK", "CROP"]).style(Self::header_style()))
            .column_spacing(2)
    }
}

impl Component for RecommendationTable<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = self.block();

        if self.ranking.is_empty() {
            let hint = Paragraph::new(EMPTY_MESSAGE)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(hint, area);
            return;
        }

        let table = match self.mode {
            DisplayMode::Table => self.full_table(),
            DisplayMode::Podium => self.podium(),
        };
        frame.render_widget(table.block(block), area);
    }
}
