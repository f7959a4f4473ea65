use std::time::Duration;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use tracing::trace;
use crate::config::HeatmapConfig;
use crate::grid::{hit_test, Cell};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum HoverState {
    #[default]
    None,
    Hovering(Cell),
}

/// What the host shows while a cell is hovered.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub date_label: String,
    pub temperature_label: String,
    /// Top-left corner of the tooltip, in chart pixels.
    pub anchor: DVec2,
}

impl TooltipContent {
    pub fn for_cell(cell: &Cell, offset: DVec2) -> Self {
        TooltipContent {
            date_label: cell.tooltip_date.clone(),
            temperature_label: cell.tooltip_temperature.clone(),
            anchor: cell.top_left() + offset,
        }
    }

    pub fn to_html(&self) -> String {
        format!(
            "<div><span class='date'>{}</span><br /><span class='temperature'>{}</span></div>",
            self.date_label, self.temperature_label
        )
    }
}

/// An opacity animation handed to the host. A newer fade on the same element
/// replaces the one in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    pub target_opacity: f64,
    pub duration: Duration,
}

/// Hover bookkeeping for one chart. Holds at most one hovered cell.
#[derive(Debug, Clone)]
pub struct Interaction {
    hover: HoverState,
    tooltip_offset: DVec2,
    tooltip_opacity: f64,
    fade_duration: Duration,
    tooltip_fade: Option<Fade>,
    overlay_fade: Option<Fade>,
}

impl Interaction {
    pub fn new(config: &HeatmapConfig) -> Self {
        Interaction {
            hover: HoverState::None,
            tooltip_offset: config.layout.tooltip_offset,
            tooltip_opacity: config.tooltip_opacity,
            fade_duration: config.fade_duration(),
            tooltip_fade: None,
            overlay_fade: None,
        }
    }

    pub fn hover_state(&self) -> &HoverState {
        &self.hover
    }

    pub fn tooltip_fade(&self) -> Option<Fade> {
        self.tooltip_fade
    }

    pub fn overlay_fade(&self) -> Option<Fade> {
        self.overlay_fade
    }

    /// Pointer entered `cell`. Replaces any previous hover.
    pub fn on_cell_hover(&mut self, cell: &Cell) -> TooltipContent {
        trace!("hover {:?}", cell.key());
        self.hover = HoverState::Hovering(cell.clone());
        self.tooltip_fade = Some(Fade {
            target_opacity: self.tooltip_opacity,
            duration: self.fade_duration,
        });
        TooltipContent::for_cell(cell, self.tooltip_offset)
    }

    /// Pointer left the hovered cell: fade tooltip and overlay out.
    pub fn on_cell_unhover(&mut self) {
        trace!("unhover");
        self.hover = HoverState::None;
        let hidden = Fade { target_opacity: 0.0, duration: self.fade_duration };
        self.tooltip_fade = Some(hidden);
        self.overlay_fade = Some(hidden);
    }

    /// Polled alternative to the callbacks: hit-test `point` against `cells`
    /// and hover or unhover accordingly. Returns the tooltip when a cell is
    /// under the pointer.
    pub fn on_pointer_move(&mut self, cells: &[Cell], point: DVec2) -> Option<TooltipContent> {
        match hit_test(cells, point) {
            Some(cell) => Some(self.on_cell_hover(cell)),
            None => {
                if matches!(self.hover, HoverState::Hovering(_)) {
                    self.on_cell_unhover();
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::dataset::Observation;

    fn cell(year: i32, month: u32, x: f64, y: f64) -> Cell {
        Cell {
            observation: Observation::new(year, month, 0.5),
            temperature: 9.16,
            x,
            y,
            width: 4.0,
            height: 37.5,
            color: Color::rgb(0xf7, 0xf7, 0xf7),
            tooltip_date: format!("{} - March", year),
            tooltip_temperature: "9.2\u{2103}".to_string(),
        }
    }

    #[test]
    fn test_hover_builds_tooltip_at_offset() {
        let mut interaction = Interaction::new(&HeatmapConfig::default());
        let target = cell(1900, 3, 100.0, 125.0);

        let tooltip = interaction.on_cell_hover(&target);

        assert_eq!(tooltip.anchor, DVec2::new(130.0, 130.0));
        assert_eq!(tooltip.date_label, "1900 - March");
        assert_eq!(tooltip.temperature_label, "9.2\u{2103}");
        assert_eq!(interaction.hover_state(), &HoverState::Hovering(target));
        assert_eq!(
            interaction.tooltip_fade(),
            Some(Fade { target_opacity: 0.9, duration: Duration::from_millis(200) })
        );
        assert!(interaction.overlay_fade().is_none());
    }

    #[test]
    fn test_unhover_hides_tooltip_and_overlay() {
        let mut interaction = Interaction::new(&HeatmapConfig::default());
        interaction.on_cell_hover(&cell(1900, 3, 100.0, 125.0));
        interaction.on_cell_unhover();

        assert_eq!(interaction.hover_state(), &HoverState::None);
        assert_eq!(interaction.tooltip_fade().unwrap().target_opacity, 0.0);
        assert_eq!(interaction.overlay_fade().unwrap().target_opacity, 0.0);
    }

    #[test]
    fn test_new_hover_replaces_previous() {
        let mut interaction = Interaction::new(&HeatmapConfig::default());
        interaction.on_cell_hover(&cell(1900, 3, 100.0, 125.0));
        let second = cell(1901, 3, 104.0, 125.0);
        interaction.on_cell_hover(&second);

        assert_eq!(interaction.hover_state(), &HoverState::Hovering(second));
    }

    #[test]
    fn test_pointer_move_hovers_and_unhovers() {
        let mut interaction = Interaction::new(&HeatmapConfig::default());
        let cells = vec![cell(1900, 3, 100.0, 125.0), cell(1901, 3, 104.0, 125.0)];

        let tooltip = interaction.on_pointer_move(&cells, DVec2::new(105.0, 130.0)).unwrap();
        assert_eq!(tooltip.date_label, "1901 - March");

        assert!(interaction.on_pointer_move(&cells, DVec2::new(0.0, 0.0)).is_none());
        assert_eq!(interaction.hover_state(), &HoverState::None);
        assert_eq!(interaction.tooltip_fade().unwrap().target_opacity, 0.0);
    }

    #[test]
    fn test_pointer_move_over_empty_space_before_any_hover() {
        let mut interaction = Interaction::new(&HeatmapConfig::default());
        assert!(interaction.on_pointer_move(&[], DVec2::ZERO).is_none());
        assert!(interaction.tooltip_fade().is_none());
    }

    #[test]
    fn test_tooltip_html() {
        let tooltip = TooltipContent::for_cell(&cell(1753, 3, 0.0, 0.0), DVec2::new(30.0, 5.0));
        assert_eq!(
            tooltip.to_html(),
            "<div><span class='date'>1753 - March</span><br /><span class='temperature'>9.2\u{2103}</span></div>"
        );
    }
}
