//! Theme constants for the Gomoku GUI

use egui::Color32;

// Board colors - warm wood tones
pub const BOARD_BG: Color32 = Color32::from_rgb(222, 184, 135); // Burlywood
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 40, 20);
pub const STAR_POINT: Color32 = Color32::from_rgb(50, 35, 20);

// Stone colors
pub const BLACK_STONE: Color32 = Color32::from_rgb(25, 25, 30);
pub const BLACK_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const WHITE_STONE: Color32 = Color32::from_rgb(250, 250, 252);
pub const WHITE_STONE_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

// Panel colors - dark theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Button colors
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 40.0;
pub const STONE_RADIUS_RATIO: f32 = 0.45;
pub const STAR_POINT_RADIUS: f32 = 4.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;

/// Star point coordinates (0-indexed) for a board side.
///
/// Boards of 13 and up use the 4th line, smaller boards the 3rd; boards under
/// 7 only get the center point when they have one.
#[allow(clippy::cast_possible_truncation)]
pub fn star_points(size: usize) -> Vec<(u8, u8)> {
    if size < 7 {
        let c = (size / 2) as u8;
        return if size % 2 == 1 { vec![(c, c)] } else { Vec::new() };
    }
    let edge = if size >= 13 { 3 } else { 2 };
    let lines = [edge, size / 2, size - 1 - edge];
    lines
        .iter()
        .flat_map(|&r| lines.iter().map(move |&c| (r as u8, c as u8)))
        .collect()
}

/// Column label: letters for the first 26 columns, numbers after that.
#[allow(clippy::cast_possible_truncation)]
pub fn column_label(col: usize) -> String {
    if col < 26 {
        char::from(b'A' + col as u8).to_string()
    } else {
        (col + 1).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_points_standard_board() {
        let points = star_points(19);
        assert_eq!(points.len(), 9);
        assert!(points.contains(&(3, 3)));
        assert!(points.contains(&(9, 9)));
        assert!(points.contains(&(15, 15)));
    }

    #[test]
    fn test_star_points_small_boards() {
        assert_eq!(star_points(5), vec![(2, 2)]);
        assert!(star_points(4).is_empty());
        assert!(star_points(9).contains(&(2, 6)));
    }

    #[test]
    fn test_column_label() {
        assert_eq!(column_label(0), "A");
        assert_eq!(column_label(25), "Z");
        assert_eq!(column_label(26), "27");
    }
}
