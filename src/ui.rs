use lib_game::{MenuSelection, Playtime, Render, Score, TextDraw};
use macroquad::prelude::*;

const MAIN_FONT_SIZE: u16 = 64;
const HOT_PINK: Color = Color::from_rgba(255, 105, 180, 255);
const LIGHT_SLATE_GRAY: Color = Color::from_rgba(119, 136, 153, 255);

static TITLE_TEXT: &str = "The Fish Game";
static START_TEXT: &str = "START";
static EXIT_TEXT: &str = "EXIT";

const TITLE_POS: Vec2 = vec2(100.0, 100.0);
const START_POS: Vec2 = vec2(100.0, 400.0);
const EXIT_POS: Vec2 = vec2(500.0, 400.0);
const SCOREBOARD_POS: Vec2 = vec2(1300.0, 75.0);
const PLAYTIME_POS: Vec2 = vec2(100.0, 75.0);

/// The highlighted option gets a marker and is greyed out.
fn option_label(text: &str, highlighted: bool) -> (String, Color) {
    if highlighted {
        (format!(">{text}"), LIGHT_SLATE_GRAY)
    } else {
        (text.to_owned(), HOT_PINK)
    }
}

/// Both options stay plain until the player moves the cursor.
pub fn menu_labels(highlight: Option<MenuSelection>) -> [(String, Color); 2] {
    [
        option_label(START_TEXT, highlight == Some(MenuSelection::Play)),
        option_label(EXIT_TEXT, highlight == Some(MenuSelection::Exit)),
    ]
}

fn text(string: String, pos: Vec2, color: Color) -> TextDraw {
    TextDraw {
        string,
        pos,
        font_size: MAIN_FONT_SIZE,
        color,
    }
}

pub fn export_menu(highlight: Option<MenuSelection>, render: &mut Render) {
    render.put_text(text(TITLE_TEXT.to_owned(), TITLE_POS, HOT_PINK));

    let [(start, start_color), (exit, exit_color)] = menu_labels(highlight);
    render.put_text(text(start, START_POS, start_color));
    render.put_text(text(exit, EXIT_POS, exit_color));
}

pub fn export_hud(score: Score, playtime: Playtime, render: &mut Render) {
    render.put_text(text(score.scoreboard(), SCOREBOARD_POS, HOT_PINK));
    render.put_text(text(playtime.display(), PLAYTIME_POS, HOT_PINK));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_marks_selection() {
        let [start, exit] = menu_labels(Some(MenuSelection::Play));
        assert_eq!(start, (">START".to_owned(), LIGHT_SLATE_GRAY));
        assert_eq!(exit, ("EXIT".to_owned(), HOT_PINK));

        let [start, exit] = menu_labels(Some(MenuSelection::Exit));
        assert_eq!(start, ("START".to_owned(), HOT_PINK));
        assert_eq!(exit, (">EXIT".to_owned(), LIGHT_SLATE_GRAY));
    }

    #[test]
    fn test_untouched_menu_is_plain() {
        let [start, exit] = menu_labels(None);
        assert_eq!(start, ("START".to_owned(), HOT_PINK));
        assert_eq!(exit, ("EXIT".to_owned(), HOT_PINK));
    }
}
