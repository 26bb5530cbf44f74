use std::fmt;
use std::sync::{LazyLock, Mutex};

use macroquad::prelude::*;

const DUMP_LINE_CAPACITY: usize = 255;
const DUMP_CAPACITY: usize = 100;
const DUMP_FONT_SIZE: u16 = 20;

pub static GLOBAL_DUMP: LazyLock<ScreenDump> = LazyLock::new(ScreenDump::new);

/// Puts a formatted line into the per-frame value overlay.
#[macro_export]
macro_rules! dump {
    ($($arg:tt)+) => {
        $crate::GLOBAL_DUMP.put_line(format_args!($($arg)+))
    };
}

/// A per-frame list of debug values. Lines are
/// collected during the frame with [dump] and drawn
/// at its end. [ScreenDump::new_frame] forgets them.
pub struct ScreenDump(Mutex<ScreenDumpBuff>);

impl ScreenDump {
    pub fn new() -> Self {
        ScreenDump(Mutex::new(ScreenDumpBuff::new()))
    }

    pub fn put_line(&self, args: fmt::Arguments) {
        let Ok(mut buff) = self.0.lock() else {
            return;
        };
        let Some(line) = buff.get_next_line() else {
            return;
        };
        let _ = fmt::write(line, args);
    }

    pub fn new_frame() {
        GLOBAL_DUMP.reset();
    }

    pub fn reset(&self) {
        if let Ok(mut buff) = self.0.lock() {
            buff.reset();
        }
    }

    pub fn line_count(&self) -> usize {
        self.0.lock().map(|buff| buff.next_line).unwrap_or(0)
    }

    /// Draws the dumped lines along the right edge of the screen.
    pub fn draw(&self) {
        let Ok(buff) = self.0.lock() else {
            return;
        };

        set_default_camera();

        let mut y = DUMP_FONT_SIZE as f32;
        for line in buff.lines() {
            let width = measure_text(line, None, DUMP_FONT_SIZE, 1.0).width;
            draw_rectangle(
                screen_width() - width,
                y - DUMP_FONT_SIZE as f32,
                width,
                DUMP_FONT_SIZE as f32,
                Color::new(0.0, 0.0, 0.0, 0.6),
            );
            draw_text(
                line,
                screen_width() - width,
                y,
                DUMP_FONT_SIZE as f32,
                WHITE,
            );
            y += DUMP_FONT_SIZE as f32;
        }
    }
}

impl Default for ScreenDump {
    fn default() -> Self {
        ScreenDump::new()
    }
}

struct ScreenDumpBuff {
    lines: Vec<String>,
    next_line: usize,
}

impl ScreenDumpBuff {
    fn new() -> Self {
        ScreenDumpBuff {
            lines: Vec::with_capacity(DUMP_CAPACITY),
            next_line: 0,
        }
    }

    fn get_next_line(&mut self) -> Option<&mut String> {
        if self.next_line >= DUMP_CAPACITY {
            return None;
        }
        if self.next_line >= self.lines.len() {
            self.lines.push(String::with_capacity(DUMP_LINE_CAPACITY));
        }
        let res = &mut self.lines[self.next_line];
        self.next_line += 1;
        Some(res)
    }

    fn reset(&mut self) {
        self.next_line = 0;
        self.lines.iter_mut().for_each(String::clear);
    }

    fn lines(&self) -> impl Iterator<Item = &String> {
        self.lines.iter().take(self.next_line)
    }
}
