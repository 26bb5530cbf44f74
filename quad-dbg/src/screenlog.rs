use core::fmt;
use std::fmt::Write;
use std::sync::{LazyLock, Mutex};

use log::{Level, LevelFilter, Log, Metadata, Record};
use macroquad::miniquad::date::now;
use macroquad::prelude::*;

const LOG_FONT_SIZE: u16 = 16;
const LOG_MSG_LIFE: f64 = 3.0;
const LOG_MSG_CAP: usize = 30;
const LOG_LINE_CAPACITY: usize = 255;

#[derive(Clone)]
struct LogMsg {
    color: Color,
    line: String,
    spawn_time: f64,
}

struct LogRing {
    cur: usize,
    msgs: [LogMsg; LOG_MSG_CAP],
}

impl LogRing {
    fn new() -> Self {
        Self {
            cur: 0,
            msgs: std::array::from_fn(|_| LogMsg {
                line: String::with_capacity(LOG_LINE_CAPACITY),
                spawn_time: f64::NEG_INFINITY,
                color: WHITE,
            }),
        }
    }

    fn put(&mut self, msg: &fmt::Arguments, color: Color, time: f64) {
        let cell = &mut self.msgs[self.cur];

        cell.line.clear();
        // Writing into a String can't fail
        let _ = write!(&mut cell.line, "{}", msg);
        cell.spawn_time = time;
        cell.color = color;

        self.cur = (self.cur + 1) % LOG_MSG_CAP;
    }

    /// Messages younger than [LOG_MSG_LIFE], oldest first.
    fn alive(&self, time: f64) -> impl Iterator<Item = &LogMsg> + '_ {
        let (newer, older) = self.msgs.split_at(self.cur);
        older
            .iter()
            .chain(newer.iter())
            .filter(move |msg| msg.spawn_time + LOG_MSG_LIFE >= time)
    }
}

static LOG_RING: LazyLock<Mutex<LogRing>> = LazyLock::new(|| Mutex::new(LogRing::new()));

#[derive(Clone, Copy, Debug)]
struct OnScreenLog;

static ON_SCREEN_LOG: OnScreenLog = OnScreenLog;

impl Log for OnScreenLog {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let color = match record.level() {
            Level::Error => RED,
            Level::Warn => YELLOW,
            Level::Info => GREEN,
            Level::Debug => WHITE,
            Level::Trace => GRAY,
        };

        eprintln!("[{}] {}", record.level(), record.args());

        let Ok(mut ring) = LOG_RING.lock() else {
            return;
        };
        ring.put(record.args(), color, now());
    }

    fn flush(&self) { /* NOOP */ }
}

/// Installs the on-screen logger. Every record is also echoed to stderr.
/// The logger does not touch the macroquad context, so it is safe
/// to install it before the window is created.
pub fn init_on_screen_log(level: LevelFilter) {
    if log::set_logger(&ON_SCREEN_LOG).is_ok() {
        log::set_max_level(level);
    }
}

/// Draws the recent log messages in the top-left corner
/// of the screen.
pub fn draw_on_screen_log() {
    let Ok(ring) = LOG_RING.lock() else {
        return;
    };

    set_default_camera();

    let time = now();
    let mut y = LOG_FONT_SIZE as f32;
    for msg in ring.alive(time) {
        draw_text(&msg.line, 0.0, y, LOG_FONT_SIZE as f32, msg.color);
        y += LOG_FONT_SIZE as f32;
    }
}
