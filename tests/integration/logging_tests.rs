//! Log stream behavior: line layout, color bracketing, atomicity under
//! contention and the lock timeout.

use std::fmt::Write as _;
use std::thread;
use std::time::{Duration, Instant};

use floodlight::logging::color::{self, BaseColor, LogColor, ERROR, NORMAL};
use floodlight::logging::LogStream;

use crate::mock_hw::{FixedClock, SharedSink, strip_ansi};

const TS: &str = "00:00:01.250";

fn stream() -> (LogStream, SharedSink) {
    let sink = SharedSink::default();
    let s = LogStream::new(sink.clone(), FixedClock(TS)).with_timestamps(true);
    (s, sink)
}

fn escape(color: LogColor) -> String {
    let mut s = String::new();
    color::write_color(&mut s, color).unwrap();
    s
}

#[test]
fn tagged_line_layout() {
    let (s, sink) = stream();
    s.emit_tagged("NET", format_args!("link up"));
    assert_eq!(sink.text(), format!("({TS}) [NET] link up\n"));
}

#[test]
fn tagged_without_timestamp_keeps_tag() {
    let (s, sink) = stream();
    let s = s.with_timestamps(false);
    s.emit_tagged("NET", format_args!("link up"));
    assert_eq!(sink.text(), "[NET] link up\n");
}

#[test]
fn six_variants() {
    let (s, sink) = stream();
    s.emit(format_args!("a"));
    s.emit_colored(ERROR, format_args!("b"));
    s.emit_timestamped(format_args!("c"));
    s.emit_colored_timestamped(ERROR, format_args!("d"));
    s.emit_tagged("T", format_args!("e"));
    s.emit_colored_tagged("T", ERROR, format_args!("f"));

    let red = escape(ERROR);
    let rst = "\x1B[0m";
    assert_eq!(
        sink.text(),
        format!(
            "a{red}b{rst}({TS}) c\n{red}({TS}) d{rst}\n({TS}) [T] e\n{red}({TS}) [T] f{rst}\n"
        )
    );
}

#[test]
fn normal_color_is_plain_reset() {
    let (colored, colored_sink) = stream();
    let (plain, plain_sink) = stream();
    colored.emit_colored(NORMAL, format_args!("hello"));
    plain.emit(format_args!("hello"));

    let raw = colored_sink.text();
    assert!(raw.starts_with("\x1B[0m"));
    assert!(!raw.contains("38;5;"), "NORMAL rendered as a palette color");
    assert_eq!(strip_ansi(&raw), plain_sink.text());
}

#[test]
fn reset_always_follows_payload() {
    let (s, sink) = stream();
    let loud = LogColor::fg(BaseColor::Magenta).bold().underline().reverse().blink();
    s.emit_colored(loud, format_args!("x"));
    s.emit(format_args!("y"));
    assert_eq!(
        sink.text(),
        "\x1B[38;5;5m\x1B[1m\x1B[4m\x1B[7m\x1B[5mx\x1B[0my"
    );
}

#[test]
fn concurrent_lines_never_interleave() {
    const THREADS: u8 = 8;
    const LINES: usize = 50;

    let (s, sink) = stream();
    let s = s.with_lock_timeout(Duration::from_secs(5));

    thread::scope(|scope| {
        for t in 0..THREADS {
            let s = &s;
            scope.spawn(move || {
                let color = LogColor::fg(BaseColor::from_code(t)).bold();
                for i in 0..LINES {
                    s.emit_colored_tagged("T", color, format_args!("thread {t} line {i}"));
                }
            });
        }
    });

    let text = sink.text();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), THREADS as usize * LINES);

    for line in lines {
        // `thread <t> line <i>` tells us which color must open the line.
        let body = strip_ansi(line);
        let t: u8 = body
            .split_whitespace()
            .nth(3)
            .and_then(|n| n.parse().ok())
            .unwrap_or_else(|| panic!("garbled line {line:?}"));
        let mut expected = escape(LogColor::fg(BaseColor::from_code(t)).bold());
        write!(expected, "({TS}) [T] {body_tail}\x1B[0m", body_tail = &body[TS.len() + 7..]).unwrap();
        assert_eq!(line, expected);
    }
}

#[test]
fn held_lock_times_out_silently() {
    let (s, sink) = stream();
    let s = s.with_lock_timeout(Duration::from_millis(20));

    let guard = s.acquire().unwrap();
    let waited = thread::scope(|scope| {
        scope
            .spawn(|| {
                let start = Instant::now();
                s.emit_colored_tagged("TASK", ERROR, format_args!("dropped"));
                start.elapsed()
            })
            .join()
            .unwrap()
    });
    drop(guard);

    assert!(waited >= Duration::from_millis(20));
    assert_eq!(sink.text(), "");

    // Released on drop: the next caller gets through.
    s.emit_tagged("TASK", format_args!("kept"));
    assert_eq!(sink.text(), format!("({TS}) [TASK] kept\n"));
}
