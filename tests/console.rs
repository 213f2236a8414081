//! Console facility output, captured through an injected writer.

use logtree::fmt::ansi::RESET;
use logtree::{Facility, Level, Logger};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Capture {
    fn lines(&self) -> Vec<String> {
        String::from_utf8(self.0.lock().unwrap().clone())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

fn captured_root(color_capable: bool) -> (Arc<Logger>, Capture) {
    let capture = Capture::default();
    let root = Logger::builder()
        .process_name("consoletest")
        .color_capable(color_capable)
        .console_writer(capture.clone())
        .build();
    (root, capture)
}

fn without_timestamp(line: &str) -> &str {
    line.split_once(' ').unwrap().1
}

#[test]
fn plain_lines_without_color() {
    let (root, capture) = captured_root(false);
    root.child("UI").warning().append("low disk").finish();

    let lines = capture.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(without_timestamp(&lines[0]), "[WARNING] [UI] low disk");
    assert!(!lines[0].contains('\x1b'));
}

#[test]
fn colored_lines_use_severity_palette() {
    let (root, capture) = captured_root(true);
    root.set_level(Level::Debug);

    root.log(Level::Critical, "c");
    root.log(Level::Error, "e");
    root.log(Level::Warning, "w");
    root.log(Level::Info, "i");
    root.log(Level::Debug, "d");

    let lines = capture.lines();
    let prefixes = ["\x1b[1m\x1b[31m", "\x1b[1m\x1b[35m", "\x1b[1m\x1b[33m", "\x1b[39m", "\x1b[32m"];
    for (line, prefix) in lines.iter().zip(prefixes) {
        assert!(line.starts_with(prefix), "{line:?}");
        assert!(line.ends_with(RESET), "{line:?}");
    }
    assert_eq!(lines.len(), 5);
}

#[test]
fn colorize_off_strips_escapes() {
    let (root, capture) = captured_root(true);
    root.colorize(false);
    root.log(Level::Error, "plain");
    assert!(!capture.lines()[0].contains('\x1b'));
}

#[test]
fn console_copy_accompanies_file_output() {
    let tmp = TempDir::new().unwrap();
    let (root, capture) = captured_root(false);
    root.set_facility(Facility::File, Some(&tmp.path().join("x.log")))
        .unwrap();

    root.log(Level::Info, "file only");
    root.log_console(Level::Info, "file and console", true);

    let lines = capture.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("[INFO] file and console"));
}

#[test]
fn disabled_facility_suppresses_console_copies() {
    let (root, capture) = captured_root(false);
    root.set_facility(Facility::None, None).unwrap();
    root.console().append("nothing").finish();
    assert!(capture.lines().is_empty());
}
