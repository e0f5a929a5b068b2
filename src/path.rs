//! Path data rewriting from the font's y-up space to the sprite's y-down space.

use std::fmt;
use std::sync::OnceLock;

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// How a command's arguments hold y coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flip {
    /// `M L Q C T S`: x,y pairs.
    Pairs,
    RelativePairs,
    /// `V`: y only.
    Vertical,
    RelativeVertical,
    /// `A`: rx ry rotation large-arc sweep x y.
    Arc,
    RelativeArc,
    /// `H h Z z`
    Keep,
}

impl Flip {
    fn for_command(command: char) -> Flip {
        match command {
            'M' | 'L' | 'Q' | 'C' | 'T' | 'S' => Flip::Pairs,
            'm' | 'l' | 'q' | 'c' | 't' | 's' => Flip::RelativePairs,
            'V' => Flip::Vertical,
            'v' => Flip::RelativeVertical,
            'A' => Flip::Arc,
            'a' => Flip::RelativeArc,
            _ => Flip::Keep,
        }
    }

    fn apply(self, index: usize, value: f64, y_offset: f64) -> f64 {
        match self {
            Flip::Pairs if index % 2 == 1 => y_offset - value,
            Flip::RelativePairs if index % 2 == 1 => -value,
            Flip::Vertical => y_offset - value,
            Flip::RelativeVertical => -value,
            Flip::Arc if index % 7 == 6 => y_offset - value,
            Flip::RelativeArc if index % 7 == 6 => -value,
            _ => value,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PathCommand {
    pub command: char,
    pub args: Vec<f64>,
}

impl PathCommand {
    /// Mirrors the command's y coordinates around `y_offset / 2`.
    /// Relative commands only have their y deltas negated.
    pub fn flip_y(&mut self, y_offset: f64) {
        let flip = Flip::for_command(self.command);
        for (i, value) in self.args.iter_mut().enumerate() {
            *value = flip.apply(i, *value, y_offset);
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command)?;
        for (i, value) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(&format_number(*value))?;
        }
        Ok(())
    }
}

pub fn parse_path(d: &str) -> impl Iterator<Item = PathCommand> + '_ {
    static COMMAND_RE: OnceLock<Regex> = OnceLock::new();
    let re = COMMAND_RE.get_or_init(|| {
        Regex::new(r"([MmHhVvLlQqCcTtSsAaZz])([0-9eE+\-., \t\r\n]*)").expect("valid regex")
    });
    re.captures_iter(d).map(|caps| PathCommand {
        command: caps[1].chars().next().unwrap_or('Z'),
        args: parse_numbers(&caps[2]),
    })
}

/// Rewrites path data `d` with every y coordinate flipped against `y_offset`.
pub fn flip_path(d: &str, y_offset: f64) -> String {
    parse_path(d)
        .map(|mut command| {
            command.flip_y(y_offset);
            command.to_string()
        })
        .collect()
}

/// Integral values print without a decimal point, `-0` prints as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".into()
    } else {
        value.to_string()
    }
}

/// Splits an argument list on whitespace and commas, and also where a sign
/// or a second decimal point starts a new number (`10-20`, `0.5.5`).
fn parse_numbers(args: &str) -> Vec<f64> {
    let bytes = args.as_bytes();
    let mut numbers = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_whitespace() || bytes[i] == b',' {
            i += 1;
            continue;
        }
        let start = i;
        if bytes[i] == b'+' || bytes[i] == b'-' {
            i += 1;
        }
        let mut seen_dot = false;
        while i < bytes.len() {
            match bytes[i] {
                b'0'..=b'9' => i += 1,
                b'.' if !seen_dot => {
                    seen_dot = true;
                    i += 1;
                }
                _ => break,
            }
        }
        if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
            let mut j = i + 1;
            if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
                j += 1;
            }
            if j < bytes.len() && bytes[j].is_ascii_digit() {
                i = j;
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    i += 1;
                }
            }
        }
        if i == start {
            debug!("skipping stray '{}' in path arguments", bytes[i] as char);
            i += 1;
            continue;
        }
        match args[start..i].parse::<f64>() {
            Ok(value) => numbers.push(value),
            Err(_) => debug!("skipping invalid number '{}'", &args[start..i]),
        }
    }
    numbers
}
