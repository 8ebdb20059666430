// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Text rendering of benchmark results.
//!
//! The statistics never know how they are styled. Rendering code tags each
//! fragment with a [`Tone`] and hands it to a [`Palette`], which decides what
//! the tone looks like: nothing at all ([`PlainPalette`]) or ANSI colors for
//! a terminal ([`AnsiPalette`]).

use std::fmt;

use crossterm::style::{style, Color, Stylize};

use crate::result::BenchmarkResult;
use crate::severity::Severity;

/// Width that numeric columns of a single report are right-aligned to.
const VALUE_WIDTH: usize = 20;

/// Role of a text fragment in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Report headings
    Heading,
    /// Names, averages and totals
    Title,
    /// Connecting prose
    Muted,
    /// Iteration counts and fastest times
    Count,
    /// Warmup counts
    Warmup,
    /// Slowest times
    Slow,
    Strong,
    /// Centre column of a comparison
    Label,
    /// Emphasized side of an average/fastest comparison row
    Favored,
    /// Emphasized side of a slowest comparison row
    Unfavored,
    /// Failure counts, shaded by how bad they are
    Severity(Severity),
    Alert,
}

/// Maps tones to visual styling.
///
/// Implementations must return a string that contains `text` unchanged.
pub trait Palette {
    fn paint(&self, text: &str, tone: Tone) -> String;
}

/// Leaves text untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPalette;

impl Palette for PlainPalette {
    fn paint(&self, text: &str, _tone: Tone) -> String {
        text.to_string()
    }
}

/// ANSI terminal colors.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiPalette;

impl Palette for AnsiPalette {
    fn paint(&self, text: &str, tone: Tone) -> String {
        let styled = match tone {
            Tone::Heading => style(text).with(Color::White),
            Tone::Title => style(text).with(Color::DarkYellow),
            Tone::Muted => style(text).with(Color::DarkGrey),
            Tone::Count => style(text).with(Color::DarkGreen),
            Tone::Warmup => style(text).with(Color::DarkCyan),
            Tone::Slow => style(text).with(Color::DarkRed),
            Tone::Strong => style(text).bold(),
            Tone::Label => style(text).with(Color::DarkYellow),
            Tone::Favored => style(text).with(Color::Green).bold(),
            Tone::Unfavored => style(text).with(Color::Red).bold(),
            Tone::Alert => style(text).with(Color::DarkRed).bold().underlined(),
            Tone::Severity(severity) => match severity {
                Severity::Invalid => style(text)
                    .with(Color::Magenta)
                    .on(Color::DarkGreen)
                    .bold()
                    .underlined(),
                Severity::Best => style(text).with(Color::Green).bold().underlined(),
                Severity::Good => style(text).with(Color::Rgb { r: 167, g: 255, b: 0 }),
                Severity::Moderate => style(text).with(Color::Rgb { r: 255, g: 255, b: 0 }),
                Severity::Poor => style(text).with(Color::Rgb { r: 255, g: 173, b: 0 }),
                Severity::Bad => style(text).with(Color::Rgb { r: 255, g: 50, b: 0 }),
                Severity::Worst => style(text).with(Color::DarkRed).bold().underlined(),
            },
        };
        styled.to_string()
    }
}

/// Digits after the point when printing the exact expansion of an `f64`.
const EXACT_DIGITS: usize = 800;

/// Format a number with `digits` significant digits.
///
/// Follows the usual `toPrecision` rules: fixed notation unless the decimal
/// exponent is below -6 or at least `digits`, in which case exponential
/// notation with an explicit exponent sign is used. Exact ties round away
/// from zero.
pub fn to_precision(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let digits = digits.clamp(1, 100);
    let Some((kept, exponent)) = significant_digits(value.abs(), digits) else {
        return value.to_string();
    };
    let sign = if value < 0.0 { "-" } else { "" };

    if exponent < -6 || exponent >= digits as i32 {
        let (first, rest) = kept.split_at(1);
        let mantissa = if rest.is_empty() {
            first.to_string()
        } else {
            format!("{}.{}", first, rest)
        };
        let exponent_sign = if exponent < 0 { '-' } else { '+' };
        format!("{}{}e{}{}", sign, mantissa, exponent_sign, exponent.abs())
    } else if exponent >= 0 {
        let (int, frac) = kept.split_at(exponent as usize + 1);
        if frac.is_empty() {
            format!("{}{}", sign, int)
        } else {
            format!("{}{}.{}", sign, int, frac)
        }
    } else {
        let zeros = "0".repeat((-exponent - 1) as usize);
        format!("{}0.{}{}", sign, zeros, kept)
    }
}

/// First `digits` significant digits of `value` rounded half up, with the
/// decimal exponent of the first digit.
fn significant_digits(value: f64, digits: usize) -> Option<(String, i32)> {
    let exact = format!("{:.*e}", EXACT_DIGITS, value);
    let (mantissa, exponent) = exact.split_once('e')?;
    let mut exponent = exponent.parse::<i32>().ok()?;

    let all: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();
    let mut kept = all.get(..digits)?.to_vec();

    if *all.get(digits)? >= b'5' {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
            kept.pop();
            exponent += 1;
        }
    }

    String::from_utf8(kept).ok().map(|kept| (kept, exponent))
}

fn right_align(value: impl fmt::Display) -> String {
    format!("{:>1$}", value, VALUE_WIDTH)
}

fn display_count(count: Option<u64>) -> String {
    count.map_or_else(|| "?".to_string(), |c| c.to_string())
}

impl BenchmarkResult {
    /// Render the multi-line report through `palette`.
    pub fn render(&self, palette: &dyn Palette) -> String {
        let p = |tone: Tone, text: &str| palette.paint(text, tone);
        let options = self.options();
        let iterations = display_count(options.iterations);

        let warmup = match options.warmup_iterations {
            Some(warmup) if warmup > 0 => format!(
                "{}{}{}",
                p(Tone::Muted, " with "),
                p(Tone::Warmup, &warmup.to_string()),
                p(Tone::Muted, " warmup rounds.")
            ),
            _ => p(Tone::Muted, "."),
        };

        let percent = self.failure_percent();
        let shade = Tone::Severity(self.severity());

        let lines = [
            format!(
                "{} {}",
                p(Tone::Heading, "Benchmark:"),
                p(Tone::Title, self.name().unwrap_or_default())
            ),
            format!(
                "{}{}{}{}",
                p(Tone::Muted, "\tRan "),
                p(Tone::Count, &iterations),
                p(Tone::Muted, " iterations"),
                warmup
            ),
            format!(
                "{}{}{}",
                p(Tone::Muted, "\tAverage run time: "),
                p(
                    Tone::Title,
                    &right_align(to_precision(self.average(), 5))
                ),
                p(Tone::Muted, "μs.")
            ),
            format!(
                "{}{}{}",
                p(Tone::Muted, "\tFastest run time: "),
                p(Tone::Count, &right_align(self.fastest())),
                p(Tone::Muted, "μs.")
            ),
            format!(
                "{}{}{}",
                p(Tone::Muted, "\tSlowest run time: "),
                p(Tone::Slow, &right_align(self.slowest())),
                p(Tone::Muted, "μs.")
            ),
            format!(
                "{}{}{}{}{}{}{}",
                p(Tone::Muted, "\tFailures: "),
                p(shade, &self.failures().to_string()),
                p(Tone::Muted, " / "),
                p(Tone::Heading, &iterations),
                p(Tone::Muted, " ("),
                p(shade, &percent.to_string()),
                p(Tone::Muted, "%).")
            ),
            format!(
                "{}{}{}{}{}",
                p(Tone::Muted, "\tTotal Runtime "),
                p(Tone::Strong, "(in sec.)"),
                p(Tone::Muted, ": "),
                p(
                    Tone::Title,
                    &right_align(to_precision(self.total_runtime_secs(), 4))
                ),
                p(Tone::Muted, "s.")
            ),
        ];

        lines.join("\n")
    }

    /// Unstyled multi-line report.
    pub fn plain_text(&self) -> String {
        self.render(&PlainPalette)
    }

    /// Report styled for a terminal, failures shaded by severity.
    pub fn decorated_text(&self) -> String {
        self.render(&AnsiPalette)
    }

    /// Send the decorated report to the configured line writer, if any.
    pub fn pretty_print(&self) {
        if let Some(writer) = &self.options().write_line {
            writer.write_line(&self.decorated_text());
        }
    }
}

impl fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.plain_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BenchmarkOptions;
    use crate::types::LineWriter;
    use std::sync::{Arc, Mutex};

    fn sample() -> BenchmarkResult {
        BenchmarkResult::new(
            BenchmarkOptions::new().name("sample").iterations(5).warmup(2),
            vec![10, 20, 15, 5, 25],
        )
    }

    #[test]
    fn test_to_precision() {
        assert_eq!(to_precision(15.0, 5), "15.000");
        assert_eq!(to_precision(0.000075, 4), "0.00007500");
        assert_eq!(to_precision(1234.5678, 5), "1234.6");
        assert_eq!(to_precision(123456.0, 5), "1.2346e+5");
        assert_eq!(to_precision(0.0, 5), "0.0000");
        assert_eq!(to_precision(1e-7, 2), "1.0e-7");
        assert_eq!(to_precision(f64::NAN, 5), "NaN");
    }

    #[test]
    fn test_to_precision_rounds_ties_up() {
        assert_eq!(to_precision(12344.5, 5), "12345");
        assert_eq!(to_precision(2.5, 1), "3");
        assert_eq!(to_precision(0.125, 2), "0.13");
        assert_eq!(to_precision(9.95, 2), "9.9");
        assert_eq!(to_precision(99.5, 2), "1.0e+2");
        assert_eq!(to_precision(-2.5, 1), "-3");
        assert_eq!(to_precision(f64::INFINITY, 3), "Infinity");
    }

    #[test]
    fn test_average_with_half_microsecond_rounds_up() {
        let result = BenchmarkResult::new(
            BenchmarkOptions::new().name("tie").iterations(2).warmup(0),
            vec![12344, 12345],
        );
        let text = result.plain_text();

        assert_eq!(
            text.lines().nth(2).unwrap(),
            format!("\tAverage run time: {:>20}μs.", "12345")
        );
    }

    #[test]
    fn test_plain_text_layout() {
        let text = sample().plain_text();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "Benchmark: sample");
        assert_eq!(lines[1], "\tRan 5 iterations with 2 warmup rounds.");
        assert_eq!(
            lines[2],
            format!("\tAverage run time: {:>20}μs.", "15.000")
        );
        assert_eq!(lines[3], format!("\tFastest run time: {:>20}μs.", "5"));
        assert_eq!(lines[4], format!("\tSlowest run time: {:>20}μs.", "25"));
        assert_eq!(lines[5], "\tFailures: 0 / 5 (0%).");
        assert_eq!(
            lines[6],
            format!("\tTotal Runtime (in sec.): {:>20}s.", "0.00007500")
        );
    }

    #[test]
    fn test_plain_text_without_warmup() {
        let result = BenchmarkResult::new(
            BenchmarkOptions::new().name("cold").iterations(5),
            vec![10, 20, 15],
        );
        let text = result.plain_text();

        assert!(text.contains("\tRan 5 iterations.\n"));
        assert!(text.contains("\tFailures: 2 / 5 (40%)."));
    }

    #[test]
    fn test_empty_result_renders() {
        let result = BenchmarkResult::new(BenchmarkOptions::new().name("none").iterations(0), vec![]);
        let text = result.plain_text();

        assert!(text.contains("NaN"));
        assert!(text.contains("\tFailures: 0 / 0 (NaN%)."));
    }

    #[test]
    fn test_renderings_are_idempotent() {
        let result = sample();
        assert_eq!(result.plain_text(), result.plain_text());
        assert_eq!(result.decorated_text(), result.decorated_text());
        assert_eq!(result.to_string(), result.plain_text());
    }

    #[test]
    fn test_decorated_text_contains_plain_fragments() {
        let decorated = sample().decorated_text();
        for fragment in ["Benchmark:", "sample", "15.000", "(in sec.)", "warmup rounds."] {
            assert!(decorated.contains(fragment), "missing {}", fragment);
        }
        assert!(decorated.len() >= sample().plain_text().len());
    }

    #[test]
    fn test_failures_are_shaded_by_severity() {
        struct Recorder(Mutex<Vec<(String, Tone)>>);
        impl Palette for Recorder {
            fn paint(&self, text: &str, tone: Tone) -> String {
                self.0.lock().unwrap().push((text.to_string(), tone));
                text.to_string()
            }
        }

        let result = BenchmarkResult::new(
            BenchmarkOptions::new().name("flaky").iterations(5),
            vec![10, 20, 15],
        );
        let recorder = Recorder(Mutex::new(Vec::new()));
        result.render(&recorder);

        let painted = recorder.0.into_inner().unwrap();
        let shaded: Vec<&str> = painted
            .iter()
            .filter(|(_, tone)| *tone == Tone::Severity(Severity::Moderate))
            .map(|(text, _)| text.as_str())
            .collect();
        assert_eq!(shaded, vec!["2", "40"]);
    }

    #[test]
    fn test_pretty_print_uses_writer() {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&lines);
        let writer = LineWriter::new(move |line| sink.lock().unwrap().push(line.to_string()));

        let result = BenchmarkResult::new(
            BenchmarkOptions::new().name("printed").iterations(1).write_line(writer),
            vec![3],
        );
        result.pretty_print();

        let lines = lines.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], result.decorated_text());
    }

    #[test]
    fn test_pretty_print_without_writer_is_silent() {
        sample().pretty_print();
    }
}
