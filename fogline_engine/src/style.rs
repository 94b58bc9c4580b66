//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};
use textwrap::{Options, termwidth};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn item_style(&self) -> ColoredString;
    fn active_item_style(&self) -> ColoredString;
    fn location_titlebar_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn dark_style(&self) -> ColoredString;
    fn choice_style(&self) -> ColoredString;
    fn disabled_style(&self) -> ColoredString;
    fn triggered_style(&self) -> ColoredString;
    fn trig_icon_style(&self) -> ColoredString;
    fn transition_style(&self) -> ColoredString;
    fn ending_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn error_icon_style(&self) -> ColoredString;
    fn subheading_style(&self) -> ColoredString;
    fn denied_style(&self) -> ColoredString;
    fn section_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn section_style(&self) -> ColoredString {
        let bracketed = format!("[{self}]");
        bracketed.truecolor(75, 80, 75)
    }
    fn subheading_style(&self) -> ColoredString {
        self.underline()
    }
    fn item_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn active_item_style(&self) -> ColoredString {
        self.bold().truecolor(255, 220, 90)
    }
    fn location_titlebar_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10).underline()
    }
    fn description_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn dark_style(&self) -> ColoredString {
        self.italic().truecolor(90, 90, 120)
    }
    fn choice_style(&self) -> ColoredString {
        self.truecolor(110, 220, 110)
    }
    fn disabled_style(&self) -> ColoredString {
        self.dimmed().strikethrough()
    }
    fn triggered_style(&self) -> ColoredString {
        self.italic().truecolor(230, 230, 30)
    }
    fn trig_icon_style(&self) -> ColoredString {
        self.bold().truecolor(230, 80, 80)
    }
    fn transition_style(&self) -> ColoredString {
        self.italic().truecolor(150, 150, 150)
    }
    fn ending_style(&self) -> ColoredString {
        self.bold().truecolor(220, 40, 220)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn error_icon_style(&self) -> ColoredString {
        self.bold().truecolor(230, 30, 30)
    }
    fn denied_style(&self) -> ColoredString {
        self.italic().truecolor(230, 30, 30)
    }
    fn prompt_style(&self) -> ColoredString {
        self.truecolor(80, 200, 220)
    }
}

impl GameStyle for String {
    fn section_style(&self) -> ColoredString {
        self.as_str().section_style()
    }
    fn subheading_style(&self) -> ColoredString {
        self.as_str().subheading_style()
    }
    fn item_style(&self) -> ColoredString {
        self.as_str().item_style()
    }
    fn active_item_style(&self) -> ColoredString {
        self.as_str().active_item_style()
    }
    fn location_titlebar_style(&self) -> ColoredString {
        self.as_str().location_titlebar_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn dark_style(&self) -> ColoredString {
        self.as_str().dark_style()
    }
    fn choice_style(&self) -> ColoredString {
        self.as_str().choice_style()
    }
    fn disabled_style(&self) -> ColoredString {
        self.as_str().disabled_style()
    }
    fn triggered_style(&self) -> ColoredString {
        self.as_str().triggered_style()
    }
    fn trig_icon_style(&self) -> ColoredString {
        self.as_str().trig_icon_style()
    }
    fn transition_style(&self) -> ColoredString {
        self.as_str().transition_style()
    }
    fn ending_style(&self) -> ColoredString {
        self.as_str().ending_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn error_icon_style(&self) -> ColoredString {
        self.as_str().error_icon_style()
    }
    fn denied_style(&self) -> ColoredString {
        self.as_str().denied_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
}

/// Wrapping options for ordinary text blocks.
pub fn normal_block() -> Options<'static> {
    Options::new(termwidth())
}

/// Wrapping options for text indented under a heading.
pub fn indented_block() -> Options<'static> {
    Options::new(termwidth()).initial_indent("    ").subsequent_indent("    ")
}
