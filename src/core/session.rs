//! Interactive controller: prompt for filters, load, then either page
//! through raw rows or print the statistics reports, and loop.

use crate::config::Config;
use crate::core::Dataset;
use crate::core::loader::{apply_filters, load_city};
use crate::core::stats;
use crate::errors::AppResult;
use crate::models::{City, DayFilter, DisplayMode, MonthFilter, Selection};
use crate::ui::messages::{separator, warning};
use crate::ui::prompt::{ask, ask_until};
use crate::ui::raw::render_rows;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};

/// The only answer that continues paging or restarts.
const YES: &str = "y";

/// Where a finished pass leaves the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Next {
    Restart,
    Exit,
}

pub struct Session<R, W> {
    input: R,
    out: W,
    data_dir: PathBuf,
    config: Config,
    /// Offset of the next raw page. Survives restarts.
    raw_offset: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, config: Config) -> Self {
        Self {
            input,
            out,
            data_dir: config.data_path(),
            config,
            raw_offset: 0,
        }
    }

    pub fn raw_offset(&self) -> usize {
        self.raw_offset
    }

    /// Hands back the output, e.g. to inspect what a scripted session printed.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs passes until the user declines to go on.
    pub fn run(&mut self) -> AppResult<()> {
        loop {
            let selection = self.prompt_selection()?;
            info!(
                city = selection.city.name(),
                month = selection.month.name(),
                day = selection.day.name(),
                mode = ?selection.mode,
                "selection made"
            );

            let all = load_city(&self.data_dir, selection.city)?;
            let data = apply_filters(&all, selection.month, selection.day);

            let next = match selection.mode {
                DisplayMode::Raw => self.show_raw(&data)?,
                DisplayMode::Format => self.show_stats(&data)?,
            };
            if next == Next::Exit {
                return Ok(());
            }
        }
    }

    pub fn prompt_selection(&mut self) -> AppResult<Selection> {
        let (input, out) = (&mut self.input, &mut self.out);

        writeln!(out, "Hello! Let's explore some US bikeshare data!\n")?;

        let city = ask_until(
            input,
            out,
            "Which City would you like to analyze? [Chicago, New York City or Washington] ",
            |a| {
                format!(
                    "\n\"{}\" not recognised!, enter only Chicago, New York City or Washington: ",
                    a
                )
            },
            |a| City::from_name(a).ok(),
        )?;

        let month = ask_until(
            input,
            out,
            "Enter Month to filter by: [All, Jan, Feb, Mar, Apr, May, Jun] ",
            |a| {
                format!(
                    "\n\"{}\" not recognised! Enter only All, Jan, Feb, Mar, Apr, May, or Jun: ",
                    a
                )
            },
            MonthFilter::from_token,
        )?;

        let day = ask_until(
            input,
            out,
            "Enter Weekday to filter by: [All, Sun, Mon, Tue, Wed, Thu, Fri, Sat] ",
            |a| {
                format!(
                    "\n\"{}\" not recognised! Enter only All, Sun, Mon, Tue, Wed, Thu, Fri, Sat: ",
                    a
                )
            },
            DayFilter::from_token,
        )?;

        let mode = ask_until(
            input,
            out,
            "Would you like to see Raw or Formatted Data? [Raw or Format] ",
            |a| format!("\n\"{}\" not recognised! Enter only Raw or Format: ", a),
            DisplayMode::from_token,
        )?;

        separator(out)?;

        Ok(Selection {
            city,
            month,
            day,
            mode,
        })
    }

    /// Pages through `data` from the current offset. Raw display always
    /// ends the program.
    fn show_raw(&mut self, data: &Dataset) -> AppResult<Next> {
        let size = self.config.page_size;
        let demographics = data.city.has_demographics();

        loop {
            let rows = data.page(self.raw_offset, size);
            if rows.is_empty() {
                writeln!(self.out, "No more rows to display.")?;
                return Ok(Next::Exit);
            }

            write!(
                self.out,
                "{}",
                render_rows(rows, self.raw_offset, demographics)
            )?;
            self.raw_offset += size;

            let more = ask(
                &mut self.input,
                &mut self.out,
                "\nWould you like to see more? [y] ",
            )?;
            if more != YES {
                return Ok(Next::Exit);
            }
        }
    }

    fn show_stats(&mut self, data: &Dataset) -> AppResult<Next> {
        if let Err(e) = stats::print_all(&mut self.out, data, self.config.missing_category) {
            if !e.is_stats_failure() {
                return Err(e);
            }
            warn!(error = %e, "statistics pass aborted");
            warning(&mut self.out, format!("Statistics pass aborted: {}", e))?;
        }

        let restart = ask(
            &mut self.input,
            &mut self.out,
            "\nWould you like to restart? [y]",
        )?;
        if restart == YES {
            writeln!(self.out)?;
            Ok(Next::Restart)
        } else {
            Ok(Next::Exit)
        }
    }
}
