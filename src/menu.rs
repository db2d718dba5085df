//! Interactive menu loop
//!
//! ```text
//! MainMenu --"1"--> PredefinedFlow --> MainMenu
//!          --"2"--> UserInputFlow  --> MainMenu
//!          --"3"--> FilterFlow     --> MainMenu
//!          --"4"--> Exit
//!          --else-> "Invalid choice" --> MainMenu
//! ```

use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::console;
use crate::error::Result;
use crate::models::SentimentRecord;
use crate::pipeline::{filter_by_keyword, CollectionRunner};
use crate::report::{export_results, ChartRenderer, Statistics};
use crate::sentiment::{LexiconAnalyzer, PolarityAnalyzer, Scorer};

/// A main-menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// "1": analyze the built-in tweets
    Predefined,
    /// "2": analyze tweets typed by the user
    UserInput,
    /// "3": filter the built-in tweets by keyword
    Filter,
    /// "4": leave the program
    Exit,
}

impl MenuChoice {
    /// Parse a menu answer; surrounding whitespace is ignored
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Predefined),
            "2" => Some(MenuChoice::UserInput),
            "3" => Some(MenuChoice::Filter),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// The interactive application: scoring, export, charts and statistics
/// behind a numbered menu
pub struct Menu<A = LexiconAnalyzer> {
    scorer: Scorer<A>,
    charts: ChartRenderer,
    export_path: PathBuf,
}

impl Menu<LexiconAnalyzer> {
    /// Menu with the lexicon scorer, configured from `config`
    pub fn from_config(config: &AppConfig) -> Self {
        let analyzer =
            LexiconAnalyzer::new().with_negation_window(config.analyzer.negation_window);

        Self::new(
            Scorer::with_analyzer(analyzer),
            ChartRenderer::from_settings(&config.chart),
            config.export.path.clone(),
        )
    }
}

impl<A: PolarityAnalyzer> Menu<A> {
    pub fn new(scorer: Scorer<A>, charts: ChartRenderer, export_path: impl Into<PathBuf>) -> Self {
        Self {
            scorer,
            charts,
            export_path: export_path.into(),
        }
    }

    /// Run until the user picks Exit or input ends
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> Result<()> {
        loop {
            self.print_menu(out)?;

            let Some(answer) = console::prompt(input, out, "Enter your choice (1/2/3/4): ")? else {
                info!("input closed, leaving menu");
                writeln!(out)?;
                return Ok(());
            };

            match MenuChoice::parse(&answer) {
                Some(MenuChoice::Exit) => {
                    writeln!(out, "Exiting the program. Goodbye!")?;
                    return Ok(());
                }
                Some(choice) => {
                    debug!(?choice, "menu choice");
                    self.dispatch(choice, input, out)?;
                }
                None => {
                    debug!(answer = %answer, "invalid menu choice");
                    writeln!(out, "Invalid choice. Please try again.")?;
                }
            }
        }
    }

    /// Run one flow and return to the caller
    pub fn dispatch<R: BufRead, W: Write>(
        &self,
        choice: MenuChoice,
        input: &mut R,
        out: &mut W,
    ) -> Result<()> {
        match choice {
            MenuChoice::Predefined => self.predefined_flow(input, out),
            MenuChoice::UserInput => self.user_input_flow(input, out),
            MenuChoice::Filter => self.filter_flow(input, out),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn print_menu<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "\nSentiment Analysis of Tweets")?;
        writeln!(out, "{}", console::rule())?;
        writeln!(out, "1. Analyze Predefined Tweets")?;
        writeln!(out, "2. Enter Your Own Tweets")?;
        writeln!(out, "3. Filter Predefined Tweets by Keyword")?;
        writeln!(out, "4. Exit")?;
        Ok(())
    }

    fn predefined_flow<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> Result<()> {
        let results = CollectionRunner::new(&self.scorer).run_predefined(out)?;
        self.report(&results, input, out)
    }

    fn user_input_flow<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> Result<()> {
        let results = CollectionRunner::new(&self.scorer).run_interactive(input, out)?;
        self.report(&results, input, out)
    }

    /// Filtered results are charted only; they are neither exported nor
    /// summarized
    fn filter_flow<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> Result<()> {
        let Some(keyword) = console::prompt(input, out, "\nEnter the keyword to filter tweets: ")?
        else {
            return Ok(());
        };

        let results = CollectionRunner::new(&self.scorer).run_predefined(out)?;
        let matches = filter_by_keyword(&results, &keyword, out)?;

        if !matches.is_empty() {
            self.charts.render(&matches, input, out)?;
        }
        Ok(())
    }

    /// Export, charts, then statistics. A failed export is reported and the
    /// remaining steps still run.
    fn report<R: BufRead, W: Write>(
        &self,
        results: &[SentimentRecord],
        input: &mut R,
        out: &mut W,
    ) -> Result<()> {
        match export_results(results, &self.export_path) {
            Ok(()) => writeln!(out, "\nResults saved to '{}'.", self.export_path.display())?,
            Err(e) if e.is_recoverable() => {
                warn!(error = %e, "export failed");
                writeln!(out, "\nFailed to save results: {}", e)?;
            }
            Err(e) => return Err(e),
        }

        self.charts.render(results, input, out)?;
        writeln!(out, "{}", Statistics::from_records(results))?;
        Ok(())
    }
}
