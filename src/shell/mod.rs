//! Shell: The menus around the live views.
//!
//! Menus are plain read-a-line screens. The quote generator feeds a
//! [`QuoteBook`](quotes::QuoteBook) of recent quotes and favourites that lives
//! for the whole run. The clock, the task manager, the boot
//! sequence and the countdown are live views run through
//! [`run_live_view`](crate::session::run_live_view), one at a time, all on
//! the same shared input stream.

mod game;
mod quotes;
mod screens;

use crate::actor::Input;
use crate::config::{ShellConfig, Theme, APP_VERSION};
use crate::error::Result;
use crate::session::{run_live_view, Outcome};
use crate::snapshot::format::format_duration;
use crate::snapshot::{
    ClockSnapshotter, HostMetrics, Snapshotter, StepSnapshotter, SysinfoMetrics,
    TaskManagerSnapshotter,
};
use crate::terminal::{Chrome, Palette, TerminalScreen};
use game::Hand;
use quotes::QuoteBook;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Write;
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::{info, warn};

/// Builds a fresh metrics source for each task-manager session.
pub type MetricsFactory = Box<dyn Fn() -> Box<dyn HostMetrics>>;

/// The interactive shell.
pub struct Shell<W: Write> {
    /// Current settings.
    config: ShellConfig,
    /// Shared input stream.
    input: Input,
    /// Output screen.
    screen: TerminalScreen<W>,
    /// When the shell started, for uptime.
    started: Instant,
    /// Metrics source for the task manager.
    metrics: MetricsFactory,
    /// Quote history and favourites.
    quotes: QuoteBook,
    /// Quotes, diagnoses and the game's opponent.
    rng: StdRng,
}

impl<W: Write> Shell<W> {
    /// Create a shell reading from `input` and drawing on `out`.
    pub fn new(config: ShellConfig, input: Input, out: W) -> Self {
        let palette = Palette::new(config.theme, config.use_color);
        Self {
            config,
            input,
            screen: TerminalScreen::new(out, palette),
            started: Instant::now(),
            metrics: Box::new(|| -> Box<dyn HostMetrics> {
                Box::new(SysinfoMetrics::new())
            }),
            quotes: QuoteBook::default(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Replace the task manager's metrics source.
    #[must_use]
    pub fn with_metrics(mut self, metrics: MetricsFactory) -> Self {
        self.metrics = metrics;
        self
    }

    /// Make every random pick reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Current settings.
    pub const fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Consume the shell, returning the output writer.
    pub fn into_output(self) -> W {
        self.screen.into_inner()
    }

    /// Run until the user quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        info!(version = APP_VERSION, "shell starting");
        self.show_plain(screens::WARNING);
        self.linger(2);

        if !self.config.fast_boot {
            self.boot()?;
        }

        loop {
            self.screen.set_chrome(Chrome::titled(screens::banner()));
            self.screen.show(&screens::main_menu(self.started.elapsed()));
            self.screen.prompt("Choose (1-9): ");

            let Some(choice) = self.read_line() else {
                self.farewell();
                return Ok(());
            };

            match choice.trim() {
                "1" => self.file_manager(),
                "2" => self.system_info(),
                "3" => self.quote_generator(),
                "4" => self.diagnosis(),
                "5" => self.tools_menu()?,
                "6" => self.history_menu(),
                "7" => self.settings_menu(),
                "8" => {
                    self.task_manager()?;
                }
                "9" => {
                    self.farewell();
                    return Ok(());
                }
                _ => {}
            }
        }
    }

    /// Boot sequence; Enter skips the remaining steps.
    fn boot(&mut self) -> Result<Outcome> {
        let mut steps = StepSnapshotter::boot(
            self.config.boot_steps.clone(),
            "Boot complete!\n\nPress Enter to continue",
        );
        let title = format!("Yajuws OS {APP_VERSION} boot sequence (Enter to skip)");
        self.live_view(Chrome::titled(title), &mut steps)
    }

    fn task_manager(&mut self) -> Result<Outcome> {
        let mut view = TaskManagerSnapshotter::new((self.metrics)(), self.started);
        let chrome = Chrome::titled("Task Manager").with_footer("Press Enter to return");
        self.live_view(chrome, &mut view)
    }

    fn clock(&mut self) -> Result<Outcome> {
        let chrome = Chrome::titled("Real-time clock").with_footer("Press Enter to stop");
        self.live_view(chrome, &mut ClockSnapshotter::new())
    }

    fn countdown(&mut self) -> Result<()> {
        self.screen.set_chrome(Chrome::titled("Countdown timer"));
        self.screen.show("");
        self.screen.prompt("Seconds: ");
        let Some(input) = self.read_line() else {
            return Ok(());
        };

        let seconds = match input.trim().parse::<u32>() {
            Ok(seconds) if seconds > 0 => seconds,
            _ => {
                self.message("Please enter a positive number of seconds.");
                return Ok(());
            }
        };

        let mut timer = StepSnapshotter::countdown(seconds, "Time's up!\n\nPress Enter to continue");
        self.live_view(Chrome::titled("Countdown (Enter to stop)"), &mut timer)?;
        Ok(())
    }

    fn live_view(&mut self, chrome: Chrome, snapshotter: &mut dyn Snapshotter) -> Result<Outcome> {
        self.screen.set_chrome(chrome);
        let outcome = run_live_view(
            Arc::clone(&self.input),
            self.config.tick_period,
            &mut self.screen,
            snapshotter,
        );
        self.screen.set_chrome(Chrome::default());
        outcome
    }

    fn tools_menu(&mut self) -> Result<()> {
        loop {
            self.screen.set_chrome(Chrome::titled("Tools"));
            self.screen.show(screens::tools_menu());
            self.screen.prompt("Choose (1-5): ");

            let Some(choice) = self.read_line() else {
                return Ok(());
            };

            match choice.trim() {
                "1" => {
                    self.clock()?;
                }
                "2" => self.countdown()?,
                "3" => self.uptime(),
                "4" => self.rock_paper_scissors(),
                "5" => return Ok(()),
                _ => {}
            }
        }
    }

    fn file_manager(&mut self) {
        self.screen.set_chrome(Chrome::titled("File manager"));
        self.screen.show(screens::FILE_MANAGER);
        self.pause();
    }

    fn diagnosis(&mut self) {
        self.screen.set_chrome(Chrome::titled("Error diagnosis"));
        self.screen.show("Diagnosing...");
        self.linger(2);

        let pick = self.rng.random_range(0..screens::DIAGNOSES.len());
        let result = screens::DIAGNOSES[pick];
        self.screen.print(result);
        self.screen.print("");
        self.screen
            .print(&format!("Uptime: {}", format_duration(self.started.elapsed())));
        self.pause();
    }

    fn quote_generator(&mut self) {
        loop {
            let quote = quotes::random_quote(&mut self.rng);
            self.quotes.record(quote);

            let chrome = Chrome::titled("Quote generator").with_footer(screens::QUOTE_KEYS);
            self.screen.set_chrome(chrome);
            self.screen.show(quote);
            self.screen.prompt(":");

            let Some(input) = self.read_line() else {
                return;
            };
            match input.trim().to_ascii_lowercase().as_str() {
                "q" => return,
                "f" => {
                    self.quotes.toggle_favourite(quote);
                }
                _ => {}
            }
        }
    }

    fn history_menu(&mut self) {
        loop {
            let chrome =
                Chrome::titled("Quote history and favourites").with_footer(screens::HISTORY_KEYS);
            self.screen.set_chrome(chrome);
            self.screen.show(&screens::history(&self.quotes));
            self.screen.prompt(":");

            let Some(input) = self.read_line() else {
                return;
            };
            let command = input.trim().to_ascii_lowercase();
            match command.as_str() {
                "" => {}
                "q" => return,
                "f" => {
                    self.screen.set_chrome(Chrome::titled("Favourites"));
                    self.screen.show(&screens::favourites(&self.quotes));
                    self.pause();
                }
                "c" => {
                    self.quotes.clear_history();
                    self.message("History cleared.");
                }
                number => {
                    let quote = number
                        .parse::<usize>()
                        .ok()
                        .and_then(|n| self.quotes.recent_entry(n))
                        .map(str::to_string);
                    if let Some(quote) = quote {
                        self.quotes.toggle_favourite(&quote);
                    }
                }
            }
        }
    }

    fn rock_paper_scissors(&mut self) {
        self.screen.set_chrome(Chrome::titled("Rock-paper-scissors"));
        self.screen.show(screens::HAND_MENU);
        self.screen.prompt("Your hand: ");

        let Some(input) = self.read_line() else {
            return;
        };
        if input.trim() == "4" {
            return;
        }
        let Some(player) = Hand::parse(&input) else {
            self.message("Invalid choice.");
            return;
        };

        let cpu = Hand::random(&mut self.rng);
        self.screen.print(&format!("You: {player} / CPU: {cpu}"));
        self.screen.print(game::judge(player, cpu).message());
        self.pause();
    }

    fn system_info(&mut self) {
        let os_env = std::env::var("OS").ok();
        self.screen.set_chrome(Chrome::titled("System information"));
        self.screen
            .show(&screens::system_info(self.started.elapsed(), os_env.as_deref()));
        self.pause();
    }

    fn uptime(&mut self) {
        self.screen.set_chrome(Chrome::titled("Uptime checker"));
        self.screen
            .show(&format!("Since boot: {}", format_duration(self.started.elapsed())));
        self.pause();
    }

    fn settings_menu(&mut self) {
        loop {
            self.screen.set_chrome(Chrome::titled("Settings"));
            self.screen.show(&screens::settings(&self.config));
            self.screen.prompt("Choose (1-4): ");

            let Some(choice) = self.read_line() else {
                return;
            };

            match choice.trim() {
                "1" => self.config.fast_boot = !self.config.fast_boot,
                "2" => {
                    self.config.use_color = !self.config.use_color;
                    self.apply_palette();
                }
                "3" => self.change_theme(),
                "4" => return,
                _ => {}
            }
        }
    }

    fn change_theme(&mut self) {
        self.screen.print("");
        self.screen.prompt("Theme name (amber/green/cyan): ");
        let Some(name) = self.read_line() else {
            return;
        };

        match name.parse::<Theme>() {
            Ok(theme) => {
                self.config.theme = theme;
                self.apply_palette();
            }
            Err(e) => {
                warn!(error = %e, "theme change rejected");
                self.message("Unknown theme.");
            }
        }
    }

    fn apply_palette(&mut self) {
        self.screen
            .set_palette(Palette::new(self.config.theme, self.config.use_color));
    }

    fn farewell(&mut self) {
        self.show_plain(&screens::farewell(self.started.elapsed()));
        self.linger(2);
        info!(uptime = %format_duration(self.started.elapsed()), "shell exiting");
    }

    fn show_plain(&mut self, text: &str) {
        self.screen.set_chrome(Chrome::default());
        self.screen.show(text);
    }

    /// Print a one-line notice and leave it up for one period.
    fn message(&mut self, text: &str) {
        self.screen.print(text);
        self.linger(1);
    }

    fn pause(&mut self) {
        self.screen.print("");
        self.screen.print("Press Enter to return");
        let _ = self.read_line();
    }

    fn linger(&self, periods: u32) {
        thread::sleep(self.config.tick_period * periods);
    }

    /// Read one line; a read error ends input just like end-of-stream.
    fn read_line(&self) -> Option<String> {
        match self.input.read_line() {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "input read failed");
                None
            }
        }
    }
}
