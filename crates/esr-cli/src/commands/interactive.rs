use std::io::{self, BufRead, Write};

use colored::Colorize;

use esr_core::{BuildGenerator, GeneratorConfig, SubstitutionCount};

use crate::display;

const DEFAULT_BATCH: usize = 5;

pub fn run(seed: Option<u64>) -> Result<(), String> {
    let mut config = GeneratorConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let generator = super::load_generator(config)?;

    let stdin = io::stdin();
    let mut session = Session::new(generator, stdin.lock(), io::stdout());
    session.run().map_err(|e| e.to_string())
}

/// What to do after a menu action finishes.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Menu,
    Quit,
}

/// A line-based menu loop over any input and output.
struct Session<R, W> {
    generator: BuildGenerator,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    fn new(generator: BuildGenerator, input: R, out: W) -> Self {
        Self {
            generator,
            input,
            out,
        }
    }

    fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.out, "  {}", "ESO Build Randomizer".bold().magenta())?;
            writeln!(self.out, "  {}", "Interactive Mode".dimmed().cyan())?;
            writeln!(self.out)?;
            writeln!(self.out, "  {}  Generate random build (any class)", "1".bold().cyan())?;
            writeln!(self.out, "  {}  Generate build for specific class", "2".bold().cyan())?;
            writeln!(self.out, "  {}  Generate multiple builds", "3".bold().cyan())?;
            writeln!(self.out, "  {}  Quit", "Q".bold().cyan())?;
            writeln!(self.out)?;

            let Some(choice) = self.prompt("Choose an option")? else {
                break;
            };

            let flow = match choice.to_lowercase().as_str() {
                "1" => self.single_builds(None)?,
                "2" => self.choose_class()?,
                "3" => self.batch()?,
                "q" | "quit" => Flow::Quit,
                _ => {
                    self.warn("Sorry, that's not a valid option. Try 1, 2, 3, or Q.")?;
                    Flow::Menu
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }

        writeln!(self.out, "  {}", "Goodbye!".cyan())?;
        Ok(())
    }

    /// Print a prompt and read one trimmed line. `None` on end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.out, "  {} ", format!("{text} >").dimmed())?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn warn(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "  {}", message.yellow())?;
        writeln!(self.out)
    }

    /// Generate one build at a time until the user asks for something else.
    ///
    /// `class` of `None` rerolls the base class every time.
    fn single_builds(&mut self, class: Option<&str>) -> io::Result<Flow> {
        loop {
            match self.generator.generate(class) {
                Ok(build) => {
                    writeln!(self.out)?;
                    write!(self.out, "{}", display::render_build(&build))?;
                    writeln!(self.out)?;
                }
                Err(e) => {
                    self.warn(&format!("An error occurred: {e}"))?;
                    return Ok(Flow::Menu);
                }
            }

            let again = match class {
                Some(name) => format!("Generate another {name} build"),
                None => "Generate another random build".to_string(),
            };
            writeln!(self.out, "  {}", "What's next?".bold().blue())?;
            writeln!(self.out, "  {}  {again}", "1".bold().cyan())?;
            writeln!(self.out, "  {}  Start over (back to main menu)", "2".bold().cyan())?;
            writeln!(self.out, "  {}  Quit", "Q".bold().cyan())?;
            writeln!(self.out)?;

            let Some(choice) = self.prompt("Press 1, 2, or Q")? else {
                return Ok(Flow::Quit);
            };
            match choice.to_lowercase().as_str() {
                "1" => continue,
                "2" => return Ok(Flow::Menu),
                "q" | "quit" => return Ok(Flow::Quit),
                _ => {
                    self.warn("Sorry, that's not a valid option. Please try again.")?;
                    return Ok(Flow::Menu);
                }
            }
        }
    }

    fn choose_class(&mut self) -> io::Result<Flow> {
        loop {
            writeln!(self.out)?;
            writeln!(self.out, "  {}", "Choose Your Class".bold().yellow())?;
            writeln!(self.out, "{}", display::class_menu_table(self.generator.catalog()))?;
            writeln!(self.out)?;

            let Some(choice) = self.prompt("Choose a class or Q to quit")? else {
                return Ok(Flow::Quit);
            };
            if choice.eq_ignore_ascii_case("q") {
                return Ok(Flow::Quit);
            }

            let Ok(number) = choice.parse::<usize>() else {
                self.warn("Please enter a number for the class selection.")?;
                continue;
            };

            let class = number
                .checked_sub(1)
                .and_then(|i| self.generator.catalog().classes().get(i))
                .map(|c| c.name().to_string());
            match class {
                Some(name) => return self.single_builds(Some(name.as_str())),
                None => self.warn("Sorry, that's not a valid class number. Please try again!")?,
            }
        }
    }

    fn batch(&mut self) -> io::Result<Flow> {
        loop {
            writeln!(self.out)?;
            writeln!(self.out, "  {}", "Multiple Build Generator".bold().cyan())?;
            writeln!(self.out, "  {}", "Enter Q at any prompt to quit".dimmed())?;
            writeln!(self.out)?;

            let Some(count) = self.prompt(&format!("How many builds to generate? [{DEFAULT_BATCH}]"))?
            else {
                return Ok(Flow::Quit);
            };
            if count.eq_ignore_ascii_case("q") {
                return Ok(Flow::Quit);
            }
            let count = if count.is_empty() {
                DEFAULT_BATCH
            } else {
                match count.parse::<usize>() {
                    Ok(n) => n,
                    Err(_) => {
                        self.warn("Please enter a valid number.")?;
                        continue;
                    }
                }
            };

            let Some(lines) =
                self.prompt("How many skill lines to replace? (1, 2, or blank for random)")?
            else {
                return Ok(Flow::Quit);
            };
            if lines.eq_ignore_ascii_case("q") {
                return Ok(Flow::Quit);
            }
            let substitutions = if lines.is_empty() {
                None
            } else {
                match lines.parse::<u8>().ok().map(SubstitutionCount::try_from) {
                    Some(Ok(count)) => Some(count),
                    _ => {
                        self.warn("Number of lines to replace should be 1 or 2.")?;
                        continue;
                    }
                }
            };

            let builds: Result<Vec<_>, _> = (0..count)
                .map(|_| self.generator.generate_with(None, substitutions))
                .collect();
            match builds {
                Ok(builds) => {
                    writeln!(self.out)?;
                    write!(self.out, "{}", display::batch_header(count))?;
                    writeln!(self.out)?;
                    write!(self.out, "{}", display::render_builds(&builds))?;
                    writeln!(self.out)?;
                }
                Err(e) => self.warn(&format!("An error occurred: {e}"))?,
            }

            return match self.prompt("Press Enter to continue")? {
                Some(_) => Ok(Flow::Menu),
                None => Ok(Flow::Quit),
            };
        }
    }
}
