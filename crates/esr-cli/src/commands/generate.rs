use colored::Colorize;

use esr_core::{GeneratorConfig, SubstitutionCount};

use crate::display;

pub fn run(
    number: usize,
    class: Option<&str>,
    lines: Option<u8>,
    seed: Option<u64>,
    json: bool,
) -> Result<(), String> {
    let mut config = GeneratorConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if let Some(lines) = lines {
        let count = SubstitutionCount::try_from(lines).map_err(super::describe)?;
        config = config.with_substitutions(count);
    }

    let mut generator = super::load_generator(config)?;

    // Resolve up front so an unknown class fails before anything is printed.
    let class = class
        .map(|name| {
            generator
                .catalog()
                .require_class(name)
                .map(|c| c.name().to_string())
        })
        .transpose()
        .map_err(super::describe)?;

    let builds = generator
        .generate_batch(number, class.as_deref())
        .map_err(super::describe)?;
    for build in &builds {
        log::debug!("{}", build.description());
    }

    if json {
        let out = serde_json::to_string_pretty(&builds).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    println!("  {}", "ESO Build Randomizer".bold());
    match &class {
        Some(name) => println!("  Generating builds for {name}..."),
        None => println!("  Generating random builds..."),
    }
    println!();
    print!("{}", display::batch_header(number));
    println!();
    print!("{}", display::render_builds(&builds));
    println!();
    println!(
        "  {}",
        "Tip: use --help to see all options, or `esr interactive` for the menu!".dimmed()
    );

    Ok(())
}
