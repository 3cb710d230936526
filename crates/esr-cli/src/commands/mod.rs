pub mod classes;
pub mod generate;
pub mod interactive;

use esr_core::{BuildGenerator, Catalog, EsrError, GeneratorConfig};

/// Load the shipped catalog and wrap it in a generator.
fn load_generator(config: GeneratorConfig) -> Result<BuildGenerator, String> {
    let catalog = Catalog::eso().map_err(describe)?;
    BuildGenerator::new(catalog, config).map_err(describe)
}

/// Turn a core error into a message for the user.
///
/// Unknown classes get the list of valid names, one per line.
fn describe(err: EsrError) -> String {
    match err {
        EsrError::UnknownClass { name, available } => {
            let names: Vec<String> = available.iter().map(|c| format!("    {c}")).collect();
            format!(
                "unknown class \"{name}\"\n\n  Valid classes:\n{}",
                names.join("\n")
            )
        }
        other => other.to_string(),
    }
}
