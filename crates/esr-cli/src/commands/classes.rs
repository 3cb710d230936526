use esr_core::Catalog;

use crate::display;

pub fn run() -> Result<(), String> {
    let catalog = Catalog::eso().map_err(super::describe)?;

    println!("{}", display::classes_table(&catalog));
    println!();
    println!("  {} classes", catalog.len());

    Ok(())
}
