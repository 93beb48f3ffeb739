use anyhow::Result;
use cardsense_application::AdvisorUseCase;

pub fn run() -> Result<()> {
    println!("Personas (tie-break order):");
    for (i, persona) in AdvisorUseCase::new().personas().iter().enumerate() {
        println!("  {}. {}", i + 1, persona);
    }
    Ok(())
}
