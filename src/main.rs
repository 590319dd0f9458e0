// MwIcons - main.rs
//
// Application entry point. Handles:
// 1. Logging initialisation
// 2. Generation of the default icon set into ./icons
// 3. Console summary and exit status

use mwicons::util::{constants, logging};
use mwicons::GeneratorConfig;

fn main() {
    logging::init();

    tracing::info!(version = constants::APP_VERSION, "MwIcons starting");

    let config = GeneratorConfig::default();
    let result = config.run(|path| println!("Created {}", path.display()));

    match result {
        Ok(_) => {
            println!("{}", constants::COMPLETION_MESSAGE);
            println!("{}", constants::RASTER_NOTE);
        }
        Err(e) => {
            tracing::error!(error = %e, "Icon generation failed");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
