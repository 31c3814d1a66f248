//! Version command implementation

use console::Style;

use crate::config::{SETTINGS_FILE, Settings};
use crate::error::Result;

/// Print the version and the built-in skeleton defaults
pub fn run() -> Result<()> {
    let settings = Settings::default();
    let label = Style::new().bold();

    println!("barista-configure {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("{}", label.apply_to("Defaults:"));
    println!(
        "  vendor:    {} <{}>",
        settings.vendor.name, settings.vendor.email
    );
    println!("  namespace: {}", settings.placeholders.namespace);
    println!("  manifest:  {}", settings.manifest.display());
    println!("  template:  {}", settings.template.display());
    println!("  settings:  {SETTINGS_FILE}");
    println!(
        "  profile:   {}",
        if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        }
    );

    Ok(())
}
