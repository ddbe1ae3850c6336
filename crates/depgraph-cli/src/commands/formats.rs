//! Handler for `depgraph formats`.

use console::Style;
use miette::Result;

use depgraph_core::format::GraphFormat;
use depgraph_ops::style;

pub fn exec() -> Result<()> {
    let dim = Style::new().dim();
    for format in GraphFormat::ALL {
        if style::is_supported(format) {
            println!("{:<12} {}", format.name(), format.file_extension());
        } else {
            println!(
                "{:<12} {}",
                format.name(),
                dim.apply_to("(recognized, not supported)")
            );
        }
    }
    Ok(())
}
