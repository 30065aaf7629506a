use crate::core::Product;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// Rust debug listing, e.g. `[Product { name: "Milk", price: 2.5 }]`
    #[default]
    Debug,
    /// Pretty-printed JSON array
    Json,
}

pub fn render(products: &[Product], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Debug => Ok(format!("{:?}", products)),
        OutputFormat::Json => serde_json::to_string_pretty(products),
    }
}
