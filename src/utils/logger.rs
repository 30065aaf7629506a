use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Logs go to stderr; stdout is reserved for the product listing.

pub fn init_cli_logger(verbose: bool) {
    let default_directive = if verbose {
        "shopping_list_connector=debug,info"
    } else {
        "shopping_list_connector=warn"
    };
    init(default_directive, false);
}

pub fn init_json_logger() {
    init("shopping_list_connector=info", true);
}

fn init(default_directive: &str, json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    fn base<S>() -> fmt::Layer<S, fmt::format::DefaultFields, fmt::format::Format, fn() -> std::io::Stderr> {
        fmt::layer()
            .with_writer(std::io::stderr as fn() -> std::io::Stderr)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
    }

    // Only one of the two layers is ever Some.
    let (json_layer, compact_layer) = if json {
        (Some(base().json()), None)
    } else {
        (None, Some(base().compact()))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(compact_layer)
        .init();
}
