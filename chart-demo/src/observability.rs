use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVES: [&str; 2] = ["chart_demo=info", "consumption_client=info"];

/// Log to stderr; stdout is reserved for the chart payload.
pub fn init_tracing() {
    let mut filter = EnvFilter::from_default_env();
    for directive in DEFAULT_DIRECTIVES {
        if let Ok(directive) = directive.parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
