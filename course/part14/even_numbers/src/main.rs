use even_numbers::{app, config::AppConfig, tracing_init};

fn main() -> anyhow::Result<()> {
    tracing_init::init()?;

    let config = AppConfig::load()?;
    let args = std::env::args().skip(1).collect::<Vec<_>>();

    app::run(config, &args, &mut std::io::stdout().lock())
}
