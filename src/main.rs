use joback_cp::cli::cli_main::{Command, USAGE, parse_args, run_command};
use joback_cp::logging::init_logger;
use joback_cp::settings::ServerSettings;
use joback_cp::web::router::build_router;
use joback_cp::web::state::AppState;
use log::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{}\n{}", e, USAGE);
            std::process::exit(2);
        }
    };
    let settings = cli.apply(ServerSettings::load(&cli.config)?);
    init_logger(&settings)?;

    if cli.command != Command::Serve {
        run_command(&cli.command, &settings)?;
        return Ok(());
    }

    let app = build_router(AppState::from_settings(&settings));
    let address = settings.address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(
        "Joback Cp server listening on http://{} (integration: {:?})",
        address, settings.integration
    );
    axum::serve(listener, app).await?;
    Ok(())
}
