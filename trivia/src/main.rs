use actix_web::HttpServer;
use clap::Parser;
use miette::{Context, IntoDiagnostic, Result};
use tracing::info;
use trivia::{
    api::{api_router, cors_middleware},
    cli::CLIArgs,
    logging::initialize_tracing,
    state::{ApplicationState, ApplicationStateInner},
};
use trivia_configuration::Configuration;



#[tokio::main]
async fn main() -> Result<()> {
    #[cfg(feature = "with_test_facilities")]
    {
        println!("-------------------------------------");
        println!("THIS IS AN INCREDIBLY IMPORTANT ERROR");
        println!("-------------------------------------");
        println!(
            "THIS BINARY HAS BEEN COMPILED WITH THE with_test_facilities FEATURE FLAG, \n\
            WHICH MEANS IT SHOULD ONLY BE USED FOR TESTING. IF YOU USE THIS IN PRODUCTION, \n\
            ANYONE CAN WIPE YOUR DATABASE REMOTELY. YOU HAVE BEEN WARNED"
        );
        println!("-------------------------------------");
        println!("THIS IS AN INCREDIBLY IMPORTANT ERROR");
        println!("-------------------------------------");
    }


    // Parse CLI arguments.
    let arguments = CLIArgs::parse();

    // Load configuration.
    let configuration = match arguments.configuration_file_path.as_ref() {
        Some(path) => {
            println!("Loading configuration: {}", path.display());
            Configuration::load_from_path(path)
        }
        None => {
            println!("Loading configuration at default path.");
            Configuration::load_from_default_path()
        }
    }
    .into_diagnostic()
    .wrap_err("Failed to load configuration file.")?;


    configuration
        .logging
        .create_log_file_output_directory_if_missing()
        .into_diagnostic()
        .wrap_err("Failed to create log file output directory.")?;

    let guard = initialize_tracing(
        configuration.logging.console_output_level_filter(),
        configuration.logging.log_file_output_level_filter(),
        &configuration.logging.log_file_output_directory,
        "trivia.log",
    )
    .into_diagnostic()
    .wrap_err("Failed to initialize tracing.")?;

    info!(
        file_path = %configuration.configuration_file_path.display(),
        "Configuration loaded."
    );


    // Connect to the database.
    let state: ApplicationState = ApplicationState::new(
        ApplicationStateInner::new(configuration.clone())
            .await
            .into_diagnostic()
            .wrap_err("Failed to set up application state.")?,
    );

    info!("Connected to the database.");


    // Initialize and start the actix HTTP server.
    #[rustfmt::skip]
    let server = HttpServer::new(move || {
        let app = actix_web::App::new()
            .wrap(actix_web::middleware::NormalizePath::trim())
            .wrap(cors_middleware())
            .wrap(tracing_actix_web::TracingLogger::default())
            .app_data(state.clone());

        // The testing scope must be registered before the catch-all API scope.
        #[cfg(feature = "with_test_facilities")]
        let app = app.service(trivia::testing::testing_router());

        app.service(api_router())
    })
        .bind((
            configuration.http.host.as_str(),
            configuration.http.port,
        ))
        .into_diagnostic()
        .wrap_err("Failed to set up actix HTTP server.")?;

    info!(
        host = configuration.http.host.as_str(),
        port = configuration.http.port,
        "HTTP server initialized and running."
    );

    // Run HTTP server until stopped.
    server
        .run()
        .await
        .into_diagnostic()
        .wrap_err("Errored while running actix HTTP server.")?;


    drop(guard);

    Ok(())
}
