mod args;
mod config;
mod dirs;
mod table;

use std::io;
use std::net::SocketAddr;

use clap::Parser;

use app_api::{
    AppContext, RecordsAddRequest, RecordsResponse, ReportRequest, SettingsPutRequest,
    SettingsResponse,
};
use args::{AddArgs, Cli, Commands, OwnerArg, ReportArgs, ServeArgs, SettingsArgs};
use ctc_app::{AppPaths, AppState, ensure_app_data_dir, parse_week_start_input};
use ctc_core::RecordForm;
use http_api::{HttpState, OWNER_HEADER, TOKEN_HEADER, generate_api_token};

type CliResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

#[tokio::main]
async fn main() -> CliResult {
    let cli = Cli::parse();

    let config = config::load_or_create().map_err(io::Error::other)?;
    config.config.logging().init();
    if config.created {
        tracing::info!(
            path = %config.paths.file.display(),
            port = config.config.port,
            "created config"
        );
    }

    let data_dir = dirs::resolve_data_dir(cli.data_dir.clone()).map_err(io::Error::other)?;
    if data_dir.matched_existing {
        tracing::info!(dir = %data_dir.dir.display(), "using existing data dir");
    } else {
        tracing::info!(dir = %data_dir.dir.display(), "using data dir");
    }

    let paths = AppPaths::new(data_dir.dir);
    ensure_app_data_dir(&paths)?;
    let default_week_start = parse_week_start_input(&config.config.week_start)?;
    let app_state = AppState::new(paths.db_path);
    app_state.initialize(default_week_start)?;

    let context = AppContext {
        app_state,
        app_data_dir: paths.app_data_dir,
    };

    match cli.command {
        Commands::Serve(args) => serve(context, args, config.config.port).await,
        Commands::Add(args) => add(&context, args),
        Commands::List(args) => list(&context, args),
        Commands::Report(args) => report(&context, args),
        Commands::Settings(args) => settings(&context, args),
    }
}

async fn serve(context: AppContext, args: ServeArgs, configured_port: u16) -> CliResult {
    let port = args.port.unwrap_or(configured_port);
    let api_token = generate_api_token();
    let state = HttpState::new(context, api_token.clone());
    let router = http_api::router(state);

    let (listener, actual_port, used_fallback) = bind_port(port).await?;
    if used_fallback {
        tracing::warn!(
            configured = port,
            actual = actual_port,
            "configured port was unavailable"
        );
    }

    println!("CTC Tracker API is running at http://127.0.0.1:{actual_port}");
    println!("Send {TOKEN_HEADER}: {api_token} and {OWNER_HEADER}: <owner> with each /api request.");
    println!("Press Ctrl+C to stop.");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");

    Ok(())
}

fn add(context: &AppContext, args: AddArgs) -> CliResult {
    let record = RecordForm {
        date: args.date,
        input_kg: args.input_kg,
        tea_made_gl: args.tea_made_gl,
        tea_made_ors: args.tea_made_ors,
        ctc_hours: args.ctc_hours,
        dryer_hours: args.dryer_hours,
        heater_hours: args.heater_hours,
        coal_kg: args.coal_kg,
        electricity_units: args.electricity_units,
        mandays: args.mandays,
    };
    let stored = app_api::records_add(context, &args.owner, RecordsAddRequest { record })?;
    println!("Saved record {} for {}.", stored.id, stored.record.date);
    Ok(())
}

fn list(context: &AppContext, args: OwnerArg) -> CliResult {
    let RecordsResponse { records } = app_api::records_list(context, &args.owner)?;
    if records.is_empty() {
        println!("No records for {}.", args.owner);
        return Ok(());
    }
    print!("{}", table::render_records(&records));
    Ok(())
}

fn report(context: &AppContext, args: ReportArgs) -> CliResult {
    let response = app_api::report(
        context,
        &args.owner,
        ReportRequest {
            window: Some(args.window),
            now: args.now,
        },
    )?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!(
        "Window: {} (as of {}, weeks start {})",
        response.window, response.now, response.week_start
    );
    if response.report.rows.is_empty() {
        println!("No records in this window.");
        return Ok(());
    }
    print!("{}", table::render_report(&response.report.rows));
    for row in response.report.flagged_rows() {
        if let Some(issue) = row.issue() {
            eprintln!("{}: {}", row.record.date, issue);
        }
    }
    Ok(())
}

fn settings(context: &AppContext, args: SettingsArgs) -> CliResult {
    let SettingsResponse {
        week_start,
        db_path,
        app_data_dir,
    } = match args.week_start {
        Some(week_start) => app_api::settings_put(
            context,
            SettingsPutRequest {
                week_start: Some(week_start),
            },
        )?,
        None => app_api::settings_get(context)?,
    };
    println!("week_start = {week_start}");
    println!("db_path = {db_path}");
    println!("app_data_dir = {app_data_dir}");
    Ok(())
}

async fn bind_port(port: u16) -> Result<(tokio::net::TcpListener, u16, bool), io::Error> {
    if port == 0 {
        let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let actual_port = listener.local_addr()?.port();
        return Ok((listener, actual_port, false));
    }

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => Ok((listener, port, false)),
        Err(_) => {
            let listener =
                tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
            let actual_port = listener.local_addr()?.port();
            Ok((listener, actual_port, true))
        }
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
