use std::net::SocketAddr;

use backend::app::create_app;
use backend::provider::WeatherService;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on.
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// OpenWeatherMap API key. Without one, only the built-in sample
    /// cities resolve.
    #[arg(long, env = "API_KEY")]
    api_key: Option<String>,

    /// Base URL of the OpenWeatherMap API.
    #[arg(
        long,
        env = "BASE_URL",
        default_value = "https://api.openweathermap.org/data/2.5"
    )]
    base_url: String,

    /// Directory holding the built frontend.
    #[arg(long, env = "ASSETS_DIR", default_value = "assets")]
    assets_dir: String,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let args = Args::parse();
    if args.api_key.is_none() {
        log::warn!("no API key configured, serving sample data only");
    }

    let weather = WeatherService::from_config(args.api_key, args.base_url);
    let app = create_app(weather, &args.assets_dir);

    let address = SocketAddr::from(([0, 0, 0, 0], args.port));
    log::info!("listening on {}", address);
    axum_server::bind(address)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
