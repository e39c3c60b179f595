use database::{DatabaseConnectionInfo, SqliteDatabase};
use schools::memory::InMemoryDatabase;
use web::{config::WebConfig, start_web_server, WebState};

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = WebConfig::from_env().expect("invalid web server configuration.");

    // database
    let database_connection_info = DatabaseConnectionInfo::from_env();
    let result = if database_connection_info.is_in_memory() {
        log::warn!("using the in-memory store, schools are lost on shutdown.");
        start_web_server(config, WebState::new(InMemoryDatabase::new())).await
    } else {
        let database = SqliteDatabase::connect(database_connection_info)
            .await
            .expect("could not connect to database.");
        start_web_server(config, WebState::new(database)).await
    };

    if let Err(why) = result {
        log::error!("web server stopped: {}", why);
        std::process::exit(1);
    }
}
