use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use warp::Filter;

use crate::config::Config;
use crate::gemini::GeminiClient;
use crate::server::handle_rejection;
use crate::server::routes::create_routes;

pub struct RelayServer {
    pub gemini: GeminiClient,
    pub config: Config,
}

impl RelayServer {
    pub fn new(config: Config, api_key: String) -> Result<Self, Box<dyn std::error::Error>> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(300))
            .pool_max_idle_per_host(8)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .build()?;

        let gemini = GeminiClient::new(http, config.gemini_url.clone(), api_key);

        Ok(Self { gemini, config })
    }

    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let addr: SocketAddr = self.config.listen.parse()?;
        let server = Arc::new(self);

        let routes = create_routes(server.clone()).recover(handle_rejection);

        let cors = warp::cors()
            .allow_any_origin()
            .allow_headers(vec!["Content-Type", "Accept", "Origin", "X-Requested-With"])
            .allow_methods(vec!["GET", "POST", "OPTIONS"]);

        let routes_with_cors = routes.with(cors);

        log::info!("starting promptrelay {} on {}", crate::VERSION, addr);
        log::info!("Gemini API base: {}", server.config.gemini_url);
        log::info!(
            "models: classify={} promptgen={}",
            server.config.classify_model,
            server.config.promptgen_model
        );

        warp::serve(routes_with_cors).run(addr).await;

        Ok(())
    }
}
