use anyhow::{Result, ensure};
use axum::Router;
use log::info;
use std::net::SocketAddr;
use std::path::PathBuf;
use tower_http::services::ServeDir;

/// Serves a generated site directory for local preview
pub struct ServerService {
    port: u16,
    site_dir: PathBuf,
}

impl ServerService {
    pub fn new(port: u16, site_dir: PathBuf) -> Self {
        Self { port, site_dir }
    }

    pub fn router(&self) -> Router {
        Router::new().fallback_service(ServeDir::new(&self.site_dir))
    }

    pub async fn run(&self) -> Result<()> {
        ensure!(
            self.site_dir.is_dir(),
            "Site directory {} does not exist; run `generate` first",
            self.site_dir.display()
        );

        let addr = SocketAddr::from(([127, 0, 0, 1], self.port));
        info!("Serving {} on http://{}", self.site_dir.display(), addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::fs;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_serves_generated_pages() {
        let dir = std::env::temp_dir().join("playoff_site_server_test");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("index.html"), "<h1>Cup</h1>").unwrap();
        let service = ServerService::new(0, dir.clone());

        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = service.router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let request = Request::builder().uri("/missing.html").body(Body::empty()).unwrap();
        let response = service.router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_refuses_missing_directory() {
        let service = ServerService::new(0, std::env::temp_dir().join("playoff_site_no_such_dir"));
        assert!(service.run().await.is_err());
    }
}
