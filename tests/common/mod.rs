#![allow(dead_code)]

use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use axum::Router;
use lookupcli::config::Config;

/// Request counter shared between a fake endpoint and the test body.
#[derive(Clone, Default)]
pub struct Hits(Arc<AtomicUsize>);

impl Hits {
    pub fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Values of one query parameter, as a fake endpoint received them.
#[derive(Clone, Default)]
pub struct Seen(Arc<Mutex<Vec<Option<String>>>>);

impl Seen {
    pub fn record(&self, value: Option<&String>) {
        self.0.lock().unwrap().push(value.cloned());
    }

    pub fn values(&self) -> Vec<Option<String>> {
        self.0.lock().unwrap().clone()
    }
}

/// Serves `app` on an ephemeral local port for the rest of the test.
pub async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Config whose endpoints all point at `addr`.
pub fn local_config(addr: SocketAddr, extra: &[(&str, &str)]) -> Config {
    let mut vars: HashMap<String, String> = HashMap::from([
        (
            "IBGE_API_URL".to_string(),
            format!("http://{addr}/api/v2/censos/nomes"),
        ),
        (
            "OPENWEATHER_API_URL".to_string(),
            format!("http://{addr}/data/2.5/weather"),
        ),
        ("SPOTIFY_API_URL".to_string(), format!("http://{addr}/v1")),
        (
            "SPOTIFY_API_TOKEN_URL".to_string(),
            format!("http://{addr}/api/token"),
        ),
    ]);
    for (key, value) in extra {
        vars.insert(key.to_string(), value.to_string());
    }

    Config::from_source(|key| vars.get(key).cloned())
}
