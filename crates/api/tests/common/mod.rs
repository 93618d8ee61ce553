#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use springfield_api::config::ServerConfig;
use springfield_api::router::build_app_router;
use springfield_api::state::AppState;
use springfield_core::DatasetContext;

pub const CHARACTERS: &str = "\
character_id,name,male,lgbt,married,smoker,first_appearance,voice_actor,num_appearances,text,tokens
1,Homer Simpson,True,False,True,False,1,Dan Castellaneta,706,\"Father, works at the <plant>\",\"{'father': 0.6}\"
2,Marge Simpson,False,False,True,False,1,Julie Kavner,700,Mother,\"{'mother': 1.0}\"
3,Patty Bouvier,False,True,False,True,1,Julie Kavner,120,Twin sister,\"{'twin': 0.7}\"
4,Moe Szyslak,True,False,False,True,2,Hank Azaria,300,Bartender,\"{'bar': 0.9}\"
5,Ned Flanders,True,False,True,False,2,Harry Shearer,400,Neighbor,\"{'neighbor': 0.8}\"
6,Selma Bouvier,False,False,False,True,1,Julie Kavner,110,Twin sister,\"{'twin': 0.7}\"
7,Krusty,True,False,False,True,2,Dan Castellaneta,200,Clown,\"{'clown': 1.0}\"
";

pub const EPISODES: &str = "\
episode_id,character_id,season,year
1,1,1,1989
1,2,1,1989
1,3,1,1989
2,1,1,1990
2,4,1,1990
2,5,1,1990
2,7,1,1990
";

pub const RAW: &str = "\
episode_id,character_id
1,1
1,2
1,3
2,1
2,4
";

pub const SEASON_PROPERTIES: &str = "\
season,num_nodes,num_edges,average_degree,average_clustering,average_shortest_path,diameter
1,62,441,14.23,0.71,2.12,4
25,362,4227,23.35,0.69,2.31,5
";

/// Bytes served for every fixture image.
pub const IMAGE_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nfixture";

/// A router over fixture data. The temporary directories live as long as
/// this value.
pub struct TestApp {
    pub router: Router,
    pub datasets: Arc<DatasetContext>,
    _dir: TempDir,
}

impl TestApp {
    pub fn app(&self) -> Router {
        self.router.clone()
    }
}

fn write_fixture(root: &Path) {
    let data = root.join("data");
    let img = root.join("img");
    fs::create_dir_all(&data).unwrap();
    fs::create_dir_all(&img).unwrap();

    fs::write(data.join("characters.csv"), CHARACTERS).unwrap();
    fs::write(data.join("episodes.csv"), EPISODES).unwrap();
    fs::write(data.join("simpsons_ep-char.csv"), RAW).unwrap();
    fs::write(data.join("season_properties.csv"), SEASON_PROPERTIES).unwrap();
    fs::write(img.join("homer.png"), IMAGE_BYTES).unwrap();
    fs::write(img.join("smokers.png"), IMAGE_BYTES).unwrap();
}

/// Build a test `ServerConfig` pointing at `root/data` and `root/img`.
pub fn test_config(root: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:8501".to_string()],
        request_timeout_secs: 30,
        data_dir: root.join("data"),
        img_dir: root.join("img"),
        sample_rows: 5,
        sample_seed: 42,
    }
}

/// Build the full application router, with the production middleware stack,
/// over freshly written fixture files.
pub fn build_test_app() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());

    let config = test_config(dir.path());
    let datasets = Arc::new(DatasetContext::load(&config.data_dir).unwrap());
    let state = AppState {
        datasets: Arc::clone(&datasets),
        config: Arc::new(config.clone()),
    };

    TestApp {
        router: build_app_router(state, &config).unwrap(),
        datasets,
        _dir: dir,
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
