use std::fs::File;
use std::io::Write;

use broker::build_app;
use broker::config::BrokerConfig;
use tempfile::TempDir;

mod helpers;
use helpers::{course, get};

#[tokio::test]
async fn serves_jsonl_catalog() {
    let tmp = TempDir::new().expect("tmpdir");
    let path = tmp.path().join("courses.jsonl");
    {
        let mut f = File::create(&path).unwrap();
        for (id, code, advanced) in [("3", "TDDE01", true), ("1", "TATA41", false), ("2", "TSEA28", true)] {
            let mut c = course(id, code);
            c.advanced = advanced;
            writeln!(f, "{}", serde_json::to_string(&c).unwrap()).unwrap();
        }
    }

    let cfg = BrokerConfig {
        catalog_path: path.to_string_lossy().into_owned(),
        store_retries: 0,
        ..BrokerConfig::default()
    };
    let app = build_app(&cfg);

    let (status, v) = get(&app, "/courses?courseLevel=Avancerad%20niv%C3%A5").await;
    assert_eq!(status, 200);
    assert_eq!(v["totalCount"], 2);
    assert_eq!(v["data"][0]["code"], "TDDE01");
    assert_eq!(v["data"][1]["code"], "TSEA28");
    assert_eq!(v["data"][0]["mainFieldOfStudy"][0], "Datateknik");

    let (_, v) = get(&app, "/healthz").await;
    assert_eq!(v["courses"], 3);
}

#[tokio::test]
async fn missing_catalog_is_500() {
    let cfg = BrokerConfig {
        catalog_path: "/nonexistent/courses.jsonl".into(),
        store_retries: 1,
        store_backoff_ms: 1,
        ..BrokerConfig::default()
    };
    let app = build_app(&cfg);
    let (status, v) = get(&app, "/courses").await;
    assert_eq!(status, 500);
    assert_eq!(v["success"], false);
    assert!(!v["error"].as_str().unwrap().contains("nonexistent"));
}
