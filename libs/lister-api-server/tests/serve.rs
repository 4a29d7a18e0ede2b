use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio_util::sync::CancellationToken;

use lister_api::Record;
use lister_engine::{Bound, BoundedLister};
use store_memory::MemoryStore;

async fn get(addr: std::net::SocketAddr, path: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.expect("connect");
    let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.expect("write request");
    let mut response = String::new();
    stream.read_to_string(&mut response).await.expect("read response");
    response
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn serves_listing_and_shuts_down_on_cancel() {
    let store = MemoryStore::new(16);
    store
        .insert(["ada", "bob", "cy", "dee", "eve", "fay"].map(|k| Record::key_only(k)))
        .await;
    let lister = BoundedLister::new(Arc::new(store));
    let app = lister_api_server::router(lister, Bound::new(5).expect("bound"), None);

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let shutdown = CancellationToken::new();
    let server = tokio::spawn(lister_api_server::serve(listener, app, shutdown.clone()));

    let health = get(addr, "/health").await;
    assert!(health.starts_with("HTTP/1.1 200"), "{health}");

    let listing = get(addr, "/api/records").await;
    assert!(listing.starts_with("HTTP/1.1 200"), "{listing}");
    assert!(listing.contains(r#""count":5"#), "{listing}");
    assert!(listing.contains(r#""key":"eve""#), "{listing}");
    assert!(!listing.contains(r#""key":"fay""#), "{listing}");

    let bad = get(addr, "/api/records?limit=0").await;
    assert!(bad.starts_with("HTTP/1.1 400"), "{bad}");

    shutdown.cancel();
    server.await.expect("join").expect("serve");
}
