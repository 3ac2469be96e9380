//! The server over a real socket, stopped through `serve_with_shutdown`.

use std::net::{SocketAddr, TcpListener as StdListener};
use std::time::Duration;

use chirpy::config::Platform;
use chirpy::{AppState, Server, app};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::oneshot;

fn free_addr() -> SocketAddr {
    let listener = StdListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

async fn connect(addr: SocketAddr) -> TcpStream {
    for _ in 0..50 {
        if let Ok(stream) = TcpStream::connect(addr).await {
            return stream;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("server never started listening on {addr}");
}

async fn roundtrip(addr: SocketAddr, request: &str) -> String {
    let mut stream = connect(addr).await;
    stream.write_all(request.as_bytes()).await.unwrap();
    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();
    String::from_utf8(raw).unwrap()
}

#[tokio::test]
async fn serves_until_shutdown_fires() {
    let addr = free_addr();
    let state = AppState::new(None, Platform::Dev, ".");
    let (stop, stopped) = oneshot::channel::<()>();

    let server = tokio::spawn(Server::bind(addr).serve_with_shutdown(app::router(state), async {
        let _ = stopped.await;
    }));

    let res = roundtrip(
        addr,
        "GET /admin/healthz HTTP/1.1\r\nhost: localhost\r\nuser-agent: chirpy-test\r\nconnection: close\r\n\r\n",
    )
    .await;
    assert!(res.starts_with("HTTP/1.1 200 OK\r\n"), "{res}");
    assert!(res.ends_with("\r\n\r\nOK"), "{res}");

    let res = roundtrip(
        addr,
        "HEAD /admin/healthz HTTP/1.1\r\nhost: localhost\r\nconnection: close\r\n\r\n",
    )
    .await;
    assert!(res.starts_with("HTTP/1.1 200 OK\r\n"), "{res}");
    assert!(res.ends_with("\r\n\r\n"), "{res}");

    stop.send(()).unwrap();
    let outcome = tokio::time::timeout(Duration::from_secs(5), server).await.unwrap().unwrap();
    assert!(outcome.is_ok());
}

#[tokio::test]
async fn unknown_methods_are_405_on_the_wire() {
    let addr = free_addr();
    let state = AppState::new(None, Platform::Dev, ".");
    let (stop, stopped) = oneshot::channel::<()>();

    let server = tokio::spawn(Server::bind(addr).serve_with_shutdown(app::router(state), async {
        let _ = stopped.await;
    }));

    let res = roundtrip(
        addr,
        "BREW /admin/healthz HTTP/1.1\r\nhost: localhost\r\nconnection: close\r\n\r\n",
    )
    .await;
    assert!(res.starts_with("HTTP/1.1 405 Method Not Allowed\r\n"), "{res}");

    stop.send(()).unwrap();
    assert!(server.await.unwrap().is_ok());
}
