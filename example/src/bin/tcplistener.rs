use std::net::SocketAddr;
use tokio::net::{TcpListener, TcpStream};

const DEFAULT_ADDR: &str = "127.0.0.1:42069";

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let addr = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_ADDR.into());
    let listener = TcpListener::bind(&addr).await?;
    log::info!("listening on {}", listener.local_addr()?);

    loop {
        let (io, peer) = match listener.accept().await {
            Ok(ok) => ok,
            Err(err) => {
                log::error!("failed to accept connection: {err}");
                continue;
            }
        };

        log::info!("connection accepted: {peer}");
        tokio::spawn(connection(io, peer));
    }
}

async fn connection(io: TcpStream, peer: SocketAddr) {
    match httpfromtcp::parse_request_async(io).await {
        Ok(req) => print!("{req}"),
        Err(err) => log::error!("failed to parse request from {peer}: {err}"),
    }
    log::info!("connection closed: {peer}");
}
